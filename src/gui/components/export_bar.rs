// src/gui/components/export_bar.rs

use std::path::PathBuf;

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        });

        if export.format != prev_fmt {
            info!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers (CSV)");
        if export.include_headers != before_headers {
            info!("UI: include_headers → {}", export.include_headers);
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / PARSE) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(
                egui::Button::new(egui::RichText::new("PARSE").color(black).strong())
                    .fill(red),
            )
            .clicked()
        {
            let path = PathBuf::from(app.file_path_text.trim());
            if path.as_os_str().is_empty() {
                app.status("No file selected");
                debug!("Parse: Clicked, but the file field is empty");
            } else {
                actions::parse(app, &path);
            }
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    });
}
