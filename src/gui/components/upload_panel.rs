// src/gui/components/upload_panel.rs
//
// Left panel: API endpoint + connectivity check, the drop target, the
// file path field, selected-file info, and the upload progress bar.

use eframe::egui::{self, RichText, TextStyle};
use tracing::{error, info};

use crate::{api::ApiClient, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("SAV Inspect");
    ui.add_space(4.0);

    // --- API endpoint ---
    ui.label("API URL:");
    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.api_url_text).font(TextStyle::Monospace),
    );
    if resp.changed() {
        app.api_url_dirty = true;
    }
    if resp.lost_focus() {
        app.apply_api_url();
    }

    if ui.button("Test connection").clicked() {
        app.apply_api_url();
        let outcome = ApiClient::new(app.state.options.api.base_url())
            .and_then(|client| client.health());
        app.connection_note = Some(match outcome {
            Ok(health) => {
                info!("Health: OK {}", health.describe());
                format!("Connected: {}", health.describe())
            }
            Err(e) => {
                error!("Health: {e:#}");
                format!("Connection failed: {e}")
            }
        });
    }
    if let Some(note) = &app.connection_note {
        ui.label(note);
    }

    ui.separator();

    // --- Drop target ---
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let mut frame = egui::Frame::group(ui.style());
    if hovering {
        frame = frame.fill(ui.visuals().selection.bg_fill.linear_multiply(0.25));
    }
    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("Drop a .sav file here").strong());
            ui.label("or enter a path below");
            ui.add_space(12.0);
        });
    });

    ui.add_space(4.0);
    ui.label("File:");
    ui.add(
        egui::TextEdit::singleline(&mut app.file_path_text).font(TextStyle::Monospace),
    );

    // --- Selected file ---
    if let Some(info) = &app.source {
        ui.separator();
        ui.label(RichText::new("Selected file").strong());
        ui.label(format!("Name: {}", info.name));
        ui.label(format!("Size: {}", info.size_display()));
    }

    // --- Upload progress ---
    let progress = app.progress.lock().unwrap().clone();
    if let Some((frac, msg)) = progress {
        ui.add_space(8.0);
        ui.add(egui::ProgressBar::new(frac).text(msg));
    }
}
