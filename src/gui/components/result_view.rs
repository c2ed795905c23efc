// src/gui/components/result_view.rs
//
// Central content: the active tab rendered from the held result.

use eframe::egui;

use crate::gui::app::App;
use crate::gui::tabs::{ResultCtx, TabContent};

use super::data_table;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(result) = app.result.as_ref() else {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.weak("No data yet — drop a .sav file or enter a path and hit PARSE.");
        });
        return;
    };

    let tab = app.current_tab();
    let rctx = ResultCtx { result, raw_json: &app.raw_json };

    match tab.content(&rctx) {
        TabContent::Table(view) => {
            // Note first; the table takes all remaining height.
            if let Some(note) = tab.note(&rctx) {
                ui.weak(note);
                ui.add_space(4.0);
            }
            data_table::draw(ui, &view);
        }
        TabContent::Text(text) => {
            egui::ScrollArea::both()
                .id_salt("raw_json_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.monospace(text);
                });
        }
    }
}
