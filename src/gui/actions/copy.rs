// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{file, gui::app::App, gui::tabs::ResultCtx};

/// Put the active tab's export string on the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(result) = app.result.as_ref() else {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but no result is loaded");
        return;
    };

    let tab = app.current_tab();
    let rctx = ResultCtx { result, raw_json: &app.raw_json };
    let view = tab.export_table(&rctx);

    match file::to_export_string(&app.state.options, result, &view) {
        Ok(txt) => {
            info!(
                "Copy: tab={:?} format={:?} rows={}",
                tab.kind(),
                app.state.options.export.format,
                view.rows.len()
            );
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            error!("Copy: {e:#}");
            app.status(format!("Error: {e}"));
        }
    }
}
