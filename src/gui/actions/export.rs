// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::{file, gui::app::App, gui::tabs::ResultCtx};

/// Write the active tab's export string to the configured output path.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        info!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let Some(result) = app.result.as_ref() else {
        app.status("Nothing to export");
        debug!("Export: Clicked, but no result is loaded");
        return;
    };

    let tab = app.current_tab();
    let rctx = ResultCtx { result, raw_json: &app.raw_json };
    let view = tab.export_table(&rctx);

    info!(
        "Export: Begin tab={:?} format={:?} rows={}",
        tab.kind(),
        app.state.options.export.format,
        view.rows.len()
    );

    let res = file::to_export_string(&app.state.options, result, &view)
        .and_then(|contents| file::write_export_single(&app.state.options.export, &contents));

    let status_msg = match res {
        Ok(path) => {
            info!("Export: OK → {}", path.display());
            format!("Exported: {}", path.display())
        }
        Err(e) => {
            error!("Export: Error: {e:#}");
            format!("Export error: {e}")
        }
    };

    // mutate app only after the result borrows are gone
    app.status(status_msg);
}
