// src/gui/actions/parse.rs
use std::path::Path;

use tracing::{error, info};

use crate::{
    api::ApiClient,
    config::consts::MAX_FILE_SIZE,
    file,
    gui::app::App,
    gui::progress::GuiProgress,
};

/// The whole upload flow: validate locally, POST to the service, adopt
/// the decoded result. One sequential request; errors land on the status
/// line and keep the previous result on screen.
pub fn parse(app: &mut App, path: &Path) {
    app.apply_api_url();

    *app.progress.lock().unwrap() = Some((0.0, s!("Preparing...")));

    let info = match file::validate_sav(path, MAX_FILE_SIZE) {
        Ok(info) => info,
        Err(e) => {
            error!("Parse: rejected {}: {e}", path.display());
            app.status(format!("Error: {e}"));
            *app.progress.lock().unwrap() = None;
            return;
        }
    };
    info!("Parse: file {} ({})", info.name, info.size_display());
    app.source = Some(info);

    let client = match ApiClient::new(app.state.options.api.base_url()) {
        Ok(client) => client,
        Err(e) => {
            error!("Parse: {e:#}");
            app.status(format!("Error: {e}"));
            *app.progress.lock().unwrap() = None;
            return;
        }
    };

    let mut prog = GuiProgress::new(app.progress.clone(), app.status.clone());

    // → This is where the upload happens ←
    match client.parse_file(path, &mut prog) {
        Ok(result) => {
            match result.to_pretty_json() {
                Ok(text) => app.raw_json = text,
                Err(e) => {
                    error!("Parse: raw view render failed: {e:#}");
                    app.raw_json.clear();
                }
            }
            app.result = Some(result);
            app.status("Ready");
        }
        Err(e) => {
            error!("Parse: error file={}: {e:#}", path.display());
            app.status(format!("Error: {e}"));
            *app.progress.lock().unwrap() = None;
        }
    }
}
