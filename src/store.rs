// src/store.rs
//
// Durable app settings under .store/ — the API base URL the user last
// entered. Parse results are deliberately not persisted; the app holds
// one result in memory, session only.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::consts::{DEFAULT_API_URL, SETTINGS_FILE, STORE_DIR};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { api_url: s!(DEFAULT_API_URL) }
    }
}

fn settings_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable. Startup never fails on settings.
pub fn load_settings() -> Settings {
    let path = settings_path();
    let Ok(text) = fs::read_to_string(&path) else {
        debug!("Settings: no {} yet, using defaults", path.display());
        return Settings::default();
    };
    match serde_json::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            debug!("Settings: ignoring corrupt {} ({e})", path.display());
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
        }
    }
    let text = serde_json::to_string_pretty(settings).context("Cannot encode settings")?;
    fs::write(&path, text)
        .with_context(|| format!("Cannot write settings: {}", path.display()))?;
    Ok(path)
}
