// src/gui/app.rs
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use eframe::egui;
use tracing::info;

use crate::{
    config::state::AppState,
    file::FileInfo,
    result::ParseResult,
    store,
};

use super::{
    actions,
    components,
    router,
    tabs::Tab,
};

pub fn run(options: eframe::NativeOptions) -> Result<()> {
    eframe::run_native(
        "SAV Inspect",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
    .map_err(|e| anyhow!("{e}"))?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful parse; overwritten on each upload, never persisted
    pub result: Option<ParseResult>,
    pub raw_json: String,
    pub source: Option<FileInfo>,

    // text field UX (we map these <-> options on apply)
    pub api_url_text: String,
    pub api_url_dirty: bool,
    pub file_path_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // connectivity check outcome line
    pub connection_note: Option<String>,

    // status/progress (upload flow writes here)
    pub status: Arc<Mutex<String>>,
    pub progress: Arc<Mutex<Option<(f32, String)>>>,
}

impl App {
    pub fn new() -> Self {
        let mut state = AppState::default();

        // API URL: saved setting wins over the built-in default
        let settings = store::load_settings();
        state.options.api.set_base_url(&settings.api_url);

        let api_url_text = s!(state.options.api.base_url());
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        info!("Init: api={}", state.options.api.base_url());

        Self {
            state,
            result: None,
            raw_json: s!(),
            source: None,
            api_url_text,
            api_url_dirty: false,
            file_path_text: s!(),
            out_path_text,
            out_path_dirty: false,
            connection_note: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            progress: Arc::new(Mutex::new(None)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_tab(&self) -> &'static dyn Tab {
        router::all_tabs()[self.state.gui.current_tab_index]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Apply a dirty API URL text field: normalize, adopt, persist.
    pub fn apply_api_url(&mut self) {
        if !self.api_url_dirty {
            return;
        }
        self.state.options.api.set_base_url(&self.api_url_text);
        self.api_url_text = s!(self.state.options.api.base_url());
        self.api_url_dirty = false;

        let settings = store::Settings { api_url: s!(self.state.options.api.base_url()) };
        match store::save_settings(&settings) {
            Ok(p) => info!("Settings: API URL saved → {}", p.display()),
            Err(e) => tracing::error!("Settings: save failed: {e:#}"),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Native drag-and-drop: the first dropped file goes straight into
        // the parse flow, same as a typed path plus PARSE.
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            self.file_path_text = path.display().to_string();
            actions::parse(self, &path);
        }

        egui::SidePanel::left("connection")
            .resizable(false)
            .show(ctx, |ui| {
                components::upload_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::result_view::draw(ui, self);
        });
    }
}
