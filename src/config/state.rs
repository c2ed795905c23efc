// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::TABS
    pub current_tab_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1000,
            window_h: 680,
            current_tab_index: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
