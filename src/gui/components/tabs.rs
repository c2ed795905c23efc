// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// All tabs are views over the same held result, so switching is just an
// index change; content is rebuilt from the result on the next frame.

use eframe::egui;
use tracing::info;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let tabs = router::all_tabs();
        let cur = app.state.gui.current_tab_index;

        for (idx, tab) in tabs.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                let prev = tabs[cur].kind();
                app.state.gui.current_tab_index = idx;
                info!("UI: Tab switch {:?} → {:?}", prev, tab.kind());
            }
        }
    });
}
