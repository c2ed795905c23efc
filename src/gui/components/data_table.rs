// src/gui/components/data_table.rs
//
// Draws one TableView. Purely a view; numeric columns are centered, the
// key column of a headerless (key/value) table is bold.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::result::TableView;

pub fn draw(ui: &mut egui::Ui, view: &TableView) {
    let cols = view.column_count();
    if cols == 0 {
        ui.weak("Empty table");
        return;
    }

    // Reserve space for scroll bars instead of floating them over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("result_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            inner_table(ui, view, cols);
        });
}

fn inner_table(ui: &mut egui::Ui, view: &TableView, cols: usize) {
    let keyvalue = view.headers.is_none();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        // Reset egui_extras table state when the shape changes so stale
        // widths from the previous result don't stick around.
        .id_salt(("result_table", cols, keyvalue));

    for ci in 0..cols {
        let w = if keyvalue && ci == 0 { 180.0 } else { 140.0 };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let draw_body = |body: egui_extras::TableBody<'_>| {
        body.rows(20.0, view.rows.len(), |mut row| {
            let ri = row.index();
            let Some(cells) = view.rows.get(ri) else { return };

            for ci in 0..cols {
                row.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let Some(cell) = cells.get(ci) else { return };

                        let mut rt = RichText::new(cell);
                        if keyvalue && ci == 0 {
                            rt = rt.strong();
                        }
                        if view.is_numeric_column(ci) {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        }
                    });
                });
            }
        });
    };

    if let Some(hs) = &view.headers {
        table
            .header(24.0, |mut header| {
                for (ci, label) in hs.iter().enumerate() {
                    header.col(|ui| {
                        ui.scope(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let widget = egui::Label::new(RichText::new(label).strong())
                                .selectable(false);
                            if view.is_numeric_column(ci) {
                                ui.centered_and_justified(|ui| { ui.add(widget); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.add(widget);
                                });
                            }
                        });
                    });
                }
            })
            .body(draw_body);
    } else {
        table.body(draw_body);
    }
}
