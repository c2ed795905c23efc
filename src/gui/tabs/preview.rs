// src/gui/tabs/preview.rs
//
// Data preview: first PREVIEW_ROWS rows on screen, full matrix on export.

use crate::config::consts::PREVIEW_ROWS;
use crate::config::options::TabKind::{ self, * };
use crate::result::TableView;

use super::{ ResultCtx, Tab, TabContent };

pub struct PreviewTab;
pub static TAB: PreviewTab = PreviewTab;

impl Tab for PreviewTab {
    fn kind(&self) -> TabKind { Data }
    fn title(&self) -> &'static str { "Data" }

    fn content<'a>(&self, ctx: &ResultCtx<'a>) -> TabContent<'a> {
        TabContent::Table(ctx.result.data_table(Some(PREVIEW_ROWS)))
    }

    fn note(&self, ctx: &ResultCtx) -> Option<String> {
        let total = ctx.result.row_count();
        if total > PREVIEW_ROWS {
            Some(format!("Showing first {} of {} rows", ctx.result.preview_len(), total))
        } else {
            None
        }
    }

    fn export_table(&self, ctx: &ResultCtx) -> TableView {
        ctx.result.data_table(None)
    }
}
