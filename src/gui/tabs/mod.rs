// src/gui/tabs/mod.rs
use crate::config::options::TabKind;
use crate::result::{ParseResult, TableView};

pub mod metadata;
pub mod preview;
pub mod raw_json;
pub mod variables;

/// Everything a tab renders from: the held result plus its cached
/// pretty-printed JSON (re-serializing per frame would be wasteful).
pub struct ResultCtx<'a> {
    pub result: &'a ParseResult,
    pub raw_json: &'a str,
}

pub enum TabContent<'a> {
    Table(TableView),
    Text(&'a str),
}

/// One view over the single held parse result.
pub trait Tab: Send + Sync + 'static {
    fn kind(&self) -> TabKind;
    fn title(&self) -> &'static str;

    /// What the tab displays.
    fn content<'a>(&self, ctx: &ResultCtx<'a>) -> TabContent<'a>;

    /// Footnote under the table (e.g. preview truncation).
    fn note(&self, _ctx: &ResultCtx) -> Option<String> {
        None
    }

    /// Table used by CSV export and clipboard copy. Defaults to the
    /// displayed table; non-tabular tabs fall back to the data matrix.
    fn export_table(&self, ctx: &ResultCtx) -> TableView {
        match self.content(ctx) {
            TabContent::Table(view) => view,
            TabContent::Text(_) => ctx.result.data_table(None),
        }
    }
}
