// src/gui/tabs/raw_json.rs
use crate::config::options::TabKind::{ self, * };

use super::{ ResultCtx, Tab, TabContent };

pub struct RawJsonTab;
pub static TAB: RawJsonTab = RawJsonTab;

impl Tab for RawJsonTab {
    fn kind(&self) -> TabKind { RawJson }
    fn title(&self) -> &'static str { "Raw JSON" }

    fn content<'a>(&self, ctx: &ResultCtx<'a>) -> TabContent<'a> {
        TabContent::Text(ctx.raw_json)
    }
}
