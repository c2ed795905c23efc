// src/gui/tabs/metadata.rs
use crate::config::options::TabKind::{ self, * };

use super::{ ResultCtx, Tab, TabContent };

pub struct MetadataTab;
pub static TAB: MetadataTab = MetadataTab;

impl Tab for MetadataTab {
    fn kind(&self) -> TabKind { Metadata }
    fn title(&self) -> &'static str { "Metadata" }

    fn content<'a>(&self, ctx: &ResultCtx<'a>) -> TabContent<'a> {
        TabContent::Table(ctx.result.metadata_table())
    }
}
