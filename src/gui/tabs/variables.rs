// src/gui/tabs/variables.rs
use crate::config::options::TabKind::{ self, * };

use super::{ ResultCtx, Tab, TabContent };

pub struct VariablesTab;
pub static TAB: VariablesTab = VariablesTab;

impl Tab for VariablesTab {
    fn kind(&self) -> TabKind { Variables }
    fn title(&self) -> &'static str { "Variables" }

    fn content<'a>(&self, ctx: &ResultCtx<'a>) -> TabContent<'a> {
        TabContent::Table(ctx.result.variables_table())
    }
}
