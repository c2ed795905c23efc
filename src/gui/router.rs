// src/gui/router.rs
use super::tabs::{ self, Tab };

pub static TABS: &[&'static dyn Tab] = &[
    &tabs::metadata::TAB,
    &tabs::variables::TAB,
    &tabs::preview::TAB,
    &tabs::raw_json::TAB,
];

pub fn all_tabs() -> &'static [&'static dyn Tab] {
    TABS
}
