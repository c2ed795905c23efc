// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Result tabs. One shared parse result, four views of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TabKind {
    Metadata,
    Variables,
    Data,
    RawJson,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    base_url: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self { base_url: s!(DEFAULT_API_URL) }
    }
}

impl ApiOptions {
    pub fn base_url(&self) -> &str { &self.base_url }

    /// Normalize: trim whitespace and any trailing slashes.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = s!(url.trim().trim_end_matches('/'));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Json => "json", ExportFormat::Csv => "csv" }
    }
    /// Field separator; only tabular formats have one.
    pub fn delim(&self) -> Option<char> {
        match self { ExportFormat::Json => None, ExportFormat::Csv => Some(',') }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Full output path: dir + stem + extension chosen by the format.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self.format.ext();
        path.push(join!(stem, ".", ext));
        path
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        // Ignore pasted extension; format controls it.
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_EXPORT_STEM),
        }
    }
}
