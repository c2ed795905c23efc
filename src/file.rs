// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::config::consts::SAV_EXTENSION;
use crate::config::options::{AppOptions, ExportFormat, ExportOptions};
use crate::result::{ParseResult, TableView};
use crate::csv;

/// What the upload panel shows about the chosen file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

impl FileInfo {
    pub fn size_display(&self) -> String {
        format_file_size(self.size)
    }
}

/// Check a candidate upload before any network use.
/// Rejects non-`.sav` names, non-files, empty files, and files above `max_size`.
pub fn validate_sav(path: &Path, max_size: u64) -> Result<FileInfo> {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let is_sav = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case(SAV_EXTENSION))
        .unwrap_or(false);
    if !is_sav {
        bail!("Not a .sav file: {name}");
    }

    let meta = fs::metadata(path)
        .with_context(|| format!("Cannot read file: {}", path.display()))?;
    if !meta.is_file() {
        bail!("Not a regular file: {name}");
    }
    if meta.len() == 0 {
        bail!("File is empty: {name}");
    }
    if meta.len() > max_size {
        bail!(
            "File too large: {} is {} (limit {})",
            name,
            format_file_size(meta.len()),
            format_file_size(max_size)
        );
    }

    Ok(FileInfo { name, size: meta.len() })
}

/// Human-readable size: 1024-based, `0 Bytes` / `1.5 KB` / `12.34 MB` —
/// two decimals with trailing zeros trimmed.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return s!("0 Bytes");
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut exp = 0usize;
    let mut value = bytes as f64;
    while value >= 1024.0 && exp < UNITS.len() - 1 {
        value /= 1024.0;
        exp += 1;
    }

    let mut num = format!("{value:.2}");
    while num.ends_with('0') { num.pop(); }
    if num.ends_with('.') { num.pop(); }
    join!(num, " ", UNITS[exp])
}

/// The string an export (or clipboard copy) of the current tab produces.
/// JSON is always the full result; CSV is the given table view.
pub fn to_export_string(
    options: &AppOptions,
    result: &ParseResult,
    view: &TableView,
) -> Result<String> {
    match options.export.format {
        ExportFormat::Json => result.to_pretty_json(),
        ExportFormat::Csv => {
            // delim() is Some for every tabular format
            let sep = options.export.format.delim().unwrap_or(',');
            Ok(csv::table_to_string(view, options.export.include_headers, sep))
        }
    }
}

/// Write one export file to the path implied by `export`.
/// Returns the final path written to.
pub fn write_export_single(export: &ExportOptions, contents: &str) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents)
        .with_context(|| format!("Cannot write export: {}", path.display()))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        bail!("Path exists but is not a directory: {}", dir.display());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create directory: {}", dir.display()))?;
    }
    Ok(())
}
