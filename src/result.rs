// src/result.rs
//
// The parse result returned by the service, held as the single in-memory
// "last successful parse" and re-projected into table views per tab.
// The client treats it as display data; no validation beyond decode.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::consts::PREVIEW_ROWS;

/// Decoded payload of a successful parse.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParseResult {
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

/// One column descriptor. The service attaches more keys than we render
/// (width, formats, hasLabel); `extra` keeps them so the raw JSON view and
/// JSON export round-trip the payload unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Variable {
    pub fn is_numeric(&self) -> bool {
        self.kind.eq_ignore_ascii_case("numeric")
    }

    /// Display label, `N/A` when the variable has none.
    pub fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or("N/A")
    }
}

/// Owned tabular projection handed to the table widget and the CSV writer.
#[derive(Clone, Debug, Default)]
pub struct TableView {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    /// Per-column numeric hint (centered rendering); empty = all text.
    pub numeric: Vec<bool>,
}

impl TableView {
    pub fn column_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn is_numeric_column(&self, ci: usize) -> bool {
        self.numeric.get(ci).copied().unwrap_or(false)
    }
}

impl ParseResult {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Malformed parse result payload")
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Could not serialize parse result")
    }

    pub fn variable_count(&self) -> usize { self.variables.len() }
    pub fn row_count(&self) -> usize { self.data.len() }

    /// Metadata as a two-column key/value table, no header row.
    pub fn metadata_table(&self) -> TableView {
        let rows = self.metadata.iter()
            .map(|(k, v)| vec![k.clone(), cell_text(v)])
            .collect();
        TableView { headers: None, rows, numeric: Vec::new() }
    }

    /// Variable list as Name | Type | Label.
    pub fn variables_table(&self) -> TableView {
        let headers = vec![s!("Name"), s!("Type"), s!("Label")];
        let rows = self.variables.iter()
            .map(|v| vec![v.name.clone(), v.kind.clone(), s!(v.label_or_default())])
            .collect();
        TableView { headers: Some(headers), rows, numeric: Vec::new() }
    }

    /// Data matrix with variable names as headers, positionally aligned.
    /// `limit` caps the row count (display preview); `None` keeps all rows.
    /// Rows are padded/truncated to the header width.
    pub fn data_table(&self, limit: Option<usize>) -> TableView {
        let headers: Vec<String> = self.variables.iter().map(|v| v.name.clone()).collect();
        let numeric: Vec<bool> = self.variables.iter().map(|v| v.is_numeric()).collect();
        let cols = headers.len();

        let take = limit.unwrap_or(usize::MAX).min(self.data.len());
        let rows = self.data[..take].iter()
            .map(|r| {
                let mut out: Vec<String> = r.iter().take(cols).map(cell_text).collect();
                out.resize(cols, s!());
                out
            })
            .collect();

        TableView { headers: Some(headers), rows, numeric }
    }

    /// Number of rows the preview shows for this result.
    pub fn preview_len(&self) -> usize {
        self.data.len().min(PREVIEW_ROWS)
    }
}

/// Cell rendering: strings bare, everything else in its JSON text form
/// (numbers as-is, `true`/`false`, `null`).
pub fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
