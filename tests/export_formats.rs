// tests/export_formats.rs
//
// Export-surface tests: JSON/CSV assembly, the preview cap, header/data
// column alignment, and output-path extension handling.
//
use sav_inspect::config::options::{AppOptions, ExportFormat, ExportOptions};
use sav_inspect::file::{to_export_string, write_export_single};
use sav_inspect::result::ParseResult;

fn sample_result() -> ParseResult {
    ParseResult::from_json(
        r#"{
            "metadata": {"caseCount": 12, "fileLabel": "Demo"},
            "variables": [
                {"name": "ID", "type": "numeric"},
                {"name": "NAME", "type": "string"},
                {"name": "SCORE", "type": "numeric"}
            ],
            "data": [
                [1, "Plain", 10.5],
                [2, "Comma, Inc.", 20],
                [3, "Say \"hi\"", 30],
                [4, "d", 40], [5, "e", 50], [6, "f", 60], [7, "g", 70],
                [8, "h", 80], [9, "i", 90], [10, "j", 100], [11, "k", 110],
                [12, "l", 120]
            ]
        }"#,
    )
    .unwrap()
}

fn options_with(format: ExportFormat) -> AppOptions {
    let mut options = AppOptions::default();
    options.export.format = format;
    options
}

#[test]
fn json_export_is_the_full_result_and_round_trips() {
    let result = sample_result();
    let options = options_with(ExportFormat::Json);

    // the view argument is ignored for JSON: always the whole result
    let view = result.metadata_table();
    let text = to_export_string(&options, &result, &view).unwrap();

    let again = ParseResult::from_json(&text).unwrap();
    assert_eq!(again.variable_count(), 3);
    assert_eq!(again.row_count(), 12);
}

#[test]
fn csv_export_has_variable_headers_and_all_rows() {
    let result = sample_result();
    let options = options_with(ExportFormat::Csv);

    let view = result.data_table(None);
    let text = to_export_string(&options, &result, &view).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "ID,NAME,SCORE");
    assert_eq!(lines.len(), 1 + 12, "export must not cap at the preview size");

    // quoting only where needed
    assert_eq!(lines[1], "1,Plain,10.5");
    assert_eq!(lines[2], "2,\"Comma, Inc.\",20");
    assert_eq!(lines[3], "3,\"Say \"\"hi\"\"\",30");
}

#[test]
fn csv_export_can_omit_headers() {
    let result = sample_result();
    let mut options = options_with(ExportFormat::Csv);
    options.export.include_headers = false;

    let view = result.data_table(None);
    let text = to_export_string(&options, &result, &view).unwrap();
    assert!(text.lines().next().unwrap().starts_with("1,"));
}

#[test]
fn preview_caps_rows_and_keeps_column_order() {
    let result = sample_result();

    let preview = result.data_table(Some(10));
    assert_eq!(preview.rows.len(), 10);
    assert_eq!(
        preview.headers.as_deref(),
        Some(&[String::from("ID"), String::from("NAME"), String::from("SCORE")][..])
    );
    // numeric hints follow variable types positionally
    assert_eq!(preview.numeric, vec![true, false, true]);
}

#[test]
fn rows_are_padded_and_truncated_to_the_header_width() {
    let result = ParseResult::from_json(
        r#"{
            "variables": [{"name": "A", "type": "numeric"}, {"name": "B", "type": "string"}],
            "data": [[1], [2, "x", "extra"]]
        }"#,
    )
    .unwrap();

    let view = result.data_table(None);
    assert_eq!(view.rows[0], vec!["1", ""]);
    assert_eq!(view.rows[1], vec!["2", "x"]);
}

#[test]
fn metadata_and_variables_tables_have_expected_shape() {
    let result = sample_result();

    let meta = result.metadata_table();
    assert!(meta.headers.is_none());
    assert!(meta.rows.iter().all(|r| r.len() == 2));
    assert!(meta.rows.iter().any(|r| r[0] == "fileLabel" && r[1] == "Demo"));

    let vars = result.variables_table();
    assert_eq!(
        vars.headers.as_deref(),
        Some(&[String::from("Name"), String::from("Type"), String::from("Label")][..])
    );
    // no label → placeholder
    assert!(vars.rows.iter().all(|r| r[2] == "N/A"));
}

#[test]
fn out_path_extension_follows_the_format() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Json;
    assert!(export.out_path().to_string_lossy().ends_with("spss_data.json"));

    export.format = ExportFormat::Csv;
    assert!(export.out_path().to_string_lossy().ends_with("spss_data.csv"));

    // a pasted extension is ignored; the format stays in charge
    export.set_path("out/custom/result.data");
    assert!(export.out_path().to_string_lossy().ends_with("result.csv"));
    assert!(export.out_path().starts_with("out/custom"));
}

#[test]
fn export_writes_the_file_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let result = sample_result();
    let mut options = options_with(ExportFormat::Csv);

    let target = dir.path().join("nested").join("survey");
    options.export.set_path(&target.to_string_lossy());

    let view = result.data_table(None);
    let contents = to_export_string(&options, &result, &view).unwrap();
    let written = write_export_single(&options.export, &contents).unwrap();

    assert_eq!(written, dir.path().join("nested").join("survey.csv"));
    let on_disk = std::fs::read_to_string(&written).unwrap();
    assert_eq!(on_disk, contents);
}
