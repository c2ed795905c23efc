// tests/response_decode.rs
//
// Wire-format tests: the /parse envelope and the JSON-string payload it
// carries, as produced by the parsing service.
//
use sav_inspect::api::{HealthStatus, ParseResponse};
use sav_inspect::result::{ParseResult, cell_text};

fn sample_payload() -> &'static str {
    r#"{
        "metadata": {
            "caseCount": 3,
            "variableCount": 2,
            "fileLabel": "Demo survey",
            "bias": 100.0
        },
        "variables": [
            {"name": "AGE", "type": "numeric", "width": 0, "hasLabel": true, "label": "Age in years"},
            {"name": "CITY", "type": "string", "width": 8, "hasLabel": false}
        ],
        "data": [
            [34.5, "Oslo"],
            [28.0, "Bergen"],
            [51.2, "Tromsø"]
        ]
    }"#
}

#[test]
fn success_envelope_decodes_with_camel_case_fields() {
    let body = format!(
        r#"{{
            "success": true,
            "filename": "demo.sav",
            "size": 2048,
            "processingTimeMs": 17,
            "fileSize": 2048,
            "result": {}
        }}"#,
        serde_json::Value::String(sample_payload().into())
    );

    let envelope: ParseResponse = serde_json::from_str(&body).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.filename.as_deref(), Some("demo.sav"));
    assert_eq!(envelope.processing_time_ms, Some(17));
    assert_eq!(envelope.file_size, Some(2048));

    // The result field is a JSON-encoded string, decoded in a second step.
    let result = ParseResult::from_json(&envelope.result.unwrap()).unwrap();
    assert_eq!(result.variable_count(), 2);
    assert_eq!(result.row_count(), 3);
    assert_eq!(result.variables[0].name, "AGE");
    assert!(result.variables[0].is_numeric());
    assert!(!result.variables[1].is_numeric());
}

#[test]
fn error_envelope_keeps_message_and_omits_result() {
    let body = r#"{"success": false, "error": "File must be a .sav file", "timestamp": 1}"#;
    let envelope: ParseResponse = serde_json::from_str(body).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("File must be a .sav file"));
    assert!(envelope.result.is_none());
}

#[test]
fn variable_label_defaults_to_placeholder() {
    let result = ParseResult::from_json(sample_payload()).unwrap();
    assert_eq!(result.variables[0].label_or_default(), "Age in years");
    assert_eq!(result.variables[1].label_or_default(), "N/A");
}

#[test]
fn unknown_variable_keys_survive_a_round_trip() {
    let result = ParseResult::from_json(sample_payload()).unwrap();

    // width/hasLabel are not rendered anywhere but must not be dropped
    assert_eq!(
        result.variables[1].extra.get("width"),
        Some(&serde_json::json!(8))
    );

    let encoded = result.to_pretty_json().unwrap();
    let again = ParseResult::from_json(&encoded).unwrap();
    assert_eq!(
        again.variables[0].extra.get("hasLabel"),
        Some(&serde_json::json!(true))
    );
    // absent label stays absent rather than becoming null
    assert!(!encoded.contains("\"label\": null"));
}

#[test]
fn cell_text_renders_json_scalars() {
    assert_eq!(cell_text(&serde_json::json!("Oslo")), "Oslo");
    assert_eq!(cell_text(&serde_json::json!(34.5)), "34.5");
    assert_eq!(cell_text(&serde_json::json!(true)), "true");
    assert_eq!(cell_text(&serde_json::Value::Null), "null");
}

#[test]
fn health_body_fields_are_all_optional() {
    let h: HealthStatus = serde_json::from_str(r#"{"status": "UP"}"#).unwrap();
    assert_eq!(h.describe(), "UP");

    let h: HealthStatus =
        serde_json::from_str(r#"{"service": "SPSS Parser API", "version": "1.0.0"}"#).unwrap();
    assert_eq!(h.describe(), "SPSS Parser API v1.0.0");

    let h: HealthStatus = serde_json::from_str("{}").unwrap();
    assert_eq!(h.describe(), "UP");
}
