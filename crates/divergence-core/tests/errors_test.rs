use divergence_core::errors::*;
use divergence_core::models::ComparisonRequest;

#[test]
fn config_validation_error_carries_field_and_message() {
    let err = ConfigError::ValidationFailed {
        field: "detector.confidence_threshold".into(),
        message: "must be strictly between 0.0 and 1.0".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("detector.confidence_threshold"));
    assert!(msg.contains("strictly between"));
}

#[test]
fn config_errors_share_one_code() {
    let missing = ConfigError::FileNotFound {
        path: "/nope/divergence.toml".into(),
    };
    assert_eq!(missing.error_code(), "CONFIG_ERROR");
    assert_eq!(
        missing.coded_string(),
        "[CONFIG_ERROR] Config file not found: /nope/divergence.toml"
    );
}

#[test]
fn input_error_from_serde_keeps_message() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: InputError = serde_err.into();
    assert_eq!(err.error_code(), "INPUT_ERROR");
    assert!(err.coded_string().starts_with("[INPUT_ERROR] Invalid comparison request:"));
}

#[test]
fn malformed_timestamp_is_rejected_at_the_boundary() {
    let json = r#"{
        "twin": {"name": "twin", "data": [{"timestamp": "not-a-date", "value": 1.0}]},
        "baseline": {"name": "baseline", "data": []}
    }"#;
    let err = ComparisonRequest::from_json(json).unwrap_err();
    assert!(matches!(err, InputError::Json { .. }));
}

#[test]
fn blank_series_name_is_rejected() {
    let json = r#"{
        "twin": {"name": "  ", "data": []},
        "baseline": {"name": "baseline", "data": []}
    }"#;
    let err = ComparisonRequest::from_json(json).unwrap_err();
    assert!(matches!(err, InputError::EmptySeriesName { role: "twin" }));
}
