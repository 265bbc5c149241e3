//! Tests for laguerre-model types.

use laguerre_model::{
    LargeComputationWarning, Parameter, PolynomialRequest, StudioConfig, StudioError,
};

#[test]
fn default_config_matches_documented_thresholds() {
    let config = StudioConfig::default();
    assert_eq!(config.validation.max_safe_value, 20);
    assert_eq!(config.format.short_line, 80);
    assert_eq!(config.format.long_threshold, 2000);
    assert_eq!(config.format.max_chunk, 100);
    assert_eq!(config.display.default_font_size, 14);
    assert_eq!(config.display.zoom_step, 2);
    assert_eq!(config.display.min_font_size, 6);
    assert_eq!(config.clipboard.feedback_duration().as_secs(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let config: StudioConfig = toml::from_str(
        r#"
        [format]
        short_line = 60

        [display]
        min_font_size = 8
        "#,
    )
    .expect("parse config");

    assert_eq!(config.format.short_line, 60);
    assert_eq!(config.format.max_chunk, 100);
    assert_eq!(config.display.min_font_size, 8);
    assert_eq!(config.display.default_font_size, 14);
    assert_eq!(config.validation.max_safe_value, 20);
}

#[test]
fn config_rejects_inverted_thresholds() {
    let mut config = StudioConfig::default();
    config.format.long_threshold = 10;
    let error = config.validate().expect_err("long below short");
    assert!(matches!(error, StudioError::Config(_)));

    let mut config = StudioConfig::default();
    config.display.zoom_step = 0;
    assert!(config.validate().is_err());

    let mut config = StudioConfig::default();
    config.display.default_font_size = 4;
    assert!(config.validate().is_err());
}

#[test]
fn request_serializes() {
    let request = PolynomialRequest::new(4, 2);
    let json = serde_json::to_string(&request).expect("serialize request");
    assert_eq!(json, r#"{"n":4,"l":2}"#);
    let round: PolynomialRequest = serde_json::from_str(&json).expect("deserialize request");
    assert_eq!(round, request);
}

#[test]
fn warning_message_mentions_threshold() {
    let warning = LargeComputationWarning {
        parameter: Parameter::N,
        value: 25,
        threshold: 20,
    };
    let message = warning.to_string();
    assert!(message.starts_with("n=25 may take a long time"));
    assert!(message.contains("up to 20"));
}

#[test]
fn clipboard_errors_have_copy_titles() {
    assert_eq!(StudioError::NoContent.title(), "Nothing to copy");
    let error = StudioError::ClipboardUnavailable {
        reason: "no display".to_string(),
    };
    assert_eq!(error.title(), "Copy failed");
    assert_eq!(error.to_string(), "clipboard unavailable: no display");
}
