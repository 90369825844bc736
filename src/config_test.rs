use super::*;

#[test]
fn blank_input_yields_defaults() {
    let config = EnhanceConfig::from_json("   ").expect("blank config");
    assert_eq!(config, EnhanceConfig::default());
    assert_eq!(config.toast_duration_ms, 3_000);
    assert_eq!(config.submit_delay_ms, 2_000);
    assert_eq!(config.submit_pending_label, "Sending...");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = EnhanceConfig::from_json(r#"{ "submitDelayMs": 500, "backToTopThresholdPx": 120 }"#)
        .expect("partial config");
    assert_eq!(config.submit_delay_ms, 500);
    assert!((config.back_to_top_threshold_px - 120.0).abs() < f64::EPSILON);
    assert_eq!(config.toast_duration_ms, 3_000);
    assert_eq!(config.service_worker_url.as_deref(), Some("/sw.js"));
}

#[test]
fn null_service_worker_disables_registration() {
    let config = EnhanceConfig::from_json(r#"{ "serviceWorkerUrl": null }"#).expect("config");
    assert!(config.service_worker_url.is_none());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = EnhanceConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn toast_duration_must_exceed_enter_delay() {
    let err = EnhanceConfig::from_json(r#"{ "toastDurationMs": 50 }"#).expect_err("should fail");
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "toastDurationMs"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_pending_label_rejected() {
    let err = EnhanceConfig::from_json(r#"{ "submitPendingLabel": "  " }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "submitPendingLabel", .. }));
}

#[test]
fn lazy_threshold_out_of_range_rejected() {
    let err = EnhanceConfig::from_json(r#"{ "lazyThreshold": 1.5 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "lazyThreshold", .. }));
}
