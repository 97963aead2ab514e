//! Configuration loading tests for carbon-smoothing.

use std::time::Duration;

use carbon_smoothing::prelude::*;

#[test]
fn test_config_deserializes_from_json() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "mode": "median",
        "buffer_size": 5,
        "period": { "secs": 0, "nanos": 20000000 }
    }"#;

    let config: SmoothingConfig = serde_json::from_str(json)?;
    config.validate()?;

    assert_eq!(config.mode, SmoothingMode::Median);
    assert_eq!(config.buffer_size, 5);
    assert_eq!(config.period, Duration::from_millis(20));
    Ok(())
}

#[test]
fn test_missing_fields_take_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let config: SmoothingConfig = serde_json::from_str(r#"{ "buffer_size": 9 }"#)?;

    assert_eq!(config.mode, SmoothingMode::Average);
    assert_eq!(config.buffer_size, 9);
    assert_eq!(config.period, DEFAULT_PERIOD);
    Ok(())
}

#[test]
fn test_config_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let config = SmoothingConfig::builder()
        .mode(SmoothingMode::Median)
        .buffer_size(11)
        .period(Duration::from_millis(75))
        .build()?;

    let json = serde_json::to_string(&config)?;
    let decoded: SmoothingConfig = serde_json::from_str(&json)?;
    assert_eq!(decoded, config);
    Ok(())
}

#[test]
fn test_unvalidated_config_is_clamped_by_signal() -> Result<(), Box<dyn std::error::Error>> {
    let config: SmoothingConfig = serde_json::from_str(r#"{ "buffer_size": 0 }"#)?;
    assert!(config.validate().is_err());

    let signal = SmoothedSignal::<i32>::from_config(&config);
    assert_eq!(signal.capacity(), 1);
    Ok(())
}

#[test]
fn test_unknown_mode_is_rejected() {
    let result: Result<SmoothingConfig, _> = serde_json::from_str(r#"{ "mode": "mode" }"#);
    assert!(result.is_err());
}

#[test]
fn test_sampler_uses_config_period() -> Result<(), Box<dyn std::error::Error>> {
    let config = SmoothingConfig::builder()
        .period(Duration::from_millis(15))
        .build()?;
    assert_eq!(Sampler::from_config(&config).period(), Duration::from_millis(15));
    assert_eq!(Sampler::default().period(), DEFAULT_PERIOD);
    Ok(())
}
