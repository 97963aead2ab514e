//! Configuration loading tests for carbon-ramp.

use std::time::Duration;

use carbon_ramp::prelude::*;

#[test]
fn test_config_deserializes_from_json() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "initial_target": 0.5,
        "step_size": 0.02,
        "step_period": { "secs": 0, "nanos": 5000000 },
        "enabled": false
    }"#;

    let config: RampConfig = serde_json::from_str(json)?;
    config.validate()?;

    let mut ramp = Ramp::from_config(&config);
    assert_eq!(ramp.target(), 0.5);
    assert_eq!(ramp.output(), 0.0);
    assert_eq!(ramp.step_size(), 0.02);
    assert_eq!(ramp.step_time(), Duration::from_millis(5));
    assert!(!ramp.is_enabled());

    ramp.tick();
    assert_eq!(ramp.output(), 0.5);
    Ok(())
}

#[test]
fn test_missing_fields_take_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let config: RampConfig = serde_json::from_str(r#"{ "initial_target": -0.25 }"#)?;

    assert_eq!(config.initial_target, -0.25);
    assert_eq!(config.step_size, DEFAULT_STEP_SIZE);
    assert_eq!(config.step_period, DEFAULT_STEP_TIME);
    assert!(config.enabled);
    Ok(())
}

#[test]
fn test_invalid_config_rejected_by_builder() {
    let result = RampConfig::builder()
        .step_size(0.1)
        .step_period(Duration::ZERO)
        .build();
    assert!(matches!(result, Err(RampError::InvalidConfiguration(_))));
}

#[test]
fn test_from_config_normalizes_unvalidated_values() {
    let config = RampConfig {
        initial_target: 0.0,
        step_size: -0.3,
        step_period: Duration::ZERO,
        enabled: true,
    };
    let ramp = Ramp::from_config(&config);
    assert_eq!(ramp.step_size(), 0.3);
    assert_eq!(ramp.step_time(), DEFAULT_STEP_TIME);
}

#[test]
fn test_config_round_trips_through_json() -> Result<(), Box<dyn std::error::Error>> {
    let config = RampConfig::builder()
        .initial_target(0.1)
        .step_size(0.2)
        .step_period(Duration::from_millis(15))
        .enabled(true)
        .build()?;

    let json = serde_json::to_string(&config)?;
    let back: RampConfig = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    Ok(())
}
