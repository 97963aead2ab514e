//! Ramp configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RampError, RampResult};

/// Parameters for a [`Ramp`](crate::Ramp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampConfig {
    /// Target (and output) at construction.
    pub initial_target: f64,
    /// Output change per step. Must be finite and non-negative.
    pub step_size: f64,
    /// Time between two steps. Must be non-zero.
    pub step_period: Duration,
    /// Whether ramping is active. A disabled ramp jumps to its target.
    pub enabled: bool,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            initial_target: 0.0,
            step_size: crate::DEFAULT_STEP_SIZE,
            step_period: crate::DEFAULT_STEP_TIME,
            enabled: crate::DEFAULT_ENABLED,
        }
    }
}

impl RampConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is negative or not finite, the step
    /// period is zero, or the initial target is not finite.
    pub fn validate(&self) -> RampResult<()> {
        if !self.step_size.is_finite() || self.step_size < 0.0 {
            return Err(RampError::invalid_configuration(format!(
                "step_size must be finite and non-negative, got {}",
                self.step_size
            )));
        }
        if self.step_period.is_zero() {
            return Err(RampError::invalid_configuration(
                "step_period must be greater than 0",
            ));
        }
        if !self.initial_target.is_finite() {
            return Err(RampError::invalid_configuration(
                "initial_target must be finite",
            ));
        }
        Ok(())
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> RampConfigBuilder {
        RampConfigBuilder::default()
    }
}

/// Builder for `RampConfig`.
#[derive(Debug, Default)]
pub struct RampConfigBuilder {
    config: RampConfig,
}

impl RampConfigBuilder {
    /// Set the initial target.
    #[must_use]
    pub fn initial_target(mut self, target: f64) -> Self {
        self.config.initial_target = target;
        self
    }

    /// Set the step size.
    #[must_use]
    pub fn step_size(mut self, size: f64) -> Self {
        self.config.step_size = size;
        self
    }

    /// Set the step period.
    #[must_use]
    pub fn step_period(mut self, period: Duration) -> Self {
        self.config.step_period = period;
        self
    }

    /// Set whether ramping is active.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> RampResult<RampConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
