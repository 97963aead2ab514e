//! Smoothing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SmoothingError, SmoothingResult};
use crate::signal::SmoothingMode;

/// Configuration for a smoothed sensor signal and its sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Mode enabled at construction. The other mode starts disabled.
    pub mode: SmoothingMode,
    /// Number of samples in the rolling window.
    pub buffer_size: usize,
    /// Time between two samples taken by the background sampler.
    pub period: Duration,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            mode: SmoothingMode::Average,
            buffer_size: crate::DEFAULT_BUFFER_SIZE,
            period: crate::DEFAULT_PERIOD,
        }
    }
}

impl SmoothingConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer size or the sampling period is zero.
    pub fn validate(&self) -> SmoothingResult<()> {
        if self.buffer_size == 0 {
            return Err(SmoothingError::invalid_configuration(
                "buffer_size must be at least 1",
            ));
        }
        if self.period.is_zero() {
            return Err(SmoothingError::invalid_configuration(
                "period must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> SmoothingConfigBuilder {
        SmoothingConfigBuilder::default()
    }
}

/// Builder for `SmoothingConfig`.
#[derive(Debug, Default)]
pub struct SmoothingConfigBuilder {
    config: SmoothingConfig,
}

impl SmoothingConfigBuilder {
    /// Set the initially enabled mode.
    #[must_use]
    pub fn mode(mut self, mode: SmoothingMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the rolling window size.
    #[must_use]
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    /// Set the sampling period.
    #[must_use]
    pub fn period(mut self, period: Duration) -> Self {
        self.config.period = period;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> SmoothingResult<SmoothingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
