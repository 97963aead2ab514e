//! Error types for the ramp crate.

use thiserror::Error;

/// Errors raised when validating ramp configuration.
///
/// Runtime setters never fail; they clamp or ignore bad input instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RampError {
    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl RampError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

/// A specialized `Result` type for ramp configuration.
pub type RampResult<T> = std::result::Result<T, RampError>;
