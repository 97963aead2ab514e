//! Error types for the smoothing crate.
//!
//! The smoothing operations themselves are total. Errors only arise when a
//! configuration is validated or when the background sampler thread is
//! started or joined.

use thiserror::Error;

/// Errors raised outside the sampling hot path.
#[derive(Debug, Error)]
pub enum SmoothingError {
    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The operating system refused to start the sampler thread.
    #[error("Failed to spawn sampler thread: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The sampler thread panicked, usually inside the sample source.
    #[error("Sampler thread '{0}' panicked")]
    SamplerPanicked(String),
}

impl SmoothingError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

/// A specialized `Result` type for smoothing setup operations.
pub type SmoothingResult<T> = std::result::Result<T, SmoothingError>;
