//! Prelude for the smoothing crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use carbon_smoothing::prelude::*;
//!
//! let mut signal = SmoothedSignal::<f64>::new(SmoothingMode::Average, 4);
//! signal.sample(2.0);
//! assert!((signal.average_value() - 0.5).abs() < 1e-12);
//! ```

pub use crate::config::{SmoothingConfig, SmoothingConfigBuilder};
pub use crate::error::{SmoothingError, SmoothingResult};
pub use crate::sample::Sample;
pub use crate::sampler::{SampleSource, Sampler, SamplerHandle};
pub use crate::shared::SharedSignal;
pub use crate::signal::{SmoothedOutputs, SmoothedSignal, SmoothingMode};
pub use crate::window::RollingWindow;
pub use crate::{DEFAULT_BUFFER_SIZE, DEFAULT_PERIOD};
