//! Prelude for the ramp crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use carbon_ramp::prelude::*;
//!
//! let mut ramp = Ramp::new();
//! ramp.set_enabled(false);
//! ramp.set_target(0.8);
//! ramp.tick();
//! assert!((ramp.output() - 0.8).abs() < 1e-12);
//! ```

pub use crate::config::{RampConfig, RampConfigBuilder};
pub use crate::driver::{RampDriver, Rampable};
pub use crate::error::{RampError, RampResult};
pub use crate::ramp::Ramp;
pub use crate::scale::{map_range, map_range_i32};
pub use crate::{DEFAULT_ENABLED, DEFAULT_STEP_SIZE, DEFAULT_STEP_TIME};
