//! Rate-limited setpoint following for actuator outputs.
//!
//! A [`Ramp`] moves its output toward a target in fixed-size steps, at most
//! one step per step period. It never sleeps: the host control loop calls
//! [`Ramp::tick`] as often as it likes and the ramp decides, from its
//! internal countdown timer, whether a step is due.
//!
//! # Overview
//!
//! - **Ramp**: the setpoint follower
//! - **RampConfig**: serde-loadable ramp parameters with validation
//! - **RampDriver**: ticks a ramp and forwards each output to a [`Rampable`]
//!   actuator sink
//! - **map_range**: linear remapping of values between ranges
//!
//! # Example
//!
//! ```
//! use carbon_ramp::prelude::*;
//! use carbon_timing::ManualClock;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut ramp = Ramp::with_clock(clock.clone(), 0.0, 0.25, Duration::from_millis(10));
//! ramp.set_target(1.0);
//!
//! ramp.tick();
//! assert!((ramp.output() - 0.25).abs() < 1e-12);
//!
//! // Not due yet: no change.
//! ramp.tick();
//! assert!((ramp.output() - 0.25).abs() < 1e-12);
//!
//! clock.advance(Duration::from_millis(10));
//! ramp.tick();
//! assert!((ramp.output() - 0.5).abs() < 1e-12);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod driver;
pub mod error;
pub mod prelude;
pub mod ramp;
pub mod scale;

pub use config::{RampConfig, RampConfigBuilder};
pub use driver::{RampDriver, Rampable};
pub use error::{RampError, RampResult};
pub use ramp::Ramp;
pub use scale::{map_range, map_range_i32};

/// Ramps are enabled unless configured otherwise.
pub const DEFAULT_ENABLED: bool = true;

/// Default output change per step.
pub const DEFAULT_STEP_SIZE: f64 = 0.05;

/// Default time between two steps.
pub const DEFAULT_STEP_TIME: std::time::Duration = std::time::Duration::from_millis(10);
