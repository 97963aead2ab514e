//! Prelude for carbon-timing.
//!
//! This module re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use carbon_timing::prelude::*;
//! use std::time::Duration;
//!
//! let timer = CountdownTimer::new(Duration::ZERO);
//! assert!(timer.is_done());
//! ```

pub use crate::clock::{Clock, ManualClock, MonotonicClock};
pub use crate::countdown::CountdownTimer;
