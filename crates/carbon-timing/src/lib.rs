//! # carbon-timing
//!
//! Monotonic time sources and a non-blocking countdown timer for control loops.
//!
//! Nothing in this crate sleeps or blocks. A control loop polls
//! [`CountdownTimer::is_done`] as often as it likes; polling more often only
//! tightens the timing resolution of whatever the timer gates.
//!
//! ## Architecture
//!
//! - [`clock`] - The [`Clock`] trait with a wall-monotonic and a manually
//!   driven implementation
//! - [`countdown`] - [`CountdownTimer`], a deadline check built on a [`Clock`]
//!
//! ## Usage
//!
//! ```rust
//! use carbon_timing::prelude::*;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut timer = CountdownTimer::with_clock(clock.clone(), Duration::from_millis(10));
//! assert!(!timer.is_done());
//!
//! clock.advance(Duration::from_millis(10));
//! assert!(timer.is_done());
//!
//! timer.reset(Duration::from_millis(5));
//! assert!(!timer.is_done());
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod countdown;

pub mod prelude;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use countdown::CountdownTimer;
