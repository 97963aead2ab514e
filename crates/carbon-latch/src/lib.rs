//! # carbon-latch
//!
//! One-shot detectors for control signals. A latch fires on the single call
//! where its condition changes and stays quiet while the condition persists,
//! which is what a control loop wants for "button just pressed" or "arm just
//! entered the safe zone" style triggers.
//!
//! ## Architecture
//!
//! - [`edge`] - [`EdgeLatch`], boolean rising and falling edges
//! - [`threshold`] - [`ThresholdLatch`] and [`Band`], a continuous value
//!   entering or leaving an open interval
//!
//! ## Usage
//!
//! ```rust
//! use carbon_latch::prelude::*;
//!
//! let mut button = EdgeLatch::new();
//! assert!(!button.on_rising_edge(false));
//! assert!(button.on_rising_edge(true));
//! assert!(!button.on_rising_edge(true));
//!
//! let mut arm = ThresholdLatch::new();
//! assert!(!arm.on_enter(20.0, 10.0, -10.0));
//! assert!(arm.on_enter(5.0, 10.0, -10.0));
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

pub mod edge;
pub mod threshold;

pub mod prelude;

pub use edge::EdgeLatch;
pub use threshold::{Band, ThresholdLatch};
