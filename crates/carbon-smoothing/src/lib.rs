//! Rolling-window smoothing for sampled sensor signals.
//!
//! This crate reduces noise on periodically sampled readings by aggregating a
//! fixed-size trailing window of samples into a mean and/or a median.
//!
//! # Overview
//!
//! - **Sample**: numeric reading type (integers for digitized sensors,
//!   floats for ratiometric sensors)
//! - **RollingWindow**: fixed-capacity circular buffer of the last N samples
//! - **SmoothedSignal**: window plus independently togglable mean/median
//!   outputs, recomputed on every sample
//! - **SharedSignal**: lock-guarded handle for sharing a signal between a
//!   sampling thread and foreground readers
//! - **Sampler**: background thread that feeds a `SharedSignal` from a
//!   `SampleSource` at a fixed cadence, stopped through its `SamplerHandle`
//!
//! # RT Safety
//!
//! - `RollingWindow::push` is O(1) and allocation-free
//! - `SmoothedSignal::sample` is O(N) and allocation-free after construction
//! - No syscalls or I/O outside the sampler thread's sleep
//!
//! # Example
//!
//! ```
//! use carbon_smoothing::prelude::*;
//!
//! let mut signal = SmoothedSignal::<i32>::new(SmoothingMode::Median, 5);
//! for raw in [5, 1, 3, 2, 4] {
//!     signal.sample(raw);
//! }
//! assert_eq!(signal.median_value(), 3);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod prelude;
pub mod sample;
pub mod sampler;
pub mod shared;
pub mod signal;
pub mod window;

pub use config::{SmoothingConfig, SmoothingConfigBuilder};
pub use error::{SmoothingError, SmoothingResult};
pub use sample::Sample;
pub use sampler::{SampleSource, Sampler, SamplerHandle};
pub use shared::SharedSignal;
pub use signal::{SmoothedOutputs, SmoothedSignal, SmoothingMode};
pub use window::RollingWindow;

/// Default number of samples held by a smoothing window.
pub const DEFAULT_BUFFER_SIZE: usize = 25;

/// Default time between two samples taken by a [`Sampler`].
pub const DEFAULT_PERIOD: std::time::Duration = std::time::Duration::from_millis(50);
