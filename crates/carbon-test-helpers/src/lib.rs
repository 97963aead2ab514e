//! Shared test utilities for the carbon control crates.
//!
//! Test-only code: every helper here panics on failure so tests can stay
//! free of `unwrap()` and `expect()` while still reporting the caller's
//! location.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with `#[track_caller]`
//! - [`wait`] - Polling helpers for tests that observe background threads
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! carbon-test-helpers = { workspace = true }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(
    clippy::panic,
    reason = "test helpers report failures by panicking at the caller"
)]

pub mod must;
pub mod wait;

pub use must::{must, must_some};
pub use wait::wait_for;
