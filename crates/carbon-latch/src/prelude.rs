//! Prelude for the latch crate.
//!
//! ```
//! use carbon_latch::prelude::*;
//!
//! let band = Band::symmetric(1.0);
//! assert!(band.contains_strictly(0.5));
//! ```

pub use crate::edge::EdgeLatch;
pub use crate::threshold::{Band, ThresholdLatch};
