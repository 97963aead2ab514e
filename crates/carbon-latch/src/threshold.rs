//! Threshold crossing detection for continuous values.

use serde::{Deserialize, Serialize};

/// An open interval `(lower, upper)`.
///
/// Bounds given in either order are normalized so `lower <= upper`. A value
/// equal to a bound is neither inside nor outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBand")]
pub struct Band {
    lower: f64,
    upper: f64,
}

#[derive(Deserialize)]
struct RawBand {
    lower: f64,
    upper: f64,
}

impl From<RawBand> for Band {
    fn from(raw: RawBand) -> Self {
        Self::new(raw.lower, raw.upper)
    }
}

impl Band {
    /// Band between two bounds, in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    /// Band `(-limit, limit)`.
    #[must_use]
    pub fn symmetric(limit: f64) -> Self {
        Self::new(limit, -limit)
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether `value` lies strictly between the bounds.
    #[must_use]
    pub fn contains_strictly(&self, value: f64) -> bool {
        value > self.lower && value < self.upper
    }

    /// Whether `value` lies strictly below the lower or above the upper bound.
    #[must_use]
    pub fn excludes_strictly(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Detects a continuous value entering or leaving a [`Band`].
///
/// The first call after construction or [`reset`](Self::reset) only records
/// a baseline and never fires. Every call records its value, whichever
/// predicate was asked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdLatch {
    previous: Option<f64>,
}

impl ThresholdLatch {
    /// Create a latch with no baseline.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// True when the previous value was outside `(lower, upper)` and `value`
    /// is inside it. Bounds may be given in either order.
    pub fn on_enter(&mut self, value: f64, upper: f64, lower: f64) -> bool {
        self.on_enter_band(value, Band::new(upper, lower))
    }

    /// True when the previous value was inside `(lower, upper)` and `value`
    /// is outside it. Bounds may be given in either order.
    pub fn on_exit(&mut self, value: f64, upper: f64, lower: f64) -> bool {
        self.on_exit_band(value, Band::new(upper, lower))
    }

    /// [`on_enter`](Self::on_enter) with the band `(-limit, limit)`.
    pub fn on_enter_symmetric(&mut self, value: f64, limit: f64) -> bool {
        self.on_enter(value, limit, -limit)
    }

    /// [`on_exit`](Self::on_exit) with the band `(-limit, limit)`.
    pub fn on_exit_symmetric(&mut self, value: f64, limit: f64) -> bool {
        self.on_exit(value, limit, -limit)
    }

    /// True when the previous value was outside `band` and `value` is inside.
    pub fn on_enter_band(&mut self, value: f64, band: Band) -> bool {
        self.record(value)
            .is_some_and(|prev| band.excludes_strictly(prev) && band.contains_strictly(value))
    }

    /// True when the previous value was inside `band` and `value` is outside.
    pub fn on_exit_band(&mut self, value: f64, band: Band) -> bool {
        self.record(value)
            .is_some_and(|prev| band.contains_strictly(prev) && band.excludes_strictly(value))
    }

    /// Forget the baseline. The next call only records.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// The last recorded value, if any.
    #[must_use]
    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    fn record(&mut self, value: f64) -> Option<f64> {
        self.previous.replace(value)
    }
}
