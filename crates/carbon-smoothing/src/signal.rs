//! Smoothed signal with independently togglable mean and median outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SmoothingConfig;
use crate::sample::Sample;
use crate::window::RollingWindow;

/// Smoothing algorithm applied to the rolling window.
///
/// Modes are independent capability flags on a [`SmoothedSignal`]: enabling
/// one never disables the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmoothingMode {
    /// Rolling arithmetic mean.
    #[default]
    Average,
    /// Rolling upper median.
    Median,
}

impl fmt::Display for SmoothingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmoothingMode::Average => write!(f, "average"),
            SmoothingMode::Median => write!(f, "median"),
        }
    }
}

/// Both smoothed outputs read at the same instant.
///
/// A disabled mode reads as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedOutputs<T> {
    /// Rolling mean, or `0.0` when averaging is disabled.
    pub average: f64,
    /// Rolling median, or zero when the median is disabled.
    pub median: T,
}

/// Rolling-window smoother for one sensor.
///
/// Every call to [`sample`](Self::sample) pushes the raw reading and then
/// recomputes each enabled output from the whole window. Disabling a mode
/// only gates what the getter returns; the window history and the last
/// computed value are kept, so re-enabling without new samples returns the
/// value computed while it was last enabled.
///
/// # RT Safety
///
/// - Window and median scratch storage are allocated at construction
/// - `sample` is O(N) with no allocation
/// - Getters are O(1) and side-effect free
#[derive(Debug, Clone)]
pub struct SmoothedSignal<T: Sample> {
    window: RollingWindow<T>,
    scratch: Vec<T>,
    average_enabled: bool,
    median_enabled: bool,
    average: f64,
    median: T,
    sample_count: u64,
}

impl<T: Sample> SmoothedSignal<T> {
    /// Create a signal with `mode` enabled and a window of `buffer_size`
    /// samples. A buffer size of 0 is clamped to 1.
    #[must_use]
    pub fn new(mode: SmoothingMode, buffer_size: usize) -> Self {
        if buffer_size == 0 {
            tracing::warn!(mode = %mode, "smoothing buffer size 0 clamped to 1");
        }
        let window = RollingWindow::new(buffer_size);
        let scratch = Vec::with_capacity(window.capacity());
        Self {
            window,
            scratch,
            average_enabled: mode == SmoothingMode::Average,
            median_enabled: mode == SmoothingMode::Median,
            average: 0.0,
            median: T::default(),
            sample_count: 0,
        }
    }

    /// Create a signal with `mode` enabled and the default buffer size.
    #[must_use]
    pub fn with_mode(mode: SmoothingMode) -> Self {
        Self::new(mode, crate::DEFAULT_BUFFER_SIZE)
    }

    /// Create a signal from a configuration.
    ///
    /// The configuration is not validated; out-of-range values are clamped.
    #[must_use]
    pub fn from_config(config: &SmoothingConfig) -> Self {
        Self::new(config.mode, config.buffer_size)
    }

    /// Enable or disable one smoothing mode.
    pub fn set_mode_enabled(&mut self, mode: SmoothingMode, enabled: bool) {
        match mode {
            SmoothingMode::Average => self.average_enabled = enabled,
            SmoothingMode::Median => self.median_enabled = enabled,
        }
    }

    /// Whether `mode` is currently enabled.
    #[must_use]
    pub fn is_mode_enabled(&self, mode: SmoothingMode) -> bool {
        match mode {
            SmoothingMode::Average => self.average_enabled,
            SmoothingMode::Median => self.median_enabled,
        }
    }

    /// Push a raw reading and recompute every enabled output.
    ///
    /// This is the entry point for the periodic driver.
    pub fn sample(&mut self, raw: T) {
        self.window.push(raw);
        self.sample_count = self.sample_count.saturating_add(1);

        if self.average_enabled {
            self.average = self.window.mean();
        }
        if self.median_enabled {
            self.median = self.window.median_with(&mut self.scratch);
        }
    }

    /// Last computed rolling mean, or `0.0` if averaging is disabled.
    #[inline]
    #[must_use]
    pub fn average_value(&self) -> f64 {
        if self.average_enabled { self.average } else { 0.0 }
    }

    /// Last computed rolling median, or zero if the median is disabled.
    #[inline]
    #[must_use]
    pub fn median_value(&self) -> T {
        if self.median_enabled {
            self.median
        } else {
            T::default()
        }
    }

    /// Both outputs, gated by their enable flags.
    #[must_use]
    pub fn outputs(&self) -> SmoothedOutputs<T> {
        SmoothedOutputs {
            average: self.average_value(),
            median: self.median_value(),
        }
    }

    /// The most recent raw reading.
    #[must_use]
    pub fn latest_raw(&self) -> T {
        self.window.latest()
    }

    /// Window capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Number of samples pushed since construction.
    #[must_use]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Read-only access to the underlying window.
    #[must_use]
    pub fn window(&self) -> &RollingWindow<T> {
        &self.window
    }
}

impl<T: Sample> Default for SmoothedSignal<T> {
    fn default() -> Self {
        Self::with_mode(SmoothingMode::default())
    }
}
