//! Thread-shared smoothed signal.
//!
//! A sampling thread writes while control-loop threads read. Each operation
//! takes the instance's lock exactly once, so one sampling pass (window
//! write, index advance, output recomputation) is never observed half done.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::sample::Sample;
use crate::signal::{SmoothedOutputs, SmoothedSignal, SmoothingMode};

/// Cloneable handle to a [`SmoothedSignal`] behind one exclusive lock.
///
/// Clones refer to the same signal. Locks are per instance; two signals
/// never contend with each other.
pub struct SharedSignal<T: Sample> {
    inner: Arc<Mutex<SmoothedSignal<T>>>,
}

impl<T: Sample> SharedSignal<T> {
    /// Wrap `signal` for sharing.
    #[must_use]
    pub fn new(signal: SmoothedSignal<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(signal)),
        }
    }

    /// Push a raw reading and recompute outputs as one locked unit.
    pub fn sample(&self, raw: T) {
        self.inner.lock().sample(raw);
    }

    /// Last computed rolling mean, or `0.0` if averaging is disabled.
    #[must_use]
    pub fn average_value(&self) -> f64 {
        self.inner.lock().average_value()
    }

    /// Last computed rolling median, or zero if the median is disabled.
    #[must_use]
    pub fn median_value(&self) -> T {
        self.inner.lock().median_value()
    }

    /// Both outputs from the same sampling pass.
    #[must_use]
    pub fn outputs(&self) -> SmoothedOutputs<T> {
        self.inner.lock().outputs()
    }

    /// Enable or disable one smoothing mode.
    pub fn set_mode_enabled(&self, mode: SmoothingMode, enabled: bool) {
        self.inner.lock().set_mode_enabled(mode, enabled);
    }

    /// Whether `mode` is currently enabled.
    #[must_use]
    pub fn is_mode_enabled(&self, mode: SmoothingMode) -> bool {
        self.inner.lock().is_mode_enabled(mode)
    }

    /// Number of samples pushed since construction.
    #[must_use]
    pub fn sample_count(&self) -> u64 {
        self.inner.lock().sample_count()
    }

    /// Run `f` against the signal while holding the lock.
    ///
    /// Use this to read several values that must come from the same pass.
    /// Keep `f` short: the sampler blocks until it returns.
    pub fn with<R>(&self, f: impl FnOnce(&SmoothedSignal<T>) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl<T: Sample> Clone for SharedSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Sample> From<SmoothedSignal<T>> for SharedSignal<T> {
    fn from(signal: SmoothedSignal<T>) -> Self {
        Self::new(signal)
    }
}

impl<T: Sample> fmt::Debug for SharedSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSignal")
            .field("signal", &*self.inner.lock())
            .finish()
    }
}
