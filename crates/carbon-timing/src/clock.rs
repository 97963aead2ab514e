//! Monotonic time sources.
//!
//! A [`Clock`] reports the time elapsed since its own epoch. Only differences
//! between two readings of the same clock are meaningful.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// Implementations must never go backwards. Cloning a clock yields a handle
/// to the same timeline.
pub trait Clock: Clone + Send + Sync + fmt::Debug {
    /// Time elapsed since this clock's epoch.
    fn now(&self) -> Duration;
}

/// Clock backed by [`std::time::Instant`].
///
/// The epoch is the instant the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose epoch is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// The instant this clock counts from.
    #[must_use]
    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same timeline, so a test can hand one clone to the code
/// under test and keep another to advance time deterministically.
///
/// ```rust
/// use carbon_timing::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let observer = clock.clone();
/// clock.advance(Duration::from_millis(3));
/// assert_eq!(observer.now(), Duration::from_millis(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock already reading `start`.
    #[must_use]
    pub fn starting_at(start: Duration) -> Self {
        Self {
            nanos: Arc::new(AtomicU64::new(duration_to_nanos(start))),
        }
    }

    /// Move the clock forward by `delta`. Saturates at `u64::MAX` nanoseconds.
    pub fn advance(&self, delta: Duration) {
        let delta = duration_to_nanos(delta);
        let mut current = self.nanos.load(Ordering::Acquire);
        loop {
            let next = current.saturating_add(delta);
            match self
                .nanos
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
    }

    /// Move the clock to `at`. Requests to move backwards are ignored.
    pub fn set(&self, at: Duration) {
        self.nanos.fetch_max(duration_to_nanos(at), Ordering::AcqRel);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Acquire))
    }
}

fn duration_to_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
