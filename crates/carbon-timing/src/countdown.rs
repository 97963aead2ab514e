//! Non-blocking countdown timer.

use std::time::Duration;

use crate::clock::{Clock, MonotonicClock};

/// A single deadline checked against a [`Clock`].
///
/// `is_done()` is true iff the clock has reached the deadline. Once true it
/// stays true until [`reset`](Self::reset) re-arms the timer. The timer cannot
/// be cancelled, only re-armed.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Never sleeps or blocks
#[derive(Debug, Clone)]
pub struct CountdownTimer<C: Clock = MonotonicClock> {
    clock: C,
    deadline: Duration,
}

impl CountdownTimer<MonotonicClock> {
    /// Create a timer on a fresh [`MonotonicClock`] that expires after `duration`.
    ///
    /// # Example
    ///
    /// ```
    /// use carbon_timing::CountdownTimer;
    /// use std::time::Duration;
    ///
    /// let timer = CountdownTimer::new(Duration::from_secs(60));
    /// assert!(!timer.is_done());
    /// ```
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(MonotonicClock::new(), duration)
    }
}

impl<C: Clock> CountdownTimer<C> {
    /// Create a timer on `clock` that expires after `duration`.
    #[must_use]
    pub fn with_clock(clock: C, duration: Duration) -> Self {
        let deadline = clock.now().saturating_add(duration);
        Self { clock, deadline }
    }

    /// Create a timer on `clock` that is already done.
    #[must_use]
    pub fn expired(clock: C) -> Self {
        Self::with_clock(clock, Duration::ZERO)
    }

    /// Re-arm the timer to expire `duration` from now.
    ///
    /// Re-arming is unconditional: a timer that has not yet expired is pushed
    /// out (or pulled in) to the new deadline.
    #[inline]
    pub fn reset(&mut self, duration: Duration) {
        self.deadline = self.clock.now().saturating_add(duration);
    }

    /// Whether the deadline has been reached.
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.clock.now() >= self.deadline
    }

    /// Time left until the deadline, zero once done.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_sub(self.clock.now())
    }

    /// The deadline on this timer's clock.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// The clock this timer reads.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
