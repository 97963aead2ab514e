//! Rate-limited setpoint follower.

use std::time::Duration;

use carbon_timing::{Clock, CountdownTimer, MonotonicClock};
use tracing::debug;

use crate::config::RampConfig;

/// Moves an output toward a target by at most one step per step period.
///
/// Call [`tick`](Self::tick) from the control loop as often as convenient.
/// The first tick after construction may step immediately; afterwards a
/// step is taken only once the step period has elapsed since the previous
/// one. The output never overshoots: a step that would reach or cross the
/// target snaps the output onto the target exactly.
///
/// The output always starts at zero. A ramp built with a non-zero target
/// climbs to it on the first ticks rather than jumping there.
///
/// Disabling the ramp makes the output follow the target on the next tick
/// with no rate limit.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Never sleeps or blocks
#[derive(Debug, Clone)]
pub struct Ramp<C: Clock = MonotonicClock> {
    target: f64,
    output: f64,
    step_size: f64,
    step_time: Duration,
    enabled: bool,
    timer: CountdownTimer<C>,
}

impl Ramp<MonotonicClock> {
    /// Create a ramp with default parameters, target and output at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(0.0)
    }

    /// Create a ramp with default step parameters that moves from zero toward `target`.
    #[must_use]
    pub fn with_target(target: f64) -> Self {
        Self::with_params(target, crate::DEFAULT_STEP_SIZE, crate::DEFAULT_STEP_TIME)
    }

    /// Create a ramp that moves from zero toward `target` with explicit step
    /// parameters.
    ///
    /// Step parameters go through the same normalization as the setters.
    #[must_use]
    pub fn with_params(target: f64, step_size: f64, step_time: Duration) -> Self {
        Self::with_clock(MonotonicClock::new(), target, step_size, step_time)
    }

    /// Create a ramp from a configuration.
    ///
    /// Out-of-range values are normalized rather than rejected; call
    /// [`RampConfig::validate`] first to reject them instead.
    #[must_use]
    pub fn from_config(config: &RampConfig) -> Self {
        Self::from_config_with_clock(MonotonicClock::new(), config)
    }
}

impl Default for Ramp<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Ramp<C> {
    /// Create a ramp on `clock` whose output starts at zero and moves toward
    /// `target`. A non-finite target is replaced by zero.
    #[must_use]
    pub fn with_clock(clock: C, target: f64, step_size: f64, step_time: Duration) -> Self {
        let target = if target.is_finite() { target } else { 0.0 };
        let mut ramp = Self {
            target,
            output: 0.0,
            step_size: crate::DEFAULT_STEP_SIZE,
            step_time: crate::DEFAULT_STEP_TIME,
            enabled: crate::DEFAULT_ENABLED,
            timer: CountdownTimer::expired(clock),
        };
        ramp.set_step_size(step_size);
        ramp.set_step_time(step_time);
        ramp
    }

    /// Create a ramp on `clock` from a configuration.
    #[must_use]
    pub fn from_config_with_clock(clock: C, config: &RampConfig) -> Self {
        let mut ramp = Self::with_clock(
            clock,
            config.initial_target,
            config.step_size,
            config.step_period,
        );
        ramp.set_enabled(config.enabled);
        ramp
    }

    /// Advance the output toward the target if a step is due.
    pub fn tick(&mut self) {
        if !self.enabled {
            self.output = self.target;
            return;
        }
        if !self.timer.is_done() {
            return;
        }
        self.timer.reset(self.step_time);

        let is_up = self.output < self.target;
        let step = if is_up { self.step_size } else { -self.step_size };
        let next = self.output + step;
        let reaches = if is_up {
            next >= self.target
        } else {
            next <= self.target
        };
        self.output = if reaches { self.target } else { next };
    }

    /// Set the value the output moves toward.
    ///
    /// Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() {
            debug!(target, "ignoring non-finite ramp target");
            return;
        }
        self.target = target;
    }

    /// The value the output moves toward.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The current rate-limited output.
    #[inline]
    #[must_use]
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Set the output change per step.
    ///
    /// Negative sizes are taken by magnitude. Non-finite sizes are ignored.
    pub fn set_step_size(&mut self, step_size: f64) {
        if !step_size.is_finite() {
            debug!(step_size, "ignoring non-finite ramp step size");
            return;
        }
        self.step_size = step_size.abs();
    }

    /// Output change per step, never negative.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Set the minimum time between two steps.
    ///
    /// A zero duration is rejected and the previous step time kept. The new
    /// value applies from the next step onward.
    pub fn set_step_time(&mut self, step_time: Duration) {
        if step_time.is_zero() {
            debug!(
                kept_ms = self.step_time.as_millis(),
                "rejecting zero ramp step time"
            );
            return;
        }
        self.step_time = step_time;
    }

    /// Minimum time between two steps, never zero.
    #[must_use]
    pub fn step_time(&self) -> Duration {
        self.step_time
    }

    /// Enable or disable rate limiting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether rate limiting is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set both target and output to zero.
    ///
    /// Step parameters and the step timer are left untouched.
    pub fn reset(&mut self) {
        self.target = 0.0;
        self.output = 0.0;
    }

    /// Whether the output has reached the target.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "tick snaps the output onto the target exactly"
    )]
    pub fn is_settled(&self) -> bool {
        self.output == self.target
    }

    /// The clock driving the step timer.
    #[must_use]
    pub fn clock(&self) -> &C {
        self.timer.clock()
    }
}
