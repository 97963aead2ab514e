//! Ramp driver and actuator sink seam.

use std::fmt;

use carbon_timing::{Clock, MonotonicClock};

use crate::ramp::Ramp;

/// An actuator that accepts a setpoint with no rate limiting of its own.
pub trait Rampable {
    /// Apply `setpoint` immediately.
    fn hard_set(&mut self, setpoint: f64);
}

impl<F> Rampable for F
where
    F: FnMut(f64),
{
    fn hard_set(&mut self, setpoint: f64) {
        self(setpoint);
    }
}

/// Ticks a [`Ramp`] and forwards each output to an optional [`Rampable`] sink.
///
/// `finished` is owned by the caller: the driver never sets it, so a command
/// scheduler can stop the drive whenever its own condition is met.
pub struct RampDriver<C: Clock = MonotonicClock> {
    ramp: Ramp<C>,
    sink: Option<Box<dyn Rampable + Send>>,
    finished: bool,
}

impl<C: Clock> RampDriver<C> {
    /// Create a driver with no sink.
    #[must_use]
    pub fn new(ramp: Ramp<C>) -> Self {
        Self {
            ramp,
            sink: None,
            finished: false,
        }
    }

    /// Create a driver that forwards every output to `sink`.
    #[must_use]
    pub fn with_sink(ramp: Ramp<C>, sink: impl Rampable + Send + 'static) -> Self {
        Self {
            ramp,
            sink: Some(Box::new(sink)),
            finished: false,
        }
    }

    /// Replace the sink, or remove it with `None`.
    pub fn set_sink(&mut self, sink: Option<Box<dyn Rampable + Send>>) {
        self.sink = sink;
    }

    /// Whether a sink is attached.
    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Tick the ramp once, forward its output to the sink, and return it.
    pub fn execute(&mut self) -> f64 {
        self.ramp.tick();
        let output = self.ramp.output();
        if let Some(sink) = self.sink.as_mut() {
            sink.hard_set(output);
        }
        output
    }

    /// Whether the caller has marked the drive finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Mark the drive finished or not.
    pub fn set_finished(&mut self, finished: bool) {
        self.finished = finished;
    }

    /// The driven ramp.
    #[must_use]
    pub fn ramp(&self) -> &Ramp<C> {
        &self.ramp
    }

    /// Mutable access to the driven ramp, e.g. to change its target.
    pub fn ramp_mut(&mut self) -> &mut Ramp<C> {
        &mut self.ramp
    }

    /// Consume the driver and return the ramp.
    #[must_use]
    pub fn into_ramp(self) -> Ramp<C> {
        self.ramp
    }
}

impl<C: Clock> fmt::Debug for RampDriver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RampDriver")
            .field("ramp", &self.ramp)
            .field("has_sink", &self.sink.is_some())
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_timing::ManualClock;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Motor {
        applied: Vec<f64>,
    }

    impl Rampable for Motor {
        fn hard_set(&mut self, setpoint: f64) {
            self.applied.push(setpoint);
        }
    }

    #[test]
    fn test_execute_without_sink_ticks_ramp() {
        let clock = ManualClock::new();
        let mut driver = RampDriver::new(Ramp::with_clock(
            clock,
            0.0,
            0.5,
            Duration::from_millis(10),
        ));
        driver.ramp_mut().set_target(1.0);

        let output = driver.execute();
        assert_eq!(output, 0.5);
        assert!(!driver.has_sink());
    }

    #[test]
    fn test_execute_forwards_to_sink() {
        let clock = ManualClock::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let mut driver = RampDriver::with_sink(
            Ramp::with_clock(clock.clone(), 0.0, 0.5, Duration::from_millis(10)),
            move |setpoint: f64| {
                if let Ok(mut guard) = sink_seen.lock() {
                    guard.push(setpoint);
                }
            },
        );
        driver.ramp_mut().set_target(1.0);

        driver.execute();
        clock.advance(Duration::from_millis(10));
        driver.execute();
        driver.execute();

        let seen = seen.lock().map(|g| g.clone()).unwrap_or_default();
        assert_eq!(seen, vec![0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_struct_sink() {
        let mut motor = Motor::default();
        let mut ramp = Ramp::with_clock(ManualClock::new(), 0.0, 0.25, Duration::from_millis(5));
        ramp.set_target(-1.0);
        ramp.tick();
        motor.hard_set(ramp.output());
        assert_eq!(motor.applied, vec![-0.25]);
    }

    #[test]
    fn test_finished_flag_is_caller_owned() {
        let mut driver = RampDriver::new(Ramp::with_clock(
            ManualClock::new(),
            0.0,
            1.0,
            Duration::from_millis(10),
        ));
        driver.ramp_mut().set_target(0.5);
        driver.execute();
        assert!(driver.ramp().is_settled());
        assert!(!driver.is_finished());

        driver.set_finished(true);
        assert!(driver.is_finished());
    }

    #[test]
    fn test_set_sink_replaces() {
        let mut driver = RampDriver::new(Ramp::new());
        driver.set_sink(Some(Box::new(|_: f64| {})));
        assert!(driver.has_sink());
        driver.set_sink(None);
        assert!(!driver.has_sink());
        let ramp = driver.into_ramp();
        assert!(ramp.is_settled());
    }
}
