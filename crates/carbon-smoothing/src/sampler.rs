//! Background sampling thread.
//!
//! A [`Sampler`] reads a [`SampleSource`] at a fixed cadence and feeds each
//! reading into a [`SharedSignal`]. The thread is owned by the returned
//! [`SamplerHandle`]: stopping or dropping the handle signals the thread and
//! joins it, so the thread never outlives its handle.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use tracing::{debug, error, info, info_span, warn};

use crate::config::SmoothingConfig;
use crate::error::{SmoothingError, SmoothingResult};
use crate::sample::Sample;
use crate::shared::SharedSignal;

/// Source of raw readings, typically a wrapper around a hardware input.
pub trait SampleSource<T>: Send + 'static {
    /// Take one reading.
    fn read(&mut self) -> T;
}

impl<T, F> SampleSource<T> for F
where
    F: FnMut() -> T + Send + 'static,
{
    fn read(&mut self) -> T {
        self()
    }
}

/// Builder for a background sampling thread.
#[derive(Debug, Clone)]
pub struct Sampler {
    name: String,
    period: Duration,
}

impl Sampler {
    /// Default sampler thread name.
    pub const DEFAULT_NAME: &'static str = "carbon-sampler";

    /// Create a sampler that reads once every `period`.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            period,
        }
    }

    /// Create a sampler using the period from `config`.
    #[must_use]
    pub fn from_config(config: &SmoothingConfig) -> Self {
        Self::new(config.period)
    }

    /// Set the thread name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sampling period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start the sampling thread.
    ///
    /// The first reading is taken immediately; subsequent readings follow on
    /// an absolute schedule of one per period. The thread logs inside a
    /// `sampler` span whose parent is the caller's current span.
    ///
    /// # Errors
    ///
    /// Returns `SmoothingError::InvalidConfiguration` for a zero period and
    /// `SmoothingError::SpawnFailed` if the thread cannot be created.
    pub fn spawn<T, S>(self, signal: SharedSignal<T>, source: S) -> SmoothingResult<SamplerHandle>
    where
        T: Sample,
        S: SampleSource<T>,
    {
        if self.period.is_zero() {
            return Err(SmoothingError::invalid_configuration(
                "sampler period must be greater than 0",
            ));
        }

        let (stop_tx, stop_rx) = channel::bounded::<()>(1);
        let period = self.period;
        let span = info_span!("sampler", thread = %self.name);
        let thread = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || span.in_scope(|| run_sampler(&signal, source, period, &stop_rx)))
            .map_err(SmoothingError::SpawnFailed)?;

        info!(thread = %self.name, ?period, "sampler started");

        Ok(SamplerHandle {
            name: self.name,
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        })
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PERIOD)
    }
}

fn run_sampler<T, S>(
    signal: &SharedSignal<T>,
    mut source: S,
    period: Duration,
    stop_rx: &Receiver<()>,
) -> u64
where
    T: Sample,
    S: SampleSource<T>,
{
    let mut samples: u64 = 0;
    let mut next_tick = Instant::now();

    loop {
        signal.sample(source.read());
        samples = samples.saturating_add(1);

        next_tick = match next_tick.checked_add(period) {
            Some(t) => t,
            None => break,
        };

        let now = Instant::now();
        let behind = now.saturating_duration_since(next_tick);
        if behind > period {
            debug!(?behind, "sampler fell behind schedule, re-anchoring");
            next_tick = now;
        }

        match stop_rx.recv_deadline(next_tick) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    samples
}

/// Owner of a running sampler thread.
///
/// Dropping the handle stops and joins the thread.
#[derive(Debug)]
pub struct SamplerHandle {
    name: String,
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<u64>>,
}

impl SamplerHandle {
    /// Thread name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the sampler thread is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the thread and wait for it to exit.
    ///
    /// Returns the number of samples the thread took.
    ///
    /// # Errors
    ///
    /// Returns `SmoothingError::SamplerPanicked` if the thread panicked,
    /// usually because the sample source panicked.
    pub fn stop(mut self) -> SmoothingResult<u64> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> SmoothingResult<u64> {
        // Disconnecting the channel wakes the thread out of its wait.
        drop(self.stop_tx.take());

        let Some(thread) = self.thread.take() else {
            return Ok(0);
        };

        match thread.join() {
            Ok(samples) => {
                info!(thread = %self.name, samples, "sampler stopped");
                Ok(samples)
            }
            Err(_) => {
                error!(thread = %self.name, "sampler thread panicked");
                Err(SmoothingError::SamplerPanicked(self.name.clone()))
            }
        }
    }
}

impl Drop for SamplerHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            if let Err(err) = self.shutdown() {
                warn!(error = %err, "sampler handle dropped after thread failure");
            }
        }
    }
}
