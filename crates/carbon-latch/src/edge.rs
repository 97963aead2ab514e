//! Boolean edge detection.

/// Detects transitions of a boolean signal.
///
/// The latch remembers the last value it was given. It starts out as if it
/// had last seen `true`, so a signal that is already high on the first call
/// does not count as a rising edge.
///
/// One latch tracks one signal. [`on_falling_edge`](Self::on_falling_edge)
/// records the inverted input, so mixing it with
/// [`on_rising_edge`](Self::on_rising_edge) on the same latch compares values
/// of opposite polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLatch {
    previous: bool,
}

impl EdgeLatch {
    /// Create a latch that treats the signal as previously high.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: true }
    }

    /// True on the call where `current` goes from `false` to `true`.
    pub fn on_rising_edge(&mut self, current: bool) -> bool {
        let fired = current && !self.previous;
        self.previous = current;
        fired
    }

    /// True on the call where `current` goes from `true` to `false`.
    pub fn on_falling_edge(&mut self, current: bool) -> bool {
        self.on_rising_edge(!current)
    }

    /// True on any call where `current` differs from the recorded value.
    ///
    /// Evaluates once per call and records `current`. Chaining
    /// `on_rising_edge(c) || on_falling_edge(c)` instead records twice, leaving
    /// the inverted value behind whenever no rising edge fired, so a steady
    /// low signal would keep reporting edges.
    pub fn on_either_edge(&mut self, current: bool) -> bool {
        let fired = current != self.previous;
        self.previous = current;
        fired
    }

    /// The last recorded value.
    #[must_use]
    pub const fn previous(&self) -> bool {
        self.previous
    }
}

impl Default for EdgeLatch {
    fn default() -> Self {
        Self::new()
    }
}
