//! Fixed-capacity rolling window.
//!
//! The window always holds exactly `capacity` samples. It starts zero-filled
//! and every push overwrites the oldest slot, so the zero fill takes part in
//! the mean and median until it has been overwritten.

use crate::sample::Sample;

/// Circular buffer holding the last N samples.
///
/// # RT Safety
///
/// - Storage is allocated once at construction
/// - `push` is O(1) with no allocation
/// - `mean` is O(N); `median_with` is O(N) on average and reuses caller storage
#[derive(Debug, Clone)]
pub struct RollingWindow<T: Sample> {
    slots: Vec<T>,
    next: usize,
}

impl<T: Sample> RollingWindow<T> {
    /// Create a zero-filled window. A capacity of 0 is clamped to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use carbon_smoothing::RollingWindow;
    ///
    /// let window = RollingWindow::<i32>::new(0);
    /// assert_eq!(window.capacity(), 1);
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity.max(1)],
            next: 0,
        }
    }

    /// Number of slots. Never changes after construction.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Overwrite the oldest slot with `sample`.
    #[inline]
    pub fn push(&mut self, sample: T) {
        if let Some(slot) = self.slots.get_mut(self.next) {
            *slot = sample;
        }
        self.next = (self.next + 1) % self.slots.len();
    }

    /// Arithmetic mean of every slot.
    #[must_use]
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.slots.iter().map(|s| s.to_f64()).sum();
        #[expect(clippy::cast_precision_loss, reason = "window capacities are far below 2^52")]
        let len = self.slots.len() as f64;
        sum / len
    }

    /// Median of the window, allocating a scratch copy.
    ///
    /// For an even capacity this is the upper median, the element at index
    /// `N / 2` of the ascending order.
    #[must_use]
    pub fn median(&self) -> T {
        let mut scratch = Vec::with_capacity(self.slots.len());
        self.median_with(&mut scratch)
    }

    /// Median of the window using `scratch` as working storage.
    ///
    /// `scratch` is cleared and refilled; once it has grown to the window's
    /// capacity no further allocation happens.
    pub fn median_with(&self, scratch: &mut Vec<T>) -> T {
        scratch.clear();
        scratch.extend_from_slice(&self.slots);
        let mid = scratch.len() / 2;
        let (_, median, _) = scratch.select_nth_unstable_by(mid, T::total_order);
        *median
    }

    /// The most recently pushed sample, or the zero fill if nothing was pushed.
    #[must_use]
    pub fn latest(&self) -> T {
        let len = self.slots.len();
        let idx = (self.next + len - 1) % len;
        self.slots.get(idx).copied().unwrap_or_default()
    }

    /// Slots in storage order. The write position rotates through this slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Slots from oldest to newest.
    pub fn iter_chronological(&self) -> impl Iterator<Item = T> + '_ {
        let (newer, older) = self.slots.split_at(self.next);
        older.iter().chain(newer.iter()).copied()
    }

    /// Overwrite every slot with `value` and rewind the write position.
    pub fn fill(&mut self, value: T) {
        self.slots.fill(value);
        self.next = 0;
    }
}
