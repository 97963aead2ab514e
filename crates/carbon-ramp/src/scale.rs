//! Linear remapping between value ranges.

/// Map `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// Values outside the input range extrapolate linearly. A degenerate input
/// range (`old_min == old_max`) maps everything to `new_min`.
///
/// # Example
///
/// ```
/// use carbon_ramp::map_range;
///
/// assert_eq!(map_range(0.5, 0.0, 1.0, -100.0, 100.0), 0.0);
/// assert_eq!(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
/// ```
#[must_use]
pub fn map_range(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    let span = old_max - old_min;
    if span == 0.0 {
        return new_min;
    }
    new_min + (value - old_min) * (new_max - new_min) / span
}

/// Integer form of [`map_range`]. The result truncates toward zero and
/// saturates at the `i32` bounds.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "truncation toward zero is the integer mapping contract"
)]
pub fn map_range_i32(value: i32, old_min: i32, old_max: i32, new_min: i32, new_max: i32) -> i32 {
    map_range(
        f64::from(value),
        f64::from(old_min),
        f64::from(old_max),
        f64::from(new_min),
        f64::from(new_max),
    ) as i32
}
