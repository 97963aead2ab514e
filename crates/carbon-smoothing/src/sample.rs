//! Numeric sample types accepted by the smoothing window.

use core::cmp::Ordering;
use core::fmt;

/// A raw numeric reading.
///
/// Implemented for the primitive integer and floating-point types. The
/// `Default` value is the zero the window is pre-filled with.
pub trait Sample: Copy + Default + PartialEq + Send + fmt::Debug + 'static {
    /// Convert to `f64` for averaging.
    fn to_f64(self) -> f64;

    /// Total order used for median selection.
    ///
    /// Floats order by IEEE 754 `totalOrder`, so NaN readings sort after
    /// every finite value instead of poisoning the sort.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sample_lossless_int {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn total_order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

macro_rules! impl_sample_wide_int {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            #[expect(clippy::cast_precision_loss, reason = "averaging rounds to the nearest f64")]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn total_order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

impl_sample_lossless_int!(i8, i16, i32, u8, u16, u32);
impl_sample_wide_int!(i64, u64, isize, usize);

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion() {
        assert!((Sample::to_f64(-3i32) + 3.0).abs() < f64::EPSILON);
        assert!((Sample::to_f64(1023u16) - 1023.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_sorts_last() {
        assert_eq!(f64::NAN.total_order(&1.0), Ordering::Greater);
        assert_eq!(1.0f64.total_order(&f64::NAN), Ordering::Less);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(<i32 as Default>::default(), 0);
        assert!(<f64 as Default>::default().abs() < f64::EPSILON);
    }
}
