//! Machine constants and the `KummerFloat` trait.
//!
//! Besides the usual machine constants, the trait carries the two numeric
//! primitives the recurrence drivers need from the working type: the binary
//! exponent of a value (as returned by C `frexp`) and the distance between two
//! values measured in representable floats.

use num_traits::Float;

/// Floating-point trait for 1F1 recurrence extrapolation.
///
/// Implemented for `f64` and `f32`.
pub trait KummerFloat: Float + core::fmt::Debug + core::fmt::Display + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Number of binary digits in the mantissa.
    const MACH_DIGITS: i32;
    /// Upper bound on the number of terms summed by the power series.
    const SERIES_MAX_TERMS: usize;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it truncates via `as f32`.
    fn from_f64(x: f64) -> Self;

    /// Threshold below which `a` is walked by recurrence instead of being
    /// evaluated directly.
    // TODO: derive from MACH_DIGITS once the crossover against direct
    // evaluation has been measured for f32.
    fn small_a_threshold() -> Self {
        Self::from_f64(-10.0)
    }

    /// Binary exponent `e` such that `self = m · 2^e` with `0.5 <= |m| < 1`.
    ///
    /// Zero, infinities and NaN report 0, matching `frexp`.
    fn binary_exponent(self) -> i32;

    /// Number of representable values between `self` and `other`.
    ///
    /// Counts across zero, so `float_distance(-tiny, tiny)` is small. Always
    /// non-negative; NaN on either side gives NaN.
    fn float_distance(self, other: Self) -> Self;
}

impl KummerFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_DIGITS: i32 = 53;
    const SERIES_MAX_TERMS: usize = 5000;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    fn binary_exponent(self) -> i32 {
        if self == 0.0 || !self.is_finite() {
            return 0;
        }
        let biased = ((self.to_bits() >> 52) & 0x7ff) as i32;
        if biased == 0 {
            // Subnormal: scale by 2^54 into the normal range first.
            return (self * 18014398509481984.0).binary_exponent() - 54;
        }
        biased - 1022
    }

    fn float_distance(self, other: f64) -> f64 {
        if self.is_nan() || other.is_nan() {
            return f64::NAN;
        }
        let ordered = |x: f64| -> i64 {
            let bits = x.to_bits() as i64;
            if bits < 0 {
                -(bits & i64::MAX)
            } else {
                bits
            }
        };
        ordered(self).abs_diff(ordered(other)) as f64
    }
}

impl KummerFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_DIGITS: i32 = 24;
    const SERIES_MAX_TERMS: usize = 2000;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }

    fn binary_exponent(self) -> i32 {
        if self == 0.0 || !self.is_finite() {
            return 0;
        }
        let biased = ((self.to_bits() >> 23) & 0xff) as i32;
        if biased == 0 {
            return (self * 33554432.0).binary_exponent() - 25;
        }
        biased - 126
    }

    fn float_distance(self, other: f32) -> f32 {
        if self.is_nan() || other.is_nan() {
            return f32::NAN;
        }
        let ordered = |x: f32| -> i32 {
            let bits = x.to_bits() as i32;
            if bits < 0 {
                -(bits & i32::MAX)
            } else {
                bits
            }
        };
        ordered(self).abs_diff(ordered(other)) as f32
    }
}
