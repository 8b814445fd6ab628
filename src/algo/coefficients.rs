//! Three-term recurrence coefficients for M(a, b; z).
//!
//! Each family maps a step index `i` to the triple `(leading, middle, trailing)`
//! of the contiguous relation
//!
//! ```text
//! leading·M(+1) − middle·M(0) + trailing·M(−1) = 0
//! ```
//!
//! where `M(±1)` denotes M shifted by one unit along the walked parameter(s)
//! from the point `base + i`.

use num_traits::NumCast;

use crate::machine::KummerFloat;
use crate::types::Coefficients;

/// Source of recurrence coefficients indexed by step.
pub trait RecurrenceCoefficients<T: KummerFloat> {
    /// Coefficients at offset `i` from the family's anchor.
    fn coefficients(&self, i: i64) -> Coefficients<T>;
}

impl<T, F> RecurrenceCoefficients<T> for F
where
    T: KummerFloat,
    F: Fn(i64) -> Coefficients<T>,
{
    #[inline]
    fn coefficients(&self, i: i64) -> Coefficients<T> {
        self(i)
    }
}

#[inline]
fn offset<T: KummerFloat>(base: T, i: i64) -> T {
    // Step counts are bounded by the integer part of a finite T, so the
    // conversion cannot fail.
    base + <T as NumCast>::from(i).unwrap_or_else(T::nan)
}

/// Recurrence on `a` with `b` and `z` fixed:
/// (b−a)·M(a−1) + (2a−b+z)·M(a) − a·M(a+1) = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ACoefficients<T: KummerFloat> {
    a: T,
    b: T,
    z: T,
}

impl<T: KummerFloat> ACoefficients<T> {
    pub fn new(a: T, b: T, z: T) -> Self {
        Self { a, b, z }
    }
}

impl<T: KummerFloat> RecurrenceCoefficients<T> for ACoefficients<T> {
    #[inline]
    fn coefficients(&self, i: i64) -> Coefficients<T> {
        let ai = offset(self.a, i);
        let two = T::from_f64(2.0);

        Coefficients::new(-ai, (self.b - two * ai) - self.z, self.b - ai)
    }
}

/// Recurrence on `b` with `a` and `z` fixed:
/// b(b−1)·M(b−1) + b(1−b−z)·M(b) + z(b−a)·M(b+1) = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BCoefficients<T: KummerFloat> {
    a: T,
    b: T,
    z: T,
}

impl<T: KummerFloat> BCoefficients<T> {
    pub fn new(a: T, b: T, z: T) -> Self {
        Self { a, b, z }
    }
}

impl<T: KummerFloat> RecurrenceCoefficients<T> for BCoefficients<T> {
    #[inline]
    fn coefficients(&self, i: i64) -> Coefficients<T> {
        let bi = offset(self.b, i);
        let one = T::one();

        Coefficients::new(
            self.z * (bi - self.a),
            bi * ((self.z + bi) - one),
            bi * (bi - one),
        )
    }
}

/// Recurrence on `a` and `b` shifted together, `z` fixed:
/// b(1−b)·M(a−1, b−1) − b(1−b+z)·M(a, b) + a·z·M(a+1, b+1) = 0.
///
/// `a` and `b` share one offset, so the walk only makes sense when their
/// integer parts agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ABCoefficients<T: KummerFloat> {
    a: T,
    b: T,
    z: T,
}

impl<T: KummerFloat> ABCoefficients<T> {
    pub fn new(a: T, b: T, z: T) -> Self {
        Self { a, b, z }
    }
}

impl<T: KummerFloat> RecurrenceCoefficients<T> for ABCoefficients<T> {
    #[inline]
    fn coefficients(&self, i: i64) -> Coefficients<T> {
        let ai = offset(self.a, i);
        let bi = offset(self.b, i);
        let one = T::one();

        Coefficients::new(ai * self.z, bi * ((one - bi) + self.z), bi * (one - bi))
    }
}
