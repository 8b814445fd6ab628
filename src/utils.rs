//! Integer/fractional splitting of recurrence parameters.

use crate::machine::KummerFloat;
use crate::types::Error;

/// Split `x` into its fractional part and its integer part as a step count.
///
/// Equivalent to C `modf`: both parts carry the sign of `x`, so
/// `split_integer(-12.3) == (-0.3, -12)` up to rounding of the fraction.
/// Fails when the integer part does not fit an `i64`.
#[inline]
pub(crate) fn split_integer<T: KummerFloat>(x: T) -> Result<(T, i64), Error> {
    let whole = x.trunc();
    let steps = whole.to_i64().ok_or(Error::InvalidInput)?;
    Ok((x - whole, steps))
}

/// `ceil(x)` as an `i64`.
#[inline]
pub(crate) fn ceil_to_i64<T: KummerFloat>(x: T) -> Result<i64, Error> {
    x.ceil().to_i64().ok_or(Error::InvalidInput)
}

/// Reject NaN and infinite parameters before any seed is evaluated.
#[inline]
pub(crate) fn check_finite<T: KummerFloat>(a: T, b: T, z: T) -> Result<(), Error> {
    if a.is_finite() && b.is_finite() && z.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidInput)
    }
}
