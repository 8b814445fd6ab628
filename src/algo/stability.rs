//! Starting point of the backward walk in `a`.
//!
//! The vary-a recurrence divides by `b − aᵢ` on every backward step. When `a`
//! and `b` are both negative with `a < b` and share their fractional part, the
//! walk from `fract(a)` down to `a` passes through `aᵢ = b` and that divisor
//! cancels to (nearly) zero. Starting the walk at `b − 1` instead keeps every
//! `aᵢ` strictly below `b`.

use crate::machine::KummerFloat;
use crate::types::Error;
use crate::utils::{ceil_to_i64, split_integer};

/// Where the backward walk in `a` starts and how far it goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Anchor<T: KummerFloat> {
    /// Parameter value of the first seed.
    pub(crate) start: T,
    /// Signed step count handed to the backward recurrence (`<= 0`).
    pub(crate) last_index: i64,
    /// `true` if the start was moved to `b − 1`.
    pub(crate) reanchored: bool,
}

/// Fractional parts of `a` and `b` are closer than `2^max(exp(a), exp(b))`
/// representable values, where `exp` is the `frexp` exponent.
///
/// The tolerance grows with the magnitude of the parameters because `fract`
/// of a large value inherits the absolute rounding error of that value.
pub(crate) fn fractional_parts_close<T: KummerFloat>(a_frac: T, b_frac: T, a: T, b: T) -> bool {
    let max_exp = a.binary_exponent().max(b.binary_exponent());
    let tolerance = T::from_f64(2.0).powi(max_exp);
    a_frac.float_distance(b_frac).abs() <= tolerance
}

/// Anchor the backward recurrence in `a` for the negative-`a` driver.
pub(crate) fn negative_a_anchor<T: KummerFloat>(a: T, b: T) -> Result<Anchor<T>, Error> {
    let (b_frac, _) = split_integer(b)?;
    let (a_frac, integer_part) = split_integer(a)?;

    let zero = T::zero();
    if a < b && b < zero && fractional_parts_close(a_frac, b_frac, a, b) {
        let start = b - T::one();
        let last_index = integer_part - (ceil_to_i64(b)? - 1);
        tracing::debug!(
            a = ?a,
            b = ?b,
            start = ?start,
            last_index,
            "fractional parts of a and b coincide, anchoring the a-recurrence below b"
        );
        return Ok(Anchor {
            start,
            last_index,
            reanchored: true,
        });
    }

    Ok(Anchor {
        start: a_frac,
        last_index: integer_part,
        reanchored: false,
    })
}
