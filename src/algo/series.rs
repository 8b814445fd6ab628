//! Power series for M(a, b; z).
//!
//! Direct summation of Σ (a)ₙ/(b)ₙ · zⁿ/n!. Accurate for the small-parameter
//! seed points the recurrence drivers ask for; large |a|, |b| or |z| lose
//! digits to cancellation and should go through the drivers instead.

use crate::machine::KummerFloat;
use crate::types::Error;
use crate::utils::check_finite;

/// Sum the 1F1 power series.
///
/// Stops once a term drops below `MACH_EPSILON` relative to the partial sum
/// and the term index has passed both |a| and |b|, after which the terms
/// decrease monotonically. A non-positive integer `a` terminates the series
/// exactly.
///
/// # Errors
/// - [`Error::InvalidInput`] for non-finite arguments
/// - [`Error::Pole`] when `b` is a non-positive integer
/// - [`Error::Overflow`] when the partial sum overflows
/// - [`Error::ConvergenceFailure`] after `SERIES_MAX_TERMS` terms
pub fn hyp1f1_series<T: KummerFloat>(a: T, b: T, z: T) -> Result<T, Error> {
    check_finite(a, b, z)?;

    let zero = T::zero();
    let one = T::one();

    if b <= zero && b == b.floor() {
        return Err(Error::Pole);
    }

    let abs_a = a.abs();
    let abs_b = b.abs();
    let mut term = one;
    let mut sum = one;

    for n in 0..T::SERIES_MAX_TERMS {
        let fnn = T::from_f64(n as f64);
        let an = a + fnn;
        if an == zero {
            // Terminating polynomial
            return Ok(sum);
        }

        let next = fnn + one;
        term = term * (an / (b + fnn) * z / next);
        sum = sum + term;

        if !sum.is_finite() {
            return Err(Error::Overflow);
        }
        if term.abs() <= T::MACH_EPSILON * sum.abs() && next > abs_a && next > abs_b {
            return Ok(sum);
        }
    }

    Err(Error::ConvergenceFailure)
}
