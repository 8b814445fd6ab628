//! Recurrence drivers for large-parameter 1F1.
//!
//! Each driver splits the troublesome parameter(s) into integer and
//! fractional parts, seeds the recurrence with two values from the injected
//! [`BaseEvaluator`] one unit apart, and walks the integer part in the
//! numerically stable direction:
//!
//! | driver | walked | direction |
//! |---|---|---|
//! | [`backward_recurrence_for_negative_a`] | `a` | backward |
//! | [`forward_recurrence_for_positive_a`] | `a` | forward |
//! | [`backward_recurrence_for_negative_b`] | `b` | backward |
//! | [`backward_recurrence_for_negative_a_and_b`] | `a`, `b` | backward |

use crate::algo::coefficients::{ABCoefficients, ACoefficients, BCoefficients};
use crate::algo::recurrence::RecurrencePair;
use crate::algo::stability::negative_a_anchor;
use crate::machine::KummerFloat;
use crate::types::{BaseEvaluator, Error};
use crate::utils::{check_finite, split_integer};

/// M(a, b; z) for large negative `a`, by backward recurrence in `a`.
///
/// Seeds at `(ak, b, z)` and `(ak − 1, b, z)` where `ak = fract(a)`, or
/// `ak = b − 1` when `a < b < 0` and both share their fractional part.
pub fn backward_recurrence_for_negative_a<T, E>(
    a: T,
    b: T,
    z: T,
    evaluator: &E,
) -> Result<T, Error>
where
    T: KummerFloat,
    E: BaseEvaluator<T> + ?Sized,
{
    check_finite(a, b, z)?;

    let anchor = negative_a_anchor(a, b)?;
    let one = T::one();
    let mut ak = anchor.start;

    tracing::trace!(
        a = ?a,
        b = ?b,
        z = ?z,
        ak = ?ak,
        steps = anchor.last_index,
        reanchored = anchor.reanchored,
        "negative-a recurrence"
    );

    let first = evaluator.evaluate(ak, b, z)?;
    ak = ak - one;
    let second = evaluator.evaluate(ak, b, z)?;

    let s = ACoefficients::new(ak, b, z);
    RecurrencePair::new(first, second).backward(&s, anchor.last_index)
}

/// M(a, b; z) for large positive `a`, by forward recurrence in `a`.
///
/// Seeds at `(ak, b, z)` and `(ak + 1, b, z)` where `ak = fract(a)`.
pub fn forward_recurrence_for_positive_a<T, E>(
    a: T,
    b: T,
    z: T,
    evaluator: &E,
) -> Result<T, Error>
where
    T: KummerFloat,
    E: BaseEvaluator<T> + ?Sized,
{
    check_finite(a, b, z)?;

    let (mut ak, integer_part) = split_integer(a)?;
    let one = T::one();

    tracing::trace!(
        a = ?a,
        b = ?b,
        z = ?z,
        ak = ?ak,
        steps = integer_part,
        "positive-a recurrence"
    );

    let first = evaluator.evaluate(ak, b, z)?;
    ak = ak + one;
    let second = evaluator.evaluate(ak, b, z)?;

    let s = ACoefficients::new(ak, b, z);
    RecurrencePair::new(first, second).forward(&s, integer_part)
}

/// M(a, b; z) for large negative `b`, by backward recurrence in `b`.
///
/// Seeds at `(a, bk, z)` and `(a, bk − 1, z)` where `bk = fract(b)`.
pub fn backward_recurrence_for_negative_b<T, E>(
    a: T,
    b: T,
    z: T,
    evaluator: &E,
) -> Result<T, Error>
where
    T: KummerFloat,
    E: BaseEvaluator<T> + ?Sized,
{
    check_finite(a, b, z)?;

    let (mut bk, integer_part) = split_integer(b)?;
    let one = T::one();

    tracing::trace!(
        a = ?a,
        b = ?b,
        z = ?z,
        bk = ?bk,
        steps = integer_part,
        "negative-b recurrence"
    );

    let first = evaluator.evaluate(a, bk, z)?;
    bk = bk - one;
    let second = evaluator.evaluate(a, bk, z)?;

    let s = BCoefficients::new(a, bk, z);
    RecurrencePair::new(first, second).backward(&s, integer_part)
}

/// M(a, b; z) for `a` and `b` both large and negative, by backward
/// recurrence in `a` and `b` together.
///
/// `a` and `b` must have the same integer part; otherwise
/// [`Error::InvalidInput`] is returned.
pub fn backward_recurrence_for_negative_a_and_b<T, E>(
    a: T,
    b: T,
    z: T,
    evaluator: &E,
) -> Result<T, Error>
where
    T: KummerFloat,
    E: BaseEvaluator<T> + ?Sized,
{
    check_finite(a, b, z)?;

    let (mut ak, integer_part) = split_integer(a)?;
    let (mut bk, b_integer_part) = split_integer(b)?;
    if integer_part != b_integer_part {
        return Err(Error::InvalidInput);
    }
    let one = T::one();

    tracing::trace!(
        a = ?a,
        b = ?b,
        z = ?z,
        ak = ?ak,
        bk = ?bk,
        steps = integer_part,
        "negative-a-and-b recurrence"
    );

    let first = evaluator.evaluate(ak, bk, z)?;
    ak = ak - one;
    bk = bk - one;
    let second = evaluator.evaluate(ak, bk, z)?;

    let s = ABCoefficients::new(ak, bk, z);
    RecurrencePair::new(first, second).backward(&s, integer_part)
}

/// `a` is far enough below zero that recurrence beats direct evaluation.
///
/// Strict comparison against [`KummerFloat::small_a_threshold`].
#[inline]
pub fn is_a_small_enough<T: KummerFloat>(a: T) -> bool {
    a < T::small_a_threshold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::series::hyp1f1_series;
    use approx::assert_relative_eq;
    use core::cell::RefCell;

    #[test]
    fn negative_a_matches_reference() {
        // mpmath 30-digit reference: M(-12.3, 4.7; 2) = 0.00141832482809300...
        let expected = 0.0014183248280930075;
        let value =
            backward_recurrence_for_negative_a(-12.3_f64, 4.7, 2.0, &hyp1f1_series::<f64>).unwrap();
        let steps = 12.0;
        assert_relative_eq!(value, expected, max_relative = steps * 1e-14);
    }

    #[test]
    fn negative_a_more_cases() {
        // mpmath 30-digit references
        let cases = [
            (-25.6, 3.2, 1.5, -0.01444151331209508),
            (-40.25, 0.5, -3.0, 445956572.0063439),
            (-12.3, 4.7, -2.0, 36.84829596492624),
        ];
        for (a, b, z, expected) in cases {
            let value =
                backward_recurrence_for_negative_a(a, b, z, &hyp1f1_series::<f64>).unwrap();
            assert_relative_eq!(value, expected, max_relative = 1e-13);
        }
    }

    #[test]
    fn negative_a_reanchored_walk() {
        // a and b share the fraction -0.5; the ordinary walk would divide by
        // b - a = 0 on the way down.
        // mpmath: M(-5.5, -2.5; 1) = 6.43446633335987...
        let value =
            backward_recurrence_for_negative_a(-5.5_f64, -2.5, 1.0, &hyp1f1_series::<f64>)
                .unwrap();
        assert_relative_eq!(value, 6.43446633335987, max_relative = 1e-13);

        // mpmath: M(-7.25, -3.25; 0.5) = 4.136822724632973...
        let value =
            backward_recurrence_for_negative_a(-7.25_f64, -3.25, 0.5, &hyp1f1_series::<f64>)
                .unwrap();
        assert_relative_eq!(value, 4.136822724632973, max_relative = 1e-13);
    }

    #[test]
    fn negative_a_seeds_at_b_minus_one_when_reanchored() {
        let calls = RefCell::new(Vec::new());
        let ev = |a: f64, b: f64, z: f64| {
            calls.borrow_mut().push((a, b));
            hyp1f1_series(a, b, z)
        };
        backward_recurrence_for_negative_a(-5.5, -2.5, 1.0, &ev).unwrap();
        assert_eq!(*calls.borrow(), vec![(-3.5, -2.5), (-4.5, -2.5)]);

        calls.borrow_mut().clear();
        backward_recurrence_for_negative_a(-5.25, -2.5, 1.0, &ev).unwrap();
        assert_eq!(*calls.borrow(), vec![(-0.25, -2.5), (-1.25, -2.5)]);
    }

    #[test]
    fn negative_a_without_integer_part_is_direct() {
        let value =
            backward_recurrence_for_negative_a(-0.5_f64, 1.5, 1.0, &hyp1f1_series::<f64>).unwrap();
        let direct = hyp1f1_series(-0.5_f64, 1.5, 1.0).unwrap();
        assert_eq!(value, direct);
    }

    #[test]
    fn positive_a_matches_reference() {
        // mpmath 30-digit references
        let cases = [
            (12.3, 4.7, 2.0, 79.81182345501546),
            (30.4, 2.5, -1.0, 0.0018917396924501425),
            (7.5, 1.5, 3.0, 2320.840650710714),
        ];
        for (a, b, z, expected) in cases {
            let value = forward_recurrence_for_positive_a(a, b, z, &hyp1f1_series::<f64>).unwrap();
            assert_relative_eq!(value, expected, max_relative = 1e-13);
        }
    }

    #[test]
    fn negative_b_matches_reference() {
        // mpmath 30-digit references
        let cases = [
            (1.3, -12.4, 2.0, 0.8248087615406893),
            (0.5, -20.7, 1.0, 0.9767259442714202),
            (-0.5, -8.25, -2.0, 0.8685331582580452),
        ];
        for (a, b, z, expected) in cases {
            let value = backward_recurrence_for_negative_b(a, b, z, &hyp1f1_series::<f64>).unwrap();
            assert_relative_eq!(value, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn negative_a_and_b_matches_reference() {
        // mpmath 30-digit references
        let cases = [
            (-12.3, -12.7, 2.0, 6.896969073112487),
            (-20.25, -20.6, 1.0, 2.671308078843718),
            (-5.5, -5.75, -1.5, 0.2339405485115677),
        ];
        for (a, b, z, expected) in cases {
            let value =
                backward_recurrence_for_negative_a_and_b(a, b, z, &hyp1f1_series::<f64>).unwrap();
            assert_relative_eq!(value, expected, max_relative = 1e-13);
        }
    }

    #[test]
    fn negative_a_and_b_rejects_mismatched_integer_parts() {
        assert_eq!(
            backward_recurrence_for_negative_a_and_b(-12.3_f64, -11.7, 2.0, &hyp1f1_series::<f64>),
            Err(Error::InvalidInput)
        );
    }

    #[test]
    fn drivers_call_the_evaluator_twice() {
        let count = RefCell::new(0usize);
        let ev = |a: f64, b: f64, z: f64| {
            *count.borrow_mut() += 1;
            hyp1f1_series(a, b, z)
        };
        backward_recurrence_for_negative_a(-12.3, 4.7, 2.0, &ev).unwrap();
        forward_recurrence_for_positive_a(12.3, 4.7, 2.0, &ev).unwrap();
        backward_recurrence_for_negative_b(1.3, -12.4, 2.0, &ev).unwrap();
        backward_recurrence_for_negative_a_and_b(-12.3, -12.7, 2.0, &ev).unwrap();
        assert_eq!(*count.borrow(), 8);
    }

    #[test]
    fn evaluator_errors_propagate() {
        let failing = |_: f64, _: f64, _: f64| Err::<f64, Error>(Error::ConvergenceFailure);
        assert_eq!(
            forward_recurrence_for_positive_a(12.3, 4.7, 2.0, &failing),
            Err(Error::ConvergenceFailure)
        );
        // Integer b lands the seed on the pole at b = 0.
        assert_eq!(
            backward_recurrence_for_negative_b(1.3, -12.0, 2.0, &hyp1f1_series::<f64>),
            Err(Error::Pole)
        );
    }

    #[test]
    fn non_finite_arguments_are_rejected() {
        assert_eq!(
            backward_recurrence_for_negative_a(f64::NAN, 4.7, 2.0, &hyp1f1_series::<f64>),
            Err(Error::InvalidInput)
        );
        assert_eq!(
            forward_recurrence_for_positive_a(12.3, 4.7, f64::INFINITY, &hyp1f1_series::<f64>),
            Err(Error::InvalidInput)
        );
    }

    #[test]
    fn f32_drivers() {
        let value =
            backward_recurrence_for_negative_a(-12.5_f32, 4.5, 2.0, &hyp1f1_series::<f32>).unwrap();
        let reference =
            backward_recurrence_for_negative_a(-12.5_f64, 4.5, 2.0, &hyp1f1_series::<f64>).unwrap();
        assert!(((value as f64 - reference) / reference).abs() < 1e-4);
    }

    #[test]
    fn small_a_threshold_is_strict() {
        assert!(is_a_small_enough(-10.0001_f64));
        assert!(!is_a_small_enough(-9.9999_f64));
        assert!(!is_a_small_enough(-10.0_f64));
        assert!(is_a_small_enough(-11.0_f32));
    }
}
