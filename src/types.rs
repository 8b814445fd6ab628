//! Core types shared by the recurrence drivers.

use crate::machine::KummerFloat;

/// Error type for 1F1 recurrence extrapolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// Invalid input (non-finite argument, integer part out of `i64` range,
    /// or mismatched integer parts for the joint `a`/`b` walk).
    #[error("invalid input: check a, b and z constraints")]
    InvalidInput,
    /// A recurrence divisor was exactly zero at the given step index.
    #[error("vanishing divisor at recurrence step {step}")]
    VanishingDivisor {
        /// Step index `k` at which the divisor vanished.
        step: i64,
    },
    /// A propagated value left the representable range.
    #[error("overflow: result magnitude exceeds representable range")]
    Overflow,
    /// `b` is a non-positive integer, where M(a, b; z) has a pole.
    #[error("pole: b is a non-positive integer")]
    Pole,
    /// Series did not meet its termination criterion.
    #[error("convergence failure: series did not meet termination criteria")]
    ConvergenceFailure,
}

/// One step of a three-term recurrence
/// `leading·y(k+1) = middle·y(k) − trailing·y(k−1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T: KummerFloat> {
    /// Coefficient of the value one step above the current one.
    pub leading: T,
    /// Coefficient of the current value.
    pub middle: T,
    /// Coefficient of the value one step below the current one.
    pub trailing: T,
}

impl<T: KummerFloat> Coefficients<T> {
    #[inline]
    pub fn new(leading: T, middle: T, trailing: T) -> Self {
        Self {
            leading,
            middle,
            trailing,
        }
    }
}

/// Injected evaluator for M(a, b; z) at well-conditioned parameter points.
///
/// The drivers call it exactly twice per invocation to seed the recurrence.
/// Any `Fn(T, T, T) -> Result<T, Error>` qualifies, so the enclosing library
/// can hand its own dispatcher back in without a dependency cycle.
pub trait BaseEvaluator<T: KummerFloat> {
    /// Evaluate M(a, b; z).
    fn evaluate(&self, a: T, b: T, z: T) -> Result<T, Error>;
}

impl<T, F> BaseEvaluator<T> for F
where
    T: KummerFloat,
    F: Fn(T, T, T) -> Result<T, Error>,
{
    #[inline]
    fn evaluate(&self, a: T, b: T, z: T) -> Result<T, Error> {
        self(a, b, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let msg = Error::VanishingDivisor { step: -3 }.to_string();
        assert!(msg.contains("-3"), "unexpected message: {msg}");
        assert!(Error::Pole.to_string().starts_with("pole"));
    }

    #[test]
    fn closures_are_base_evaluators() {
        let ev = |a: f64, b: f64, z: f64| Ok::<f64, Error>(a + b + z);
        assert_eq!(ev.evaluate(1.0, 2.0, 3.0), Ok(6.0));
    }
}
