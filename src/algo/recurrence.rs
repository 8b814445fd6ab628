//! Forward and backward propagation of a three-term recurrence.
//!
//! The state is a sliding window of two values. Every step discards the
//! older value, promotes `second` to `first` and stores the new value in
//! `second`, so after `n` steps `first` holds the value `n` units away from
//! where the walk started.

use core::mem;

use crate::algo::coefficients::RecurrenceCoefficients;
use crate::machine::KummerFloat;
use crate::types::Error;

/// Two consecutive members of a recurrence chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecurrencePair<T: KummerFloat> {
    /// Value at the current offset.
    pub first: T,
    /// Value one unit further along the direction of the walk.
    pub second: T,
}

impl<T: KummerFloat> RecurrencePair<T> {
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Walk towards increasing offsets for `last_index` steps.
    ///
    /// Step `k` uses the coefficients at index `k`, which must describe the
    /// point held in `second`:
    /// `next = (middle·second − trailing·first) / leading`.
    /// Returns the value `last_index` units above the initial `first`.
    pub fn forward<C>(&mut self, coefs: &C, last_index: i64) -> Result<T, Error>
    where
        C: RecurrenceCoefficients<T> + ?Sized,
    {
        for k in 0..last_index {
            let c = coefs.coefficients(k);
            if c.leading == T::zero() {
                tracing::debug!(step = k, "forward recurrence hit a zero leading coefficient");
                return Err(Error::VanishingDivisor { step: k });
            }
            let next = (c.middle * self.second - c.trailing * self.first) / c.leading;
            self.rotate(next, k)?;
        }

        Ok(self.first)
    }

    /// Walk towards decreasing offsets until step index `last_index`
    /// (exclusive, `last_index <= 0`).
    ///
    /// Step `k` uses the coefficients at index `k`, which must describe the
    /// point held in `second`:
    /// `next = (middle·second − leading·first) / trailing`.
    /// Returns the value `|last_index|` units below the initial `first`.
    pub fn backward<C>(&mut self, coefs: &C, last_index: i64) -> Result<T, Error>
    where
        C: RecurrenceCoefficients<T> + ?Sized,
    {
        let mut k = 0;
        while k > last_index {
            let c = coefs.coefficients(k);
            if c.trailing == T::zero() {
                tracing::debug!(step = k, "backward recurrence hit a zero trailing coefficient");
                return Err(Error::VanishingDivisor { step: k });
            }
            let next = (c.middle * self.second - c.leading * self.first) / c.trailing;
            self.rotate(next, k)?;
            k -= 1;
        }

        Ok(self.first)
    }

    #[inline]
    fn rotate(&mut self, next: T, step: i64) -> Result<(), Error> {
        if !next.is_finite() {
            tracing::debug!(step, "recurrence value left the representable range");
            return Err(Error::Overflow);
        }
        self.first = mem::replace(&mut self.second, next);
        Ok(())
    }
}
