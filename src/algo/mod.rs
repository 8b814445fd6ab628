//! Numerical building blocks for the recurrence drivers.
//!
//! - [`coefficients`]: the three contiguous-relation families (vary `a`,
//!   vary `b`, vary `a` and `b` together)
//! - [`recurrence`]: forward and backward propagation over a two-value window
//! - `stability`: anchoring of the backward walk in `a` when `a` and `b`
//!   share their fractional part (crate-private)
//! - [`series`]: direct power series, usable as a seed evaluator
//!
//! # Divisors
//!
//! Forward steps divide by the `leading` coefficient and backward steps by
//! the `trailing` one. An exactly zero divisor is reported as
//! [`Error::VanishingDivisor`](crate::Error::VanishingDivisor) and a
//! non-finite intermediate as [`Error::Overflow`](crate::Error::Overflow);
//! neither is retried here.

pub mod coefficients;
pub mod recurrence;
pub mod series;
pub(crate) mod stability;
