//! Recurrence extrapolation for the Kummer confluent hypergeometric function
//! M(a, b; z) = ₁F₁(a; b; z).
//!
//! Direct summation of M loses every significant digit once `a` or `b` is
//! large in magnitude. This crate evaluates M there by taking two values at a
//! shifted, well-conditioned parameter point from a caller-supplied base
//! evaluator and walking a three-term recurrence over the remaining integer
//! part of the parameter, in the direction in which the wanted solution
//! dominates:
//!
//! - [`backward_recurrence_for_negative_a`]
//! - [`forward_recurrence_for_positive_a`]
//! - [`backward_recurrence_for_negative_b`]
//! - [`backward_recurrence_for_negative_a_and_b`]
//!
//! [`is_a_small_enough`] tells the caller when `a` is negative enough for the
//! first driver to pay off.
//!
//! The base evaluator is any [`BaseEvaluator`], including plain closures.
//! [`hyp1f1_series`] is provided for seed points close to the origin.
//!
//! ```
//! use kummer_recurrence::{backward_recurrence_for_negative_a, hyp1f1_series};
//!
//! let m = backward_recurrence_for_negative_a(-12.3_f64, 4.7, 2.0, &hyp1f1_series::<f64>).unwrap();
//! assert!((m - 0.0014183248280930075).abs() < 1e-15);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod algo;
pub mod drivers;
pub mod machine;
pub mod types;

mod utils;

pub use algo::coefficients::{ABCoefficients, ACoefficients, BCoefficients, RecurrenceCoefficients};
pub use algo::recurrence::RecurrencePair;
pub use algo::series::hyp1f1_series;
pub use drivers::{
    backward_recurrence_for_negative_a, backward_recurrence_for_negative_a_and_b,
    backward_recurrence_for_negative_b, forward_recurrence_for_positive_a, is_a_small_enough,
};
pub use machine::KummerFloat;
pub use types::{BaseEvaluator, Coefficients, Error};
