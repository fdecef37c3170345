//! Elementary and transcendental functions on `f64`, computed from first
//! principles: Maclaurin series, fixed-point iteration and closed-form
//! identities. No platform math routine is called.
//!
//! The free functions evaluate with [`Precision::DEFAULT`]. Every series
//! based function is also available as a method on [`Precision`], which
//! controls the term limit and the convergence tolerance.
//!
//! Functions that have no real result for some arguments return a
//! [`MathResult`]:
//!
//! ```
//! use seriesmath::{sqrt, ithrt, DomainError};
//!
//! assert!((sqrt(2.).unwrap() - 1.4142135623730951).abs() < 1e-12);
//! assert!(matches!(ithrt(-8., 2), Err(DomainError::NegativeRadicand { .. })));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod operations;
mod precision;

#[cfg(feature = "python")]
mod py;
#[cfg(test)]
mod utils;

pub use self::error::{DomainError, MathResult};
pub use self::operations::arith::{
    abs, ceil, dec_part, floor, fmod, int_part, max, min, neg, round, sign,
    square,
};
pub use self::operations::combinatorics::{factorial, int_power};
pub use self::operations::constants::{e, pi};
pub use self::operations::exp::{exp, log, log10, log2};
pub use self::operations::functions::{curt, hypot, ithrt, pow, sqrt};
pub use self::operations::hyperbolic::{atanh, cosh, sinh, tanh};
pub use self::operations::trig::{
    acos, asin, atan, atan2, cos, sin, tan, to_degrees, to_radians,
};
pub use self::precision::{Precision, SERIES_LIMIT};
