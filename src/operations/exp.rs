//! This module contains the implementation of log- and exp-related methods.
//!
use crate::error::{DomainError, MathResult};
use crate::Precision;

// e^x overflows above this value and underflows to zero below the next one.
const EXP_OVERFLOW: f64 = 709.782712893384;
const EXP_UNDERFLOW: f64 = -745.1332191019412;

// The logarithm iteration works on arguments in [1, LOG_REDUCTION).
const LOG_REDUCTION: f64 = 100.;

impl Precision {
    /// Computes the taylor series:
    /// exp(x) = 1 + x/1! + x^2/2! + x^3/3! ...
    fn exp_taylor(&self, x: f64) -> f64 {
        let mut term = 1.;
        let mut sum = 0.;
        let mut prev = f64::NAN;
        for n in 0..self.limit() {
            if self.converged(prev, sum) {
                break; // Stop if we are not making progress.
            }
            prev = sum;
            sum += term;

            // Prepare the next iteration.
            term = term * x / (n + 1) as f64;
        }
        sum
    }

    /// Reduce the range of 'x' with the identity:
    /// e^x = (e^(x/8))^8
    fn exp_range_reduce(&self, x: f64) -> f64 {
        if x > 1. {
            let esx = self.exp_range_reduce(x / 8.);
            let sq = esx * esx;
            let sq = sq * sq;
            return sq * sq;
        }
        self.exp_taylor(x)
    }

    /// Computes the exponential function `e^x`.
    pub fn exp(&self, x: f64) -> f64 {
        // Handle all of the special cases:
        if x.is_nan() {
            return x;
        } else if x == 0. {
            return 1.;
        } else if x > EXP_OVERFLOW {
            return f64::INFINITY;
        } else if x < EXP_UNDERFLOW {
            return 0.;
        }

        // Handle the negative values. Past the overflow bound e^-x is not
        // representable, so square the reciprocal of e^(-x/2) instead.
        if x < -EXP_OVERFLOW {
            let r = 1. / self.exp_range_reduce(-x / 2.);
            return r * r;
        } else if x < 0. {
            return 1. / self.exp_range_reduce(-x);
        }
        self.exp_range_reduce(x)
    }

    /// Solves e^y = x for y with the fixed-point iteration
    /// y <- y + 2 (x - e^y) / (x + e^y), seeded with y = x - 1.
    fn log_iterate(&self, x: f64) -> f64 {
        let mut y = x - 1.;
        let mut prev = f64::NAN;
        for _ in 0..=self.limit() {
            if self.converged(prev, y) {
                break;
            }
            prev = y;
            let ey = self.exp(y);
            y += 2. * (x - ey) / (x + ey);
        }
        y
    }

    /// Computes the logarithm of a positive (or NaN) 'x'.
    /// Reduces the range with the identity:
    /// log(x) = log(x / 100^k) + k * log(100)
    pub(crate) fn ln(&self, x: f64) -> f64 {
        if x.is_nan() || x == f64::INFINITY {
            return x;
        }
        debug_assert!(x > 0.);

        let mut y = x;
        let mut count = 0.;
        while y >= LOG_REDUCTION {
            y /= LOG_REDUCTION;
            count += 1.;
        }
        while y < 1. {
            y *= LOG_REDUCTION;
            count -= 1.;
        }

        let reduced = self.log_iterate(y);
        if count == 0. {
            return reduced;
        }
        count * self.log_iterate(LOG_REDUCTION) + reduced
    }

    /// Computes the natural logarithm of 'x'.
    pub fn log(&self, x: f64) -> MathResult {
        if x <= 0. {
            return Err(DomainError::NonPositiveLogarithm(x));
        }
        Ok(self.ln(x))
    }

    /// Computes the base-2 logarithm of 'x'.
    pub fn log2(&self, x: f64) -> MathResult {
        Ok(self.log(x)? / self.ln(2.))
    }

    /// Computes the base-10 logarithm of 'x'.
    pub fn log10(&self, x: f64) -> MathResult {
        Ok(self.log(x)? / self.ln(10.))
    }
}

/// Computes `e^x`.
pub fn exp(x: f64) -> f64 {
    Precision::DEFAULT.exp(x)
}

/// Computes the natural logarithm of `x`.
pub fn log(x: f64) -> MathResult {
    Precision::DEFAULT.log(x)
}

/// Computes the base-2 logarithm of `x`.
pub fn log2(x: f64) -> MathResult {
    Precision::DEFAULT.log2(x)
}

/// Computes the base-10 logarithm of `x`.
pub fn log10(x: f64) -> MathResult {
    Precision::DEFAULT.log10(x)
}

#[cfg(feature = "std")]
#[test]
fn test_exp() {
    assert_eq!(exp(0.), 1.);
    assert!((exp(1.) - std::f64::consts::E).abs() < 1e-14);

    for x in [
        0.000003, 0.001, 0.12, 0.13, 0.5, 1.2, 2.3, 4.5, 9.8, 5.0, 11.2, 15.2,
        25.0, 34.001, 54., 89.1, 91.2, 102.2, 150., 192.4, 212., 256., 700.,
    ] {
        for v in [x, -x] {
            let lhs = exp(v);
            let rhs = v.exp();
            assert!((lhs / rhs - 1.).abs() < 1e-11, "exp({}) = {}", v, lhs);
        }
    }
}

#[test]
fn test_exp_special_values() {
    assert!(exp(f64::NAN).is_nan());
    assert_eq!(exp(f64::INFINITY), f64::INFINITY);
    assert_eq!(exp(f64::NEG_INFINITY), 0.);
    assert_eq!(exp(800.), f64::INFINITY);
    assert_eq!(exp(-800.), 0.);
}

#[cfg(feature = "std")]
#[test]
fn test_exp_subnormal_results() {
    // Between the overflow bound and the underflow bound e^x is subnormal
    // and must not collapse to zero.
    let ulp = f64::from_bits(1);
    for x in [-709.79, -709.9, -715.5, -720., -730.25, -740., -745.] {
        let lhs = exp(x);
        let rhs = x.exp();
        assert!(lhs > 0., "exp({}) = {}", x, lhs);
        assert!((lhs - rhs).abs() <= 1e-11 * rhs + 4. * ulp, "exp({})", x);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_log() {
    for x in [
        1e-300, 1e-5, 0.1, 0.5, 1., 2.3, 4.5, 9.8, 11.2, 15.2, 91.2, 100.,
        102.2, 192.4, 1024.2, 90210.2, 1e300,
    ] {
        let lhs = log(x).unwrap();
        let rhs = x.ln();
        assert!((lhs - rhs).abs() < 1e-12 * rhs.abs().max(1.), "log({})", x);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_log_bases() {
    assert!((log2(1024.).unwrap() - 10.).abs() < 1e-12);
    assert!((log10(1000000.).unwrap() - 6.).abs() < 1e-12);
    assert!((log10(1. / 1000.).unwrap() + 3.).abs() < 1e-12);
    assert_eq!(log(1.), Ok(0.));
}

#[test]
fn test_log_domain() {
    assert_eq!(log(0.), Err(DomainError::NonPositiveLogarithm(0.)));
    assert_eq!(log(-2.), Err(DomainError::NonPositiveLogarithm(-2.)));
    assert!(log2(-1.).is_err());
    assert!(log10(0.).is_err());
    assert!(log(f64::NAN).unwrap().is_nan());
    assert_eq!(log(f64::INFINITY), Ok(f64::INFINITY));
}

#[cfg(feature = "std")]
#[test]
fn test_coarse_precision() {
    // A short series still lands close to the true value for small inputs.
    let p = Precision::DEFAULT.with_limit(12);
    assert!((p.exp(0.5) - 0.5f64.exp()).abs() < 1e-9);
    let p = Precision::DEFAULT.with_tolerance(1e-6);
    assert!((p.exp(1.) - std::f64::consts::E).abs() < 1e-5);
}
