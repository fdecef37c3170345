//! This module contains the hyperbolic functions. Unlike the circular
//! functions they are not periodic, so the argument is reduced by halving
//! instead of by a modulo.

use crate::error::{DomainError, MathResult};
use crate::operations::arith::{abs, sign};
use crate::operations::trig::{COS, SIN};
use crate::Precision;

// Past this magnitude cosh and sinh overflow.
const HYPERBOLIC_OVERFLOW: f64 = 711.;

// tanh(x) rounds to +-1 for |x| beyond this value.
const TANH_SATURATION: f64 = 20.;

// atanh is evaluated with its series up to this magnitude.
const ATANH_SERIES_BOUND: f64 = 0.5;

impl Precision {
    /// sinh(x) = x + x^3 / 3! + x^5 / 5! + x^7/7! ....
    /// cosh(x) = 1 + x^2 / 2! + x^4 / 4! + x^6/6! ....
    fn sinh_cosh_taylor(&self, x: f64, parity: usize) -> f64 {
        let x2 = x * x;
        let mut n = parity;
        let mut term = if parity == SIN { x } else { 1. };
        let mut sum = 0.;
        let mut prev = f64::NAN;
        while n < self.limit() {
            if self.converged(prev, sum) {
                break; // Stop if we are not making progress.
            }
            prev = sum;
            sum += term;
            term = term * x2 / ((n + 1) * (n + 2)) as f64;
            n += 2;
        }
        sum
    }

    /// Returns (sinh(x), cosh(x)), reducing 'x' into [-1, 1] using the
    /// identities:
    /// sinh(2x) = 2 sinh(x) cosh(x)
    /// cosh(2x) = 2 cosh(x)^2 - 1
    fn sinh_cosh_step_reduction(&self, x: f64) -> (f64, f64) {
        if abs(x) > 1. {
            let (s, c) = self.sinh_cosh_step_reduction(x / 2.);
            return (2. * s * c, 2. * c * c - 1.);
        }
        (
            self.sinh_cosh_taylor(x, SIN),
            self.sinh_cosh_taylor(x, COS),
        )
    }

    /// Returns (sinh(x), cosh(x)), handling the special values.
    fn sinh_cosh(&self, x: f64) -> (f64, f64) {
        if x.is_nan() {
            return (x, x);
        }
        if abs(x) > HYPERBOLIC_OVERFLOW {
            return (sign(x) * f64::INFINITY, f64::INFINITY);
        }
        self.sinh_cosh_step_reduction(x)
    }

    /// Computes the hyperbolic sine of 'x'.
    pub fn sinh(&self, x: f64) -> f64 {
        self.sinh_cosh(x).0
    }

    /// Computes the hyperbolic cosine of 'x'.
    pub fn cosh(&self, x: f64) -> f64 {
        self.sinh_cosh(x).1
    }

    /// Computes the hyperbolic tangent of 'x'.
    pub fn tanh(&self, x: f64) -> f64 {
        if abs(x) >= TANH_SATURATION {
            return sign(x);
        }
        let (s, c) = self.sinh_cosh(x);
        s / c
    }

    /// atanh(x) = x + x^3/3 + x^5/5 + x^7/7 ...
    fn atanh_taylor(&self, x: f64) -> f64 {
        let x2 = x * x;
        let mut top = x;
        let mut sum = 0.;
        let mut prev = f64::NAN;
        let mut n = 1;
        while n < self.limit() {
            if self.converged(prev, sum) {
                break;
            }
            prev = sum;
            sum += top / n as f64;
            top *= x2;
            n += 2;
        }
        sum
    }

    /// Computes the inverse hyperbolic tangent of 'x', which must be in
    /// (-1, 1).
    pub fn atanh(&self, x: f64) -> MathResult {
        if x.is_nan() {
            return Ok(x);
        }
        if abs(x) >= 1. {
            return Err(DomainError::OutOfRange {
                function: "atanh",
                value: x,
            });
        }
        if abs(x) <= ATANH_SERIES_BOUND {
            return Ok(self.atanh_taylor(x));
        }
        // atanh(x) = log((1 + x) / (1 - x)) / 2
        Ok(self.ln((1. + x) / (1. - x)) / 2.)
    }
}

/// Computes the hyperbolic sine of `x`.
pub fn sinh(x: f64) -> f64 {
    Precision::DEFAULT.sinh(x)
}

/// Computes the hyperbolic cosine of `x`.
pub fn cosh(x: f64) -> f64 {
    Precision::DEFAULT.cosh(x)
}

/// Computes the hyperbolic tangent of `x`.
pub fn tanh(x: f64) -> f64 {
    Precision::DEFAULT.tanh(x)
}

/// Computes the inverse hyperbolic tangent of `x`.
pub fn atanh(x: f64) -> MathResult {
    Precision::DEFAULT.atanh(x)
}

#[cfg(feature = "std")]
#[test]
fn test_sinh_cosh() {
    for i in -200..200 {
        let x = i as f64 / 10.;
        let s = sinh(x);
        let c = cosh(x);
        assert!((s - x.sinh()).abs() < 1e-12 * x.cosh(), "sinh({})", x);
        assert!((c / x.cosh() - 1.).abs() < 1e-12, "cosh({})", x);
    }
    assert!((cosh(0.25) - 1.0314130998795732).abs() < 1e-15);
    assert!((sinh(1.5) - 2.1292794550948173).abs() < 1e-14);
}

#[cfg(feature = "std")]
#[test]
fn test_cosh_is_not_periodic() {
    // A modulo-2pi reduction would map cosh(2pi) onto cosh(0) = 1.
    let pi2 = 2. * std::f64::consts::PI;
    let c = cosh(pi2);
    assert!((c / pi2.cosh() - 1.).abs() < 1e-12);
    assert!((c - 267.7467614837482).abs() < 1e-9);
    assert!(c > 1.);
    assert!((sinh(pi2) / pi2.sinh() - 1.).abs() < 1e-12);
}

#[test]
fn test_hyperbolic_special_values() {
    assert_eq!(cosh(0.), 1.);
    assert_eq!(sinh(0.), 0.);
    assert_eq!(tanh(0.), 0.);
    assert_eq!(cosh(1000.), f64::INFINITY);
    assert_eq!(sinh(-1000.), f64::NEG_INFINITY);
    assert_eq!(tanh(1000.), 1.);
    assert_eq!(tanh(-1000.), -1.);
    assert!(cosh(f64::NAN).is_nan());
    assert!(tanh(f64::NAN).is_nan());
}

#[cfg(feature = "std")]
#[test]
fn test_tanh_atanh() {
    for i in -100..100 {
        let x = i as f64 / 8.;
        assert!((tanh(x) - x.tanh()).abs() < 1e-13, "tanh({})", x);
    }
    for i in -99..100 {
        let x = i as f64 / 100.;
        let lhs = atanh(x).unwrap();
        assert!((lhs - x.atanh()).abs() < 1e-13, "atanh({})", x);
    }
    let y = tanh(4. / 3.);
    assert!((atanh(y).unwrap() - 4. / 3.).abs() < 1e-12);
}

#[test]
fn test_atanh_domain() {
    assert_eq!(
        atanh(1.),
        Err(DomainError::OutOfRange {
            function: "atanh",
            value: 1.
        })
    );
    assert!(atanh(-2.).is_err());
    assert!(atanh(f64::NAN).unwrap().is_nan());
}
