//! This module contains the implementation of powers and roots.

use crate::error::{DomainError, MathResult};
use crate::operations::arith::{abs, int_part, sign, square};
use crate::operations::combinatorics::int_power;
use crate::Precision;

impl Precision {
    /// Return 'base' raised to the power of 'exponent'.
    /// Computed using e^(exponent * log(base)).
    ///
    /// A negative base or a negative exponent truncates the exponent to an
    /// integer and falls back to repeated multiplication, so only integral
    /// exponents are exact in that regime. A zero base always returns 0.
    pub fn pow(&self, base: f64, exponent: f64) -> f64 {
        if exponent == 1. {
            return base;
        } else if base == 0. {
            return 0.;
        } else if exponent == 0. {
            return 1.;
        } else if base < 0. || exponent < 0. {
            return int_power(base, int_part(exponent) as i64);
        }
        self.exp(self.ln(base) * exponent)
    }

    /// Computes the square root of 'x'.
    pub fn sqrt(&self, x: f64) -> MathResult {
        if x < 0. {
            return Err(DomainError::NegativeRadicand { value: x, index: 2 });
        }
        Ok(self.pow(x, 0.5))
    }

    /// Computes the cube root of 'x', which is defined for negative values.
    pub fn curt(&self, x: f64) -> f64 {
        sign(x) * self.pow(abs(x), 1. / 3.)
    }

    /// Computes the root of 'x' with the radical index 'index'. Negative
    /// values only have real roots for odd indices.
    pub fn ithrt(&self, x: f64, index: u32) -> MathResult {
        if index == 0 {
            return Err(DomainError::ZeroRootIndex);
        }
        if index % 2 == 0 && x < 0. {
            return Err(DomainError::NegativeRadicand { value: x, index });
        }
        Ok(sign(x) * self.pow(abs(x), 1. / index as f64))
    }

    /// Computes sqrt(x^2 + y^2), the length of the vector (x, y).
    pub fn hypot(&self, x: f64, y: f64) -> f64 {
        // The sum of squares is never negative, so this is always defined.
        self.pow(square(x) + square(y), 0.5)
    }
}

/// Computes `base` raised to the power of `exponent`.
pub fn pow(base: f64, exponent: f64) -> f64 {
    Precision::DEFAULT.pow(base, exponent)
}

/// Computes the square root of `x`.
pub fn sqrt(x: f64) -> MathResult {
    Precision::DEFAULT.sqrt(x)
}

/// Computes the cube root of `x`.
pub fn curt(x: f64) -> f64 {
    Precision::DEFAULT.curt(x)
}

/// Computes the root of `x` with the radical index `index`.
pub fn ithrt(x: f64, index: u32) -> MathResult {
    Precision::DEFAULT.ithrt(x, index)
}

/// Computes `sqrt(x^2 + y^2)`.
pub fn hypot(x: f64, y: f64) -> f64 {
    Precision::DEFAULT.hypot(x, y)
}

#[cfg(feature = "std")]
#[test]
fn test_pow() {
    assert!((pow(2., 10.) - 1024.).abs() < 1e-9);
    assert_eq!(pow(2., 1.), 2.);
    assert_eq!(pow(0., 5.), 0.);
    assert_eq!(pow(3.5, 0.), 1.);
    assert_eq!(pow(-3.5, 0.), 1.);
    assert!((pow(2., 3.) - 8.).abs() < 1e-12);
    assert_eq!(pow(-2., -2.), 0.25);
    assert_eq!(pow(-2., 3.), -8.);

    for (b, e) in [(1.24, 1.2), (0.94, 13.), (40.0, 3.1), (2., 0.5), (9., 1.5)] {
        let lhs = pow(b, e);
        let rhs = b.powf(e);
        assert!((lhs / rhs - 1.).abs() < 1e-12, "pow({}, {})", b, e);
    }
}

#[test]
fn test_pow_truncates_in_integer_regime() {
    // A negative base only honours the integral part of the exponent.
    assert_eq!(pow(-2., 2.9), 4.);
    // So does a negative exponent.
    assert_eq!(pow(4., -0.5), 1.);
    assert_eq!(pow(4., -1.), 0.25);
}

#[cfg(feature = "std")]
#[test]
fn test_sqrt() {
    for i in 0..256 {
        let v = (i * i) as f64;
        assert!((sqrt(v).unwrap() - i as f64).abs() < 1e-10);
    }

    fn check(inp: f64, res: f64) {
        assert!((sqrt(inp).unwrap() / res - 1.).abs() < 1e-12);
    }
    check(1.5, 1.224744871391589);
    check(2.3, 1.51657508881031);
    check(1049.3, 32.39290045673589);
    check(90210.7, 300.35096137685326);
    check(199120056003.73413, 446228.70369770494);
    check(0.0009530162965786716, 0.030870962028719993);
    check(5.0120298432056786e-8, 0.0002238756316173263);
}

#[test]
fn test_root_domain() {
    assert_eq!(
        sqrt(-1.),
        Err(DomainError::NegativeRadicand {
            value: -1.,
            index: 2
        })
    );
    assert_eq!(
        ithrt(-8., 2),
        Err(DomainError::NegativeRadicand {
            value: -8.,
            index: 2
        })
    );
    assert_eq!(ithrt(8., 0), Err(DomainError::ZeroRootIndex));
    assert_eq!(sqrt(0.), Ok(0.));
    assert_eq!(ithrt(-5., 1), Ok(-5.));
}

#[cfg(feature = "std")]
#[test]
fn test_roots() {
    assert!((ithrt(-8., 3).unwrap() + 2.).abs() < 1e-12);
    assert!((curt(125.) - 5.).abs() < 1e-12);
    assert!((curt(-27.) + 3.).abs() < 1e-12);
    assert!((ithrt(2., 12).unwrap() - 2f64.powf(1. / 12.)).abs() < 1e-14);
    assert!((ithrt(81., 4).unwrap() - 3.).abs() < 1e-12);
}

#[cfg(feature = "std")]
#[test]
fn test_hypot() {
    assert!((hypot(3., 4.) - 5.).abs() < 1e-12);
    assert!((hypot(-5., 12.) - 13.).abs() < 1e-12);
    assert_eq!(hypot(0., 0.), 0.);
}
