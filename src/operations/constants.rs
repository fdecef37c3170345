//! This module contains the implementation of methods that compute mathematical
//! constants.
//!
use crate::Precision;

impl Precision {
    /// Computes e = 1/0! + 1/1! + 1/2! + 1/3! ...
    fn e_series(&self) -> f64 {
        let mut term = 1.;
        let mut sum = 0.;
        let mut prev = f64::NAN;
        for n in 0..self.limit() {
            if self.converged(prev, sum) {
                break;
            }
            prev = sum;
            sum += term;
            term /= (n + 1) as f64;
        }
        sum
    }

    /// Computes pi with Euler's arctangent formula:
    /// pi = 4 * (5 * atan(1/7) + 2 * atan(3/79)).
    /// Both arguments are small, so the plain atan series converges quickly
    /// and pi is not needed to evaluate it.
    fn pi_series(&self) -> f64 {
        4. * (5. * self.atan_taylor(1. / 7.) + 2. * self.atan_taylor(3. / 79.))
    }

    /// Returns e, the base of the natural logarithm.
    pub fn e(&self) -> f64 {
        if *self == Self::DEFAULT {
            return e();
        }
        self.e_series()
    }

    /// Returns pi.
    pub fn pi(&self) -> f64 {
        if *self == Self::DEFAULT {
            return pi();
        }
        self.pi_series()
    }
}

/// Returns e, the base of the natural logarithm. The value is computed on the
/// first call and reused afterwards.
#[cfg(feature = "std")]
pub fn e() -> f64 {
    use std::sync::OnceLock;
    static E: OnceLock<f64> = OnceLock::new();
    *E.get_or_init(|| Precision::DEFAULT.e_series())
}

/// Returns e, the base of the natural logarithm.
#[cfg(not(feature = "std"))]
pub fn e() -> f64 {
    Precision::DEFAULT.e_series()
}

/// Returns pi. The value is computed on the first call and reused afterwards.
#[cfg(feature = "std")]
pub fn pi() -> f64 {
    use std::sync::OnceLock;
    static PI: OnceLock<f64> = OnceLock::new();
    *PI.get_or_init(|| Precision::DEFAULT.pi_series())
}

/// Returns pi.
#[cfg(not(feature = "std"))]
pub fn pi() -> f64 {
    Precision::DEFAULT.pi_series()
}

#[cfg(feature = "std")]
#[test]
fn test_pi() {
    assert!((pi() - std::f64::consts::PI).abs() < 1e-15);
    assert!((pi() - 3.141592653).abs() < 1e-9);
    // The cached and the freshly computed values agree.
    assert_eq!(pi(), Precision::DEFAULT.pi_series());
    assert_eq!(pi(), Precision::DEFAULT.pi());
}

#[cfg(feature = "std")]
#[test]
fn test_e() {
    assert!((e() - std::f64::consts::E).abs() < 1e-15);
    assert!((e() - 2.718281828).abs() < 1e-9);
    assert_eq!(e(), Precision::DEFAULT.e_series());
    assert_eq!(e(), Precision::DEFAULT.e());
}

#[cfg(feature = "std")]
#[test]
fn test_constants_with_short_series() {
    let p = Precision::DEFAULT.with_limit(5);
    // 1 + 1 + 1/2 + 1/6 + 1/24
    assert!((p.e() - 65. / 24.).abs() < 1e-15);
    let p = Precision::DEFAULT.with_limit(12);
    assert!((p.pi() - std::f64::consts::PI).abs() < 1e-9);
}

#[cfg(feature = "std")]
#[test]
fn test_constants_across_threads() {
    let handles: std::vec::Vec<_> =
        (0..4).map(|_| std::thread::spawn(|| (pi(), e()))).collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), (pi(), e()));
    }
}
