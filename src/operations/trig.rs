use crate::error::{DomainError, MathResult};
use crate::operations::arith::{abs, fmod, sign, square};
use crate::Precision;

// Parity of the first power in the shared sine/cosine series.
pub(crate) const COS: usize = 0;
pub(crate) const SIN: usize = 1;

// Below these magnitudes asin and atan are evaluated with their series
// directly. Above them the series converges too slowly.
const ASIN_SERIES_BOUND: f64 = 0.5;
const ATAN_SERIES_BOUND: f64 = 0.5;

impl Precision {
    /// sin(x) = x - x^3 / 3! + x^5 / 5! - x^7/7! ....
    /// cos(x) = 1 - x^2 / 2! + x^4 / 4! - x^6/6! ....
    /// The 'parity' selects the first power (SIN or COS).
    fn sin_cos_taylor(&self, x: f64, parity: usize) -> f64 {
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

            // Prepare the next element, flipping the sign.
            term = -term * x2 / ((n + 1) * (n + 2)) as f64;
            n += 2;
        }
        sum
    }

    /// Reduce the angle 'x' into [-pi, pi] via fmod(x, 2pi). Returns NaN for
    /// infinite angles.
    fn reduce_angle(&self, x: f64) -> f64 {
        let pi = self.pi();
        let pi2 = 2. * pi;
        let mut val = match fmod(x, pi2) {
            Ok(val) => val,
            Err(_) => return f64::NAN,
        };
        if val > pi {
            val -= pi2;
        } else if val < -pi {
            val += pi2;
        }
        val
    }

    /// Computes the sine of the number (in radians).
    pub fn sin(&self, x: f64) -> f64 {
        self.sin_cos_taylor(self.reduce_angle(x), SIN)
    }

    /// Computes the cosine of the number (in radians).
    pub fn cos(&self, x: f64) -> f64 {
        self.sin_cos_taylor(self.reduce_angle(x), COS)
    }

    /// Computes the tangent of the number (in radians). Diverges near odd
    /// multiples of pi/2.
    pub fn tan(&self, x: f64) -> f64 {
        let val = self.reduce_angle(x);
        self.sin_cos_taylor(val, SIN) / self.sin_cos_taylor(val, COS)
    }

    /// asin(x) = sum (2n)! / (4^n (n!)^2 (2n+1)) * x^(2n+1).
    fn asin_taylor(&self, x: f64) -> f64 {
        let x2 = x * x;
        let mut coef = 1.; // (2n)! / (4^n (n!)^2)
        let mut top = x;
        let mut sum = 0.;
        let mut prev = f64::NAN;
        let mut n = 1;
        while n < self.limit() {
            if self.converged(prev, sum) {
                break;
            }
            prev = sum;
            sum += coef * top / n as f64;

            coef = coef * n as f64 / (n + 1) as f64;
            top *= x2;
            n += 2;
        }
        sum
    }

    /// Computes asin for |x| <= 1, reducing large arguments with:
    /// asin(x) = pi/2 - 2 * asin(sqrt((1 - x) / 2)).
    fn asin_unit(&self, x: f64) -> f64 {
        let ax = abs(x);
        if ax <= ASIN_SERIES_BOUND {
            return self.asin_taylor(x);
        }
        let half = self.pow((1. - ax) / 2., 0.5);
        sign(x) * (self.pi() / 2. - 2. * self.asin_taylor(half))
    }

    /// Computes the arc-sine of 'x', which must be in [-1, 1].
    pub fn asin(&self, x: f64) -> MathResult {
        if x.is_nan() {
            return Ok(x);
        }
        if abs(x) > 1. {
            return Err(DomainError::OutOfRange {
                function: "asin",
                value: x,
            });
        }
        if x == 1. || x == -1. {
            return Ok(x * self.pi() / 2.);
        }
        Ok(self.asin_unit(x))
    }

    /// Computes the arc-cosine of 'x', which must be in [-1, 1].
    pub fn acos(&self, x: f64) -> MathResult {
        match self.asin(x) {
            Ok(val) => Ok(self.pi() / 2. - val),
            Err(_) => Err(DomainError::OutOfRange {
                function: "acos",
                value: x,
            }),
        }
    }

    /// atan(x) = x - x^3/3 + x^5/5 - x^7/7 ...  for |x| < 1.
    pub(crate) fn atan_taylor(&self, x: f64) -> f64 {
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
            top = -top * x2;
            n += 2;
        }
        sum
    }

    /// Computes the arctangent of 'x'.
    pub fn atan(&self, x: f64) -> f64 {
        if x.is_nan() {
            return x;
        }
        if abs(x) < ATAN_SERIES_BOUND {
            return self.atan_taylor(x);
        }
        // cos(atan(x)) = 1/sqrt(1+x^2), so atan(x) = acos(1/sqrt(1+x^2)).
        let z = 1. / self.pow(1. + square(x), 0.5);
        sign(x) * (self.pi() / 2. - self.asin_unit(z))
    }

    /// Computes the arctangent of x/y, carrying the sign of 'x'.
    ///
    /// Only the sign of 'x' and the magnitude of the ratio are used, so the
    /// result is always in [-pi/2, pi/2] and the quadrants with a negative
    /// 'y' are folded onto the ones with a positive 'y'.
    pub fn atan2(&self, x: f64, y: f64) -> f64 {
        if y == 0. {
            return sign(x) * self.pi() / 2.;
        }
        sign(x) * self.atan(abs(x / y))
    }

    /// Converts degrees to radians.
    pub fn to_radians(&self, degrees: f64) -> f64 {
        degrees * self.pi() / 180.
    }

    /// Converts radians to degrees.
    pub fn to_degrees(&self, radians: f64) -> f64 {
        radians * 180. / self.pi()
    }
}

/// Computes the sine of `x` (in radians).
pub fn sin(x: f64) -> f64 {
    Precision::DEFAULT.sin(x)
}

/// Computes the cosine of `x` (in radians).
pub fn cos(x: f64) -> f64 {
    Precision::DEFAULT.cos(x)
}

/// Computes the tangent of `x` (in radians).
pub fn tan(x: f64) -> f64 {
    Precision::DEFAULT.tan(x)
}

/// Computes the arc-sine of `x`.
pub fn asin(x: f64) -> MathResult {
    Precision::DEFAULT.asin(x)
}

/// Computes the arc-cosine of `x`.
pub fn acos(x: f64) -> MathResult {
    Precision::DEFAULT.acos(x)
}

/// Computes the arctangent of `x`.
pub fn atan(x: f64) -> f64 {
    Precision::DEFAULT.atan(x)
}

/// Computes the arctangent of `x / y`, see [`Precision::atan2`].
pub fn atan2(x: f64, y: f64) -> f64 {
    Precision::DEFAULT.atan2(x, y)
}

/// Converts degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    Precision::DEFAULT.to_radians(degrees)
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    Precision::DEFAULT.to_degrees(radians)
}

#[cfg(feature = "std")]
#[test]
fn test_sin_known_value() {
    // Verify the results with:
    // from mpmath import mp
    // mp.dps = 1000
    // mp.sin(801./10000)
    assert!((sin(801. / 10000.) - 0.08001437374006335).abs() < 1e-15);
    assert!((sin(90210. / 10000.) - 0.3928952872542333).abs() < 1e-13);
    assert!((sin(95051.) + 0.8559198239971502).abs() < 1e-9);
}

#[cfg(feature = "std")]
#[test]
fn test_sin_cos() {
    for i in -100..100 {
        let f0 = i as f64;
        assert!((sin(f0) - f0.sin()).abs() < 1e-12, "sin({})", f0);
        assert!((cos(f0) - f0.cos()).abs() < 1e-12, "cos({})", f0);
    }

    for i in -300..300 {
        let f0 = (i as f64) / 100.;
        assert!((sin(f0) - f0.sin()).abs() < 1e-14, "sin({})", f0);
        assert!((cos(f0) - f0.cos()).abs() < 1e-14, "cos({})", f0);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_sin_cos_special_values() {
    use crate::utils;

    for v in utils::get_special_test_values() {
        if v.is_finite() {
            continue;
        }
        assert!(sin(v).is_nan());
        assert!(cos(v).is_nan());
    }
    assert_eq!(sin(0.), 0.);
    assert_eq!(cos(0.), 1.);
}

#[test]
fn test_pythagorean_identity() {
    use crate::utils::Lfsr;

    let mut lfsr = Lfsr::new();
    for _ in 0..500 {
        let x = lfsr.get_in_range(-1e4, 1e4);
        let (s, c) = (sin(x), cos(x));
        let one = s * s + c * c;
        assert!(one > 1. - 1e-12 && one < 1. + 1e-12, "x = {}", x);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_tan_known_value() {
    assert!((tan(801. / 10000.) - 0.08027174825588148).abs() < 1e-15);
    assert!((tan(2.3) + 1.1192136417341325).abs() < 1e-13);
    assert!((tan(90210. / 10000.) + 0.4272536513599634).abs() < 1e-13);
    let pi = std::f64::consts::PI;
    assert!((tan(3. / 4. * pi) + 1.).abs() < 1e-13);
}

#[cfg(feature = "std")]
#[test]
fn test_asin_acos() {
    let pi = std::f64::consts::PI;
    assert!((asin(1.).unwrap() - pi / 2.).abs() < 1e-15);
    assert!((asin(-1.).unwrap() + pi / 2.).abs() < 1e-15);
    assert_eq!(asin(0.), Ok(0.));

    for i in -100..=100 {
        let x = i as f64 / 100.;
        let a = asin(x).unwrap();
        assert!((a - x.asin()).abs() < 1e-14, "asin({})", x);
        let c = acos(x).unwrap();
        assert!((c - x.acos()).abs() < 1e-14, "acos({})", x);
    }
}

#[test]
fn test_asin_acos_domain() {
    assert_eq!(
        asin(1.5),
        Err(DomainError::OutOfRange {
            function: "asin",
            value: 1.5
        })
    );
    assert_eq!(
        acos(-1.01),
        Err(DomainError::OutOfRange {
            function: "acos",
            value: -1.01
        })
    );
    assert!(asin(f64::INFINITY).is_err());
    assert!(asin(f64::NAN).unwrap().is_nan());
}

#[cfg(feature = "std")]
#[test]
fn test_atan() {
    for i in -500..500 {
        let x = i as f64 / 37.;
        assert!((atan(x) - x.atan()).abs() < 1e-14, "atan({})", x);
    }
    let pi = std::f64::consts::PI;
    assert!((atan(f64::INFINITY) - pi / 2.).abs() < 1e-15);
    assert!((atan(-1e300) + pi / 2.).abs() < 1e-15);
    assert!((atan(-1.) + pi / 4.).abs() < 1e-14);
}

#[cfg(feature = "std")]
#[test]
fn test_atan2() {
    let pi = std::f64::consts::PI;
    let first = atan2(4., 3.);
    assert!((first - 0.9272952180016122).abs() < 1e-14);
    assert!((first - 4f64.atan2(3.)).abs() < 1e-14);
    assert!((atan2(1., 0.) - pi / 2.).abs() < 1e-15);
    assert!((atan2(-1., 0.) + pi / 2.).abs() < 1e-15);

    // Only the sign of 'x' is honoured: the second and third quadrants are
    // folded onto the first and fourth.
    assert_eq!(atan2(4., -3.), first);
    assert_eq!(atan2(-4., -3.), -first);
    assert!((atan2(4., -3.) - 4f64.atan2(-3.)).abs() > 1.);
}

#[cfg(feature = "std")]
#[test]
fn test_degrees() {
    let pi = std::f64::consts::PI;
    assert!((to_radians(180.) - pi).abs() < 1e-15);
    assert!((to_degrees(pi / 2.) - 90.).abs() < 1e-12);
    for d in [-720., -45.5, 0., 12.75, 90., 359.999, 1e6] {
        assert!((to_degrees(to_radians(d)) - d).abs() < 1e-9 * d.abs().max(1.));
    }
}
