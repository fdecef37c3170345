//! This module contains the primitive arithmetic helpers: sign handling,
//! integer/fractional splitting, rounding, remainder and comparisons.

use crate::error::{DomainError, MathResult};

// Every f64 with a magnitude of at least 2^52 is an integer.
const EXACT_INTEGER_BOUND: f64 = 4503599627370496.;

/// Returns the absolute value of `x`.
pub fn abs(x: f64) -> f64 {
    if x < 0. {
        -x
    } else {
        x
    }
}

/// Returns `-x`.
pub fn neg(x: f64) -> f64 {
    -x
}

/// Returns -1.0 for negative numbers and 1.0 otherwise (zero included).
pub fn sign(x: f64) -> f64 {
    if x < 0. {
        -1.
    } else {
        1.
    }
}

/// Truncates `x` toward zero.
pub fn int_part(x: f64) -> f64 {
    // Large values, infinities and NaN are returned as-is so that the cast
    // below never saturates.
    if !(abs(x) < EXACT_INTEGER_BOUND) {
        return x;
    }
    (x as i64) as f64
}

/// Returns the fractional part of `x`, carrying the sign of `x`.
pub fn dec_part(x: f64) -> f64 {
    if x.is_infinite() {
        return 0.;
    }
    x - int_part(x)
}

/// Returns the smallest integer not less than `x`.
pub fn ceil(x: f64) -> f64 {
    let trunc = int_part(x);
    if dec_part(x) == 0. {
        return trunc;
    }
    if x < 0. {
        trunc
    } else {
        trunc + 1.
    }
}

/// Returns the largest integer not greater than `x`.
pub fn floor(x: f64) -> f64 {
    let trunc = int_part(x);
    if dec_part(x) == 0. {
        return trunc;
    }
    if x < 0. {
        trunc - 1.
    } else {
        trunc
    }
}

/// Rounds `x` to the nearest integer. Ties round away from zero.
pub fn round(x: f64) -> f64 {
    if x == 0. {
        return x;
    }
    let dec = abs(dec_part(x));
    if dec == 0. {
        return int_part(x);
    }
    match (x > 0., dec >= 0.5) {
        (true, true) | (false, false) => ceil(x),
        (true, false) | (false, true) => floor(x),
    }
}

/// Returns the remainder of `x / y`. The result has the sign of `x` and a
/// magnitude smaller than `|y|`, like C's `fmod`.
pub fn fmod(x: f64, y: f64) -> MathResult {
    if x.is_nan() || y.is_nan() {
        return Ok(f64::NAN);
    }
    if y == 0. {
        return Err(DomainError::DivisionByZero);
    }
    if x.is_infinite() {
        return Err(DomainError::OutOfRange {
            function: "fmod",
            value: x,
        });
    }
    if y.is_infinite() {
        return Ok(x);
    }

    let divisor = abs(y);
    let mut rem = abs(x);

    // Long division in base two. Find the largest power-of-two multiple of
    // the divisor that fits, then walk back down subtracting each multiple
    // that still fits. Every subtraction has both operands within a factor
    // of two, so it is exact.
    if rem >= divisor {
        let mut step = divisor;
        while step * 2. <= rem {
            step *= 2.;
        }
        while step >= divisor {
            if rem >= step {
                rem -= step;
            }
            step *= 0.5;
        }
    }

    Ok(if x < 0. { -rem } else { rem })
}

/// Returns the greater of `x` and `y`.
pub fn max(x: f64, y: f64) -> f64 {
    if x < y {
        y
    } else {
        x
    }
}

/// Returns the smaller of `x` and `y`.
pub fn min(x: f64, y: f64) -> f64 {
    if x <= y {
        x
    } else {
        y
    }
}

/// Returns `x * x`.
pub fn square(x: f64) -> f64 {
    x * x
}

#[test]
fn test_sign_abs() {
    assert_eq!(abs(-12.57), 12.57);
    assert_eq!(abs(3.), 3.);
    assert_eq!(neg(-12.57), 12.57);
    assert_eq!(sign(-12.75), -1.);
    assert_eq!(sign(0.), 1.);
    assert_eq!(sign(7.), 1.);
    for x in [-3.5, -1e-300, 2., 1e300] {
        assert_eq!(sign(x) * abs(x), x);
    }
}

#[test]
fn test_int_dec() {
    assert_eq!(int_part(32.75), 32.);
    assert_eq!(dec_part(32.75), 0.75);
    assert_eq!(int_part(-32.75), -32.);
    assert_eq!(dec_part(-32.75), -0.75);
    // Values beyond the i64 range are already integral.
    assert_eq!(int_part(1e300), 1e300);
    assert_eq!(dec_part(1e300), 0.);
    assert_eq!(int_part(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert_eq!(dec_part(f64::INFINITY), 0.);
    assert!(int_part(f64::NAN).is_nan());
}

#[test]
fn test_ceil_floor() {
    assert_eq!(ceil(2.6), 3.);
    assert_eq!(floor(2.6), 2.);
    assert_eq!(ceil(-2.6), -2.);
    assert_eq!(floor(-2.6), -3.);
    assert_eq!(ceil(4.), 4.);
    assert_eq!(floor(-4.), -4.);
    assert_eq!(ceil(0.25), 1.);
    assert_eq!(floor(-0.25), -1.);
}

#[test]
fn test_round() {
    assert_eq!(round(2.6), 3.);
    assert_eq!(round(2.4), 2.);
    assert_eq!(round(2.5), 3.);
    assert_eq!(round(-2.5), -3.);
    assert_eq!(round(-2.4), -2.);
    assert_eq!(round(-2.6), -3.);
    assert_eq!(round(7.), 7.);
    assert_eq!(round(0.), 0.);
}

#[test]
fn test_fmod_known_values() {
    assert_eq!(fmod(7., 2.), Ok(1.));
    assert_eq!(fmod(-7., 2.), Ok(-1.));
    // The sign follows the dividend, never the divisor.
    assert_eq!(fmod(7., -2.), Ok(1.));
    assert_eq!(fmod(-7., -2.), Ok(-1.));
    assert_eq!(fmod(1.5, 4.), Ok(1.5));
    assert_eq!(fmod(5., f64::INFINITY), Ok(5.));
    assert_eq!(fmod(1., 0.), Err(DomainError::DivisionByZero));
    assert!(fmod(f64::INFINITY, 1.).is_err());
    assert!(fmod(f64::NAN, 1.).unwrap().is_nan());
}

#[cfg(feature = "std")]
#[test]
fn test_fmod() {
    use crate::utils;
    use crate::utils::Lfsr;
    use core::ops::Rem;

    fn check_two_numbers(v0: f64, v1: f64) {
        if !v0.is_finite() || v1 == 0. {
            return;
        }
        let r0 = v0.rem(v1);
        let r1 = fmod(v0, v1).unwrap();
        assert_eq!(r0.is_nan(), r1.is_nan());
        if !r0.is_nan() {
            assert_eq!(r0, r1, "fmod({}, {})", v0, v1);
        }
    }

    check_two_numbers(1.4, 2.5);
    check_two_numbers(2.4, 1.5);
    check_two_numbers(1000., std::f64::consts::PI);
    check_two_numbers(10000000000000000000., std::f64::consts::PI / 1000.);
    check_two_numbers(100., -std::f64::consts::PI);
    check_two_numbers(-100., std::f64::consts::PI);
    check_two_numbers(0., 10.);
    check_two_numbers(1e300, 1e-300);

    let mut lfsr = Lfsr::new();
    for _ in 0..2000 {
        let v0 = f64::from_bits(lfsr.get64());
        let v1 = f64::from_bits(lfsr.get64());
        check_two_numbers(v0, v1);
    }

    for v0 in utils::get_special_test_values() {
        for v1 in utils::get_special_test_values() {
            check_two_numbers(v0, v1);
        }
    }
}

#[test]
fn test_min_max_square() {
    assert_eq!(max(6., 3.), 6.);
    assert_eq!(min(6., 3.), 3.);
    assert_eq!(max(-1., -2.), -1.);
    assert_eq!(min(-1., -2.), -2.);
    assert_eq!(square(3.), 9.);
    assert_eq!(square(-1.5), 2.25);
}
