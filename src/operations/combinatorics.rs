//! Factorials and integer powers.

/// Computes `n!` in floating point, so that large `n` loses exactness instead
/// of overflowing. Negative `n` returns 0, and anything past 170 is infinite.
pub fn factorial(n: i64) -> f64 {
    if n < 0 {
        return 0.;
    }
    let mut acc = 1.;
    for k in 2..=n {
        acc *= k as f64;
        if acc.is_infinite() {
            break;
        }
    }
    acc
}

/// Return `x` raised to the power of `n`. Negative powers are computed as the
/// reciprocal of the positive power.
pub fn int_power(x: f64, n: i64) -> f64 {
    let mut e = n.unsigned_abs();
    let mut elem = 1.;
    // Square-and-multiply: each set bit of 'n' contributes x^(2^k), and the
    // repeated squaring of 'val' generates those factors.
    let mut val = x;
    while e > 0 {
        if e & 1 == 1 {
            elem *= val;
        }
        val *= val;
        e >>= 1;
    }
    if n < 0 {
        1. / elem
    } else {
        elem
    }
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), 1.);
    assert_eq!(factorial(1), 1.);
    assert_eq!(factorial(5), 120.);
    assert_eq!(factorial(10), 3628800.);
    assert_eq!(factorial(-3), 0.);
    assert!(factorial(170).is_finite());
    assert!(factorial(171).is_infinite());
    // Terminates quickly even for absurd inputs.
    assert!(factorial(i64::MAX).is_infinite());
}

#[cfg(feature = "std")]
#[test]
fn test_factorial_large() {
    // 120! ~ 6.689502913449127E+198
    let f = factorial(120);
    assert!((f / 6.689502913449127e198 - 1.).abs() < 1e-13);
}

#[test]
fn test_int_power() {
    assert_eq!(int_power(2., 0), 1.);
    assert_eq!(int_power(2., 1), 2.);
    assert_eq!(int_power(2., 3), 8.);
    assert_eq!(int_power(2., 10), 1024.);
    assert_eq!(int_power(-2., 3), -8.);
    assert_eq!(int_power(-2., -2), 0.25);
    assert_eq!(int_power(2., -1), 0.5);
    assert_eq!(int_power(0., -1), f64::INFINITY);
    assert_eq!(int_power(1., i64::MIN), 1.);
}
