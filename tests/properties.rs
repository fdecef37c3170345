use proptest::prelude::*;
use seriesmath::*;

fn close(lhs: f64, rhs: f64, rel: f64) -> bool {
    (lhs - rhs).abs() <= rel * rhs.abs().max(1.)
}

proptest! {
    #[test]
    fn floor_and_ceil_bracket(x in -1e9f64..1e9) {
        prop_assert!(floor(x) <= x);
        prop_assert!(x <= ceil(x));
        prop_assert!(ceil(x) - floor(x) <= 1.);
        prop_assert_eq!(int_part(x) + dec_part(x), x);
    }

    #[test]
    fn sign_times_abs(x in -1e300f64..1e300) {
        prop_assert_eq!(sign(x) * abs(x), x);
        prop_assert_eq!(neg(neg(x)), x);
    }

    #[test]
    fn round_is_nearest(x in -1e6f64..1e6) {
        let r = round(x);
        prop_assert!((r - x).abs() <= 0.5);
        prop_assert_eq!(r, x.round());
    }

    #[test]
    fn fmod_matches_remainder(x in -1e12f64..1e12, y in 1e-3f64..1e3, flip in any::<bool>()) {
        let y = if flip { -y } else { y };
        let r = fmod(x, y).unwrap();
        prop_assert_eq!(r, x % y);
        prop_assert!(r.abs() < y.abs());
        prop_assert!(r == 0. || (r < 0.) == (x < 0.));
    }

    #[test]
    fn exp_undoes_log(x in 1e-6f64..1e6) {
        let y = exp(log(x).unwrap());
        prop_assert!((y / x - 1.).abs() < 1e-11, "exp(log({})) = {}", x, y);
    }

    #[test]
    fn log_matches_std(x in 1e-200f64..1e200) {
        prop_assert!(close(log(x).unwrap(), x.ln(), 1e-12));
    }

    #[test]
    fn pow_with_integral_exponent(b in 0.5f64..4., n in 1i32..12) {
        let lhs = pow(b, n as f64);
        prop_assert!((lhs / b.powi(n) - 1.).abs() < 1e-12);
        prop_assert!((int_power(b, n as i64) / b.powi(n) - 1.).abs() < 1e-14);
    }

    #[test]
    fn odd_roots_of_negatives(x in 1e-3f64..1e6) {
        let r = ithrt(-x, 3).unwrap();
        prop_assert!(r < 0.);
        prop_assert!((r / -x.cbrt() - 1.).abs() < 1e-12);
        prop_assert!(ithrt(-x, 2).is_err());
        prop_assert!(sqrt(-x).is_err());
    }

    #[test]
    fn pythagorean_identity(x in -100f64..100.) {
        let s = sin(x);
        let c = cos(x);
        prop_assert!((s * s + c * c - 1.).abs() < 1e-12);
    }

    #[test]
    fn sin_cos_match_std(x in -1e3f64..1e3) {
        prop_assert!((sin(x) - x.sin()).abs() < 1e-12);
        prop_assert!((cos(x) - x.cos()).abs() < 1e-12);
    }

    #[test]
    fn inverse_trig_round_trip(x in -1f64..1.) {
        prop_assert!((sin(asin(x).unwrap()) - x).abs() < 1e-12);
        prop_assert!((cos(acos(x).unwrap()) - x).abs() < 1e-12);
        prop_assert!((tan(atan(x * 50.)) / (x * 50.) - 1.).abs() < 1e-9 || x == 0.);
    }

    #[test]
    fn degrees_round_trip(x in -1e4f64..1e4) {
        prop_assert!(close(to_radians(to_degrees(x)), x, 1e-13));
    }

    #[test]
    fn hyperbolic_identity(x in -10f64..10.) {
        let c = cosh(x);
        let s = sinh(x);
        prop_assert!(((c * c - s * s) - 1.).abs() < 1e-9 * c * c);
        prop_assert!((tanh(x) - x.tanh()).abs() < 1e-13);
    }
}

#[test]
fn constants() {
    assert!((pi() - std::f64::consts::PI).abs() < 1e-15);
    assert!((e() - std::f64::consts::E).abs() < 1e-15);
}

#[test]
fn factorial_facts() {
    assert_eq!(factorial(0), 1.);
    assert_eq!(factorial(5), 120.);
    assert_eq!(factorial(-3), 0.);
    assert!(factorial(171).is_infinite());
    assert!((factorial(120) / 6.689502913449127e198 - 1.).abs() < 1e-12);
}

#[test]
fn atan2_carries_only_the_sign_of_x() {
    let a = atan2(4., 3.);
    assert!((a - 4f64.atan2(3.)).abs() < 1e-14);
    // The third quadrant folds onto the fourth.
    assert!((atan2(-1., -1.) + pi() / 4.).abs() < 1e-14);
    assert!((atan2(1., -1.) - pi() / 4.).abs() < 1e-14);
}

#[test]
fn cosh_of_full_turn() {
    let x = 2. * pi();
    assert!((cosh(x) / x.cosh() - 1.).abs() < 1e-12);
}

#[test]
fn precision_changes_results() {
    let coarse = Precision::DEFAULT.with_limit(4);
    // 1 + 1 + 1/2 + 1/6
    assert!((coarse.exp(1.) - 8. / 3.).abs() < 1e-15);
    assert_ne!(coarse.pi(), pi());
    let loose = Precision::DEFAULT.with_tolerance(1e-6);
    assert!((loose.sin(1.) - 1f64.sin()).abs() < 1e-5);
}
