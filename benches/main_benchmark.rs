use seriesmath::{fmod, Precision};

fn test_exp_log() {
    let p = Precision::DEFAULT;
    for i in 1..100 {
        let x = i as f64 / 7.;
        black_box(p.exp(x));
        black_box(p.log(x).ok());
    }
}

fn test_sin_cos() {
    let p = Precision::DEFAULT;
    for i in 0..100 {
        let a = p.sin(i as f64);
        let b = p.cos(i as f64);
        black_box(a + b);
    }
}

fn test_inverse_trig() {
    let p = Precision::DEFAULT;
    for i in -50..50 {
        let x = i as f64 / 50.;
        black_box(p.asin(x).ok());
        black_box(p.atan(x * 10.));
    }
}

fn test_hyperbolic() {
    let p = Precision::DEFAULT;
    for i in -50..50 {
        black_box(p.tanh(i as f64 / 3.));
    }
}

fn test_pi_uncached() {
    // A non-default precision bypasses the cached constant.
    let p = Precision::DEFAULT.with_tolerance(1e-300);
    black_box(p.pi());
    black_box(p.e());
}

fn test_fmod_wide() {
    // The cost grows with the log of the quotient.
    black_box(fmod(1e300, 3e-300).ok());
    black_box(fmod(1e19, 3.).ok());
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_exp_log", |b| b.iter(test_exp_log));
    c.bench_function("test_sin_cos", |b| b.iter(test_sin_cos));
    c.bench_function("test_inverse_trig", |b| b.iter(test_inverse_trig));
    c.bench_function("test_hyperbolic", |b| b.iter(test_hyperbolic));
    c.bench_function("test_pi_uncached", |b| b.iter(test_pi_uncached));
    c.bench_function("test_fmod_wide", |b| b.iter(test_fmod_wide));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
