//! Prints sample values of every function family.
//!  cargo run --example showcase

use seriesmath::*;

fn main() -> Result<(), DomainError> {
    println!("FUNDAMENTAL CONSTANTS:");
    println!("e = {:.10}", e());
    println!("pi = {:.10}", pi());
    println!();

    println!("GENERAL PURPOSE FUNCTIONS:");
    println!("integer part of 32.75 = {:.2}", int_part(32.75));
    println!("decimal part of 32.75 = {:.2}", dec_part(32.75));
    println!("abs(-12.57) = {:.2}", abs(-12.57));
    println!("fmod(3*pi, 2*pi) = {:.6}", fmod(3. * pi(), 2. * pi())?);
    println!("sign(-12.57) = {:.1}", sign(-12.57));
    println!("neg(-12.57) = {:.2}", neg(-12.57));
    println!("ceil(2.6) = {:.2}", ceil(2.6));
    println!("floor(2.6) = {:.2}", floor(2.6));
    println!("round(2.6) = {:.2}", round(2.6));
    println!("max(6, 3) = {:.1}", max(6., 3.));
    println!("min(6, 3) = {:.1}", min(6., 3.));
    println!("square(3) = {:.1}", square(3.));
    println!("hypot(3, 4) = {:.1}", hypot(3., 4.));
    println!("factorial(120) = {:E}", factorial(120));
    println!();

    println!("ANALYTIC FUNCTIONS:");
    println!("exp(0) = {:.1}", exp(0.));
    println!("exp(1) = {:.10}", exp(1.));
    println!("log(1) = {:.1}", log(1.)?);
    println!("log2(1024) = {:.1}", log2(1024.)?);
    println!("log10(1000000) = {:.1}", log10(1000000.)?);
    println!("log10(1/1000) = {:.1}", log10(1. / 1000.)?);
    println!("2.0^1.0 = {:.1}", pow(2., 1.));
    println!("2.0^3.0 = {:.1}", pow(2., 3.));
    println!("-2.0^-2.0 = {:.2}", pow(-2., -2.));
    println!("sqrt(2.0) = {:.6}", sqrt(2.)?);
    println!("curt(125) = {:.1}", curt(125.));
    println!("12th root of 2.0 = {:.6}", ithrt(2., 12)?);
    match sqrt(-1.) {
        Ok(v) => println!("sqrt(-1) = {}", v),
        Err(err) => println!("sqrt(-1): {}", err),
    }
    println!();

    println!("TRIGONOMETRIC FUNCTIONS:");
    let x = 3. / 4. * pi();
    let z = sin(x);
    println!("sin(3/4*pi) = {:.6}", z);
    let y = asin(z)?;
    println!("asin({:.6}) = {:.6} radians, {:.2} degrees.", z, y, to_degrees(y));
    let z = cos(pi() / 8.);
    println!("cos(pi/8) = {:.6}", z);
    let y = acos(z)?;
    println!("acos({:.6}) = {:.6} radians, {:.2} degrees.", z, y, to_degrees(y));
    let z = tan(x);
    println!("tan(3/4*pi) = {:.1}", z);
    let y = atan(z);
    println!("atan({:.1}) = {:.6} radians, {:.2} degrees.", z, y, to_degrees(y));
    let y = atan2(4., 3.);
    println!("atan2(4, 3) = {:.6} radians, {:.2} degrees.", y, to_degrees(y));
    println!();

    println!("HYPERBOLIC FUNCTIONS:");
    println!("cosh(1/4) = {:.6}", cosh(1. / 4.));
    println!("sinh(3/2) = {:.6}", sinh(3. / 2.));
    let y = tanh(4. / 3.);
    println!("tanh(4/3) = {:.6}", y);
    println!("atanh({:.6}) = {:.6}", y, atanh(y)?);
    println!();

    println!("CUSTOM PRECISION:");
    let coarse = Precision::DEFAULT.with_limit(8);
    println!("exp(1) with 8 terms = {:.10}", coarse.exp(1.));
    println!("pi with 8 terms = {:.10}", coarse.pi());

    println!();
    println!("bye.");
    Ok(())
}
