use crate::{DomainError, MathResult, Precision};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::format;
use std::string::{String, ToString};

impl From<DomainError> for PyErr {
    fn from(err: DomainError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Precision class controlling series evaluation.
///
/// This class encapsulates the term limit and the relative tolerance that
/// end the series expansions used by every function.
#[pyclass]
struct PyPrecision {
    inner: Precision,
}

#[pymethods]
impl PyPrecision {
    /// Create a new precision object.
    ///
    /// Args:
    ///     limit: The exclusive upper bound of the series term index
    ///     tolerance: The relative tolerance that ends a series early
    #[new]
    #[pyo3(signature = (limit=crate::SERIES_LIMIT, tolerance=0.0))]
    fn new(limit: usize, tolerance: f64) -> Self {
        PyPrecision {
            inner: Precision::new(limit, tolerance),
        }
    }
    /// Returns the series term limit.
    fn get_limit(&self) -> usize {
        self.inner.limit()
    }
    /// Returns the relative tolerance.
    fn get_tolerance(&self) -> f64 {
        self.inner.tolerance()
    }
    fn __str__(&self) -> String {
        format!("{:?}", self.inner)
    }
    fn __repr__(&self) -> String {
        self.__str__()
    }

    /// Returns e^x.
    fn exp(&self, x: f64) -> f64 {
        self.inner.exp(x)
    }
    /// Returns the natural logarithm of x.
    fn log(&self, x: f64) -> MathResult {
        self.inner.log(x)
    }
    /// Returns the base-2 logarithm of x.
    fn log2(&self, x: f64) -> MathResult {
        self.inner.log2(x)
    }
    /// Returns the base-10 logarithm of x.
    fn log10(&self, x: f64) -> MathResult {
        self.inner.log10(x)
    }
    /// Returns base raised to the power of exponent.
    fn pow(&self, base: f64, exponent: f64) -> f64 {
        self.inner.pow(base, exponent)
    }
    /// Returns the square root of x.
    fn sqrt(&self, x: f64) -> MathResult {
        self.inner.sqrt(x)
    }
    /// Returns the cube root of x.
    fn curt(&self, x: f64) -> f64 {
        self.inner.curt(x)
    }
    /// Returns the root of x with the given radical index.
    fn ithrt(&self, x: f64, index: u32) -> MathResult {
        self.inner.ithrt(x, index)
    }
    /// Returns sqrt(x^2 + y^2).
    fn hypot(&self, x: f64, y: f64) -> f64 {
        self.inner.hypot(x, y)
    }
    /// Returns the sine of x (in radians).
    fn sin(&self, x: f64) -> f64 {
        self.inner.sin(x)
    }
    /// Returns the cosine of x (in radians).
    fn cos(&self, x: f64) -> f64 {
        self.inner.cos(x)
    }
    /// Returns the tangent of x (in radians).
    fn tan(&self, x: f64) -> f64 {
        self.inner.tan(x)
    }
    /// Returns the arc-sine of x.
    fn asin(&self, x: f64) -> MathResult {
        self.inner.asin(x)
    }
    /// Returns the arc-cosine of x.
    fn acos(&self, x: f64) -> MathResult {
        self.inner.acos(x)
    }
    /// Returns the arctangent of x.
    fn atan(&self, x: f64) -> f64 {
        self.inner.atan(x)
    }
    /// Returns the arctangent of x/y, carrying the sign of x.
    fn atan2(&self, x: f64, y: f64) -> f64 {
        self.inner.atan2(x, y)
    }
    /// Returns the hyperbolic sine of x.
    fn sinh(&self, x: f64) -> f64 {
        self.inner.sinh(x)
    }
    /// Returns the hyperbolic cosine of x.
    fn cosh(&self, x: f64) -> f64 {
        self.inner.cosh(x)
    }
    /// Returns the hyperbolic tangent of x.
    fn tanh(&self, x: f64) -> f64 {
        self.inner.tanh(x)
    }
    /// Returns the inverse hyperbolic tangent of x.
    fn atanh(&self, x: f64) -> MathResult {
        self.inner.atanh(x)
    }
    /// Returns e, computed with this precision.
    fn e(&self) -> f64 {
        self.inner.e()
    }
    /// Returns pi, computed with this precision.
    fn pi(&self) -> f64 {
        self.inner.pi()
    }
} // impl PyPrecision

/// Returns the mathematical constant pi.
#[pyfunction]
fn pi() -> f64 {
    crate::pi()
}

/// Returns the mathematical constant e (Euler's number).
#[pyfunction]
fn e() -> f64 {
    crate::e()
}

/// Returns n! as a float. Negative n returns 0.
#[pyfunction]
fn factorial(n: i64) -> f64 {
    crate::factorial(n)
}

/// Returns x raised to the integer power n.
#[pyfunction]
fn int_power(x: f64, n: i64) -> f64 {
    crate::int_power(x, n)
}

/// Returns the remainder of x / y, carrying the sign of x.
///
/// Raises ValueError when y is zero.
#[pyfunction]
fn fmod(x: f64, y: f64) -> PyResult<f64> {
    Ok(crate::fmod(x, y)?)
}

/// Rounds x to the nearest integer, ties away from zero.
#[pyfunction]
fn round(x: f64) -> f64 {
    crate::round(x)
}

/// Returns the smallest integer not less than x.
#[pyfunction]
fn ceil(x: f64) -> f64 {
    crate::ceil(x)
}

/// Returns the largest integer not greater than x.
#[pyfunction]
fn floor(x: f64) -> f64 {
    crate::floor(x)
}

/// Converts degrees to radians.
#[pyfunction]
fn to_radians(degrees: f64) -> f64 {
    crate::to_radians(degrees)
}

/// Converts radians to degrees.
#[pyfunction]
fn to_degrees(radians: f64) -> f64 {
    crate::to_degrees(radians)
}

/// Returns the absolute value of x.
#[pyfunction]
fn abs(x: f64) -> f64 {
    crate::abs(x)
}

/// Returns -x.
#[pyfunction]
fn neg(x: f64) -> f64 {
    crate::neg(x)
}

/// Returns -1.0 for negative numbers and 1.0 otherwise.
#[pyfunction]
fn sign(x: f64) -> f64 {
    crate::sign(x)
}

/// Truncates x toward zero.
#[pyfunction]
fn int_part(x: f64) -> f64 {
    crate::int_part(x)
}

/// Returns the fractional part of x.
#[pyfunction]
fn dec_part(x: f64) -> f64 {
    crate::dec_part(x)
}

/// Returns x * x.
#[pyfunction]
fn square(x: f64) -> f64 {
    crate::square(x)
}

/// Returns e^x.
#[pyfunction]
fn exp(x: f64) -> f64 {
    crate::exp(x)
}

/// Returns the cube root of x.
#[pyfunction]
fn curt(x: f64) -> f64 {
    crate::curt(x)
}

/// Returns the sine of x (in radians).
#[pyfunction]
fn sin(x: f64) -> f64 {
    crate::sin(x)
}

/// Returns the cosine of x (in radians).
#[pyfunction]
fn cos(x: f64) -> f64 {
    crate::cos(x)
}

/// Returns the tangent of x (in radians).
#[pyfunction]
fn tan(x: f64) -> f64 {
    crate::tan(x)
}

/// Returns the arctangent of x.
#[pyfunction]
fn atan(x: f64) -> f64 {
    crate::atan(x)
}

/// Returns the hyperbolic sine of x.
#[pyfunction]
fn sinh(x: f64) -> f64 {
    crate::sinh(x)
}

/// Returns the hyperbolic cosine of x.
#[pyfunction]
fn cosh(x: f64) -> f64 {
    crate::cosh(x)
}

/// Returns the hyperbolic tangent of x.
#[pyfunction]
fn tanh(x: f64) -> f64 {
    crate::tanh(x)
}

/// Returns the greater of x and y.
#[pyfunction]
fn max(x: f64, y: f64) -> f64 {
    crate::max(x, y)
}

/// Returns the smaller of x and y.
#[pyfunction]
fn min(x: f64, y: f64) -> f64 {
    crate::min(x, y)
}

/// Returns sqrt(x^2 + y^2).
#[pyfunction]
fn hypot(x: f64, y: f64) -> f64 {
    crate::hypot(x, y)
}

/// Returns the arctangent of x/y, carrying the sign of x.
#[pyfunction]
fn atan2(x: f64, y: f64) -> f64 {
    crate::atan2(x, y)
}

/// Returns base raised to the power of exponent.
#[pyfunction]
fn pow(base: f64, exponent: f64) -> f64 {
    crate::pow(base, exponent)
}

/// Returns the natural logarithm of x.
///
/// Raises ValueError outside the real domain.
#[pyfunction]
fn log(x: f64) -> PyResult<f64> {
    Ok(crate::log(x)?)
}

/// Returns the base-2 logarithm of x.
///
/// Raises ValueError outside the real domain.
#[pyfunction]
fn log2(x: f64) -> PyResult<f64> {
    Ok(crate::log2(x)?)
}

/// Returns the base-10 logarithm of x.
///
/// Raises ValueError outside the real domain.
#[pyfunction]
fn log10(x: f64) -> PyResult<f64> {
    Ok(crate::log10(x)?)
}

/// Returns the square root of x.
///
/// Raises ValueError outside the real domain.
#[pyfunction]
fn sqrt(x: f64) -> PyResult<f64> {
    Ok(crate::sqrt(x)?)
}

/// Returns the arc-sine of x.
///
/// Raises ValueError outside the real domain.
#[pyfunction]
fn asin(x: f64) -> PyResult<f64> {
    Ok(crate::asin(x)?)
}

/// Returns the arc-cosine of x.
///
/// Raises ValueError outside the real domain.
#[pyfunction]
fn acos(x: f64) -> PyResult<f64> {
    Ok(crate::acos(x)?)
}

/// Returns the inverse hyperbolic tangent of x.
///
/// Raises ValueError outside the real domain.
#[pyfunction]
fn atanh(x: f64) -> PyResult<f64> {
    Ok(crate::atanh(x)?)
}

/// Returns the root of x with the given radical index.
///
/// Raises ValueError for index 0 and for even roots of negative numbers.
#[pyfunction]
fn ithrt(x: f64, index: u32) -> PyResult<f64> {
    Ok(crate::ithrt(x, index)?)
}

#[pymodule]
fn _seriesmath(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPrecision>()?;

    // Add the functions to the module
    m.add_function(wrap_pyfunction!(pi, m)?)?;
    m.add_function(wrap_pyfunction!(e, m)?)?;
    m.add_function(wrap_pyfunction!(factorial, m)?)?;
    m.add_function(wrap_pyfunction!(int_power, m)?)?;
    m.add_function(wrap_pyfunction!(fmod, m)?)?;
    m.add_function(wrap_pyfunction!(round, m)?)?;
    m.add_function(wrap_pyfunction!(ceil, m)?)?;
    m.add_function(wrap_pyfunction!(floor, m)?)?;
    m.add_function(wrap_pyfunction!(to_radians, m)?)?;
    m.add_function(wrap_pyfunction!(to_degrees, m)?)?;
    m.add_function(wrap_pyfunction!(abs, m)?)?;
    m.add_function(wrap_pyfunction!(neg, m)?)?;
    m.add_function(wrap_pyfunction!(sign, m)?)?;
    m.add_function(wrap_pyfunction!(int_part, m)?)?;
    m.add_function(wrap_pyfunction!(dec_part, m)?)?;
    m.add_function(wrap_pyfunction!(square, m)?)?;
    m.add_function(wrap_pyfunction!(exp, m)?)?;
    m.add_function(wrap_pyfunction!(curt, m)?)?;
    m.add_function(wrap_pyfunction!(sin, m)?)?;
    m.add_function(wrap_pyfunction!(cos, m)?)?;
    m.add_function(wrap_pyfunction!(tan, m)?)?;
    m.add_function(wrap_pyfunction!(atan, m)?)?;
    m.add_function(wrap_pyfunction!(sinh, m)?)?;
    m.add_function(wrap_pyfunction!(cosh, m)?)?;
    m.add_function(wrap_pyfunction!(tanh, m)?)?;
    m.add_function(wrap_pyfunction!(max, m)?)?;
    m.add_function(wrap_pyfunction!(min, m)?)?;
    m.add_function(wrap_pyfunction!(hypot, m)?)?;
    m.add_function(wrap_pyfunction!(atan2, m)?)?;
    m.add_function(wrap_pyfunction!(pow, m)?)?;
    m.add_function(wrap_pyfunction!(log, m)?)?;
    m.add_function(wrap_pyfunction!(log2, m)?)?;
    m.add_function(wrap_pyfunction!(log10, m)?)?;
    m.add_function(wrap_pyfunction!(sqrt, m)?)?;
    m.add_function(wrap_pyfunction!(asin, m)?)?;
    m.add_function(wrap_pyfunction!(acos, m)?)?;
    m.add_function(wrap_pyfunction!(atanh, m)?)?;
    m.add_function(wrap_pyfunction!(ithrt, m)?)?;
    Ok(())
}

#[test]
fn test_module_functions() {
    assert_eq!(abs(-2.5), 2.5);
    assert_eq!(max(6., 3.), 6.);
    assert_eq!(int_part(32.75), 32.);
    assert_eq!(pow(-2., -2.), 0.25);
    assert!((sqrt(2.).unwrap() - 1.4142135623730951).abs() < 1e-12);
    assert!((log10(1000.).unwrap() - 3.).abs() < 1e-12);
    assert!((atan2(4., 3.) - 4f64.atan2(3.)).abs() < 1e-14);
    assert!((ithrt(-8., 3).unwrap() + 2.).abs() < 1e-12);
    assert!(sqrt(-1.).is_err());
    assert!(ithrt(-8., 2).is_err());
    assert!(asin(1.5).is_err());
    assert!(fmod(1., 0.).is_err());
}
