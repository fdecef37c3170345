//! Domain errors reported by the fallible functions of this library.

use thiserror::Error;

/// Describes why a function has no real result for the given arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The divisor of a remainder operation was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An even-index root (including the square root) of a negative number.
    #[error("root of index {index} of negative number {value}")]
    NegativeRadicand { value: f64, index: u32 },

    /// The radical index of a root was zero.
    #[error("root index must be non-zero")]
    ZeroRootIndex,

    /// The argument of a logarithm was zero or negative.
    #[error("logarithm of non-positive number {0}")]
    NonPositiveLogarithm(f64),

    /// The argument lies outside the real domain of `function`.
    #[error("{function} is undefined for {value}")]
    OutOfRange { function: &'static str, value: f64 },
}

/// The result of a function that may fail with a [`DomainError`].
pub type MathResult<T = f64> = Result<T, DomainError>;

#[cfg(feature = "std")]
#[test]
fn test_error_messages() {
    use std::string::ToString;

    assert_eq!(DomainError::DivisionByZero.to_string(), "division by zero");
    let err = DomainError::NegativeRadicand {
        value: -8.,
        index: 2,
    };
    assert_eq!(err.to_string(), "root of index 2 of negative number -8");
    let err = DomainError::OutOfRange {
        function: "asin",
        value: 1.5,
    };
    assert_eq!(err.to_string(), "asin is undefined for 1.5");
    assert_eq!(
        DomainError::NonPositiveLogarithm(0.).to_string(),
        "logarithm of non-positive number 0"
    );
}
