//! Error types for complex narrowing
//!
//! Narrowing a `Complex` back to a real-valued type is the only fallible
//! operation in this crate. Everything else is total over IEEE-754 doubles.

use thiserror::Error;

/// Narrowing error
///
/// Raised when a `Complex` with a non-zero imaginary part is converted to a
/// real-valued type. Callers that want a lossy result should take `real()` or
/// `abs()` explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("InexactError: cannot convert {value} to {target}: imaginary part is not zero")]
pub struct ConversionError {
    /// Name of the real-valued target type (e.g. `"f64"`)
    pub target: &'static str,
    /// Canonical text form of the value that failed to narrow
    pub value: String,
}

impl ConversionError {
    /// Create a conversion error
    pub fn new<S: Into<String>>(target: &'static str, value: S) -> Self {
        ConversionError {
            target,
            value: value.into(),
        }
    }
}

/// Result type alias for narrowing conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::new("f64", "1.0 + 2.0i");
        assert_eq!(
            format!("{}", err),
            "InexactError: cannot convert 1.0 + 2.0i to f64: imaginary part is not zero"
        );
    }

    #[test]
    fn test_error_fields() {
        let err = ConversionError::new("i32", String::from("0.0 - 1.0i"));
        assert_eq!(err.target, "i32");
        assert_eq!(err.value, "0.0 - 1.0i");
    }
}
