//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolveError`: Rejected solver input (the single "invalid input" kind)
//! - `ScalarParseError`: Errors from parsing scalar literals
//!
//! `SolveError` never escapes the `solve*` entry points; it is logged and
//! converted into [`Status::InvalidInput`](crate::types::Status::InvalidInput).

use thiserror::Error;

/// Rejected solver input.
///
/// # Examples
/// ```
/// use quadratic_core::types::SolveError;
///
/// let err = SolveError::InvalidInput {
///     parameter: "a",
///     reason: "boolean values are not numbers".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid input for `a`: boolean values are not numbers"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Non-numeric, boolean, missing, infinite or NaN value.
    #[error("Invalid input for `{parameter}`: {reason}")]
    InvalidInput {
        /// Name of the offending parameter (`a`, `b`, `c` or `target`)
        parameter: &'static str,
        /// Human-readable reason
        reason: String,
    },
}

impl SolveError {
    /// Shorthand for [`SolveError::InvalidInput`].
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        SolveError::InvalidInput {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Scalar literal parsing errors.
///
/// # Examples
/// ```
/// use quadratic_core::types::{Scalar, ScalarParseError};
///
/// let err = "abc".parse::<Scalar>().unwrap_err();
/// assert_eq!(err, ScalarParseError::Invalid("abc".to_string()));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalarParseError {
    /// Empty or whitespace-only literal.
    #[error("Empty scalar literal")]
    Empty,

    /// Literal is not an integer, fraction, float or complex number.
    #[error("Invalid scalar literal: {0}")]
    Invalid(String),

    /// Fraction with a zero denominator.
    #[error("Zero denominator in rational literal: {0}")]
    ZeroDenominator(String),
}
