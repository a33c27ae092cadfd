//! Core value types.
//!
//! This module provides:
//! - `scalar`: The closed set of accepted numeric inputs
//! - `solution`: Roots, fixed status messages and the combined result
//! - `error`: Structured error types for validation and literal parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Scalar`] from `scalar`
//! - [`Root`], [`Solution`], [`Status`] from `solution`
//! - [`SolveError`], [`ScalarParseError`] from `error`

pub mod error;
pub mod scalar;
pub mod solution;

// Re-export commonly used types at module level
pub use error::{ScalarParseError, SolveError};
pub use scalar::Scalar;
pub use solution::{
    Root, Solution, Status, CONTRADICTION_MESSAGE, IDENTITY_MESSAGE, INVALID_INPUT_MESSAGE,
};
