//! The equation solver.
//!
//! Validation and root finding for `a·x² + b·x + c = target`:
//!
//! 1. every parameter must pass the validator, otherwise the result is
//!    [`Status::InvalidInput`](crate::types::Status::InvalidInput);
//! 2. `a = b = 0` collapses to comparing `c` with `target` (identity or
//!    contradiction);
//! 3. anything else is solved in closed form, exactly when all parameters
//!    are exact and in `Complex64` otherwise.
//!
//! Entry points differ only in how the parameters arrive:
//!
//! - [`solve`] / [`solve_default`]: typed [`Scalar`](crate::types::Scalar)s
//! - [`solve_text`]: text literals
//! - [`solve_request`]: deserialised JSON

mod solve;
mod validate;

pub use solve::{
    classify, solve, solve_default, solve_request, solve_text, EquationKind, DEFAULT_TARGET,
};
pub use validate::{is_valid_number, validate, SolveRequest};
