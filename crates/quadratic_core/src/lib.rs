//! # quadratic_core: Exact Solver for `a·x² + b·x + c = target`
//!
//! ## Role
//!
//! quadratic_core is the library behind the `quadratic` CLI, providing:
//! - Input validation: `is_valid_number`, `validate`, `SolveRequest` (`solver`)
//! - Classification and root finding: `classify`, `solve`, `solve_default` (`solver`)
//! - The accepted numeric inputs: `Scalar` (`types::scalar`)
//! - Results: `Solution`, `Root`, `Status` (`types::solution`)
//! - Exact arithmetic over Q(i) with one square root adjoined (`math`)
//!
//! ## Exactness
//!
//! Integer, rational and Gaussian-rational coefficients are solved in exact
//! arithmetic: roots come back in closed form (`3/2 + sqrt(29)/2`) and are
//! verified by substitution. As soon as any parameter is a float the solver
//! switches to `Complex64` arithmetic.
//!
//! ## Usage Examples
//!
//! ```rust
//! use quadratic_core::{solve, solve_default, Scalar, Status};
//!
//! // x² − 3x + 2 = 7
//! let solution = solve(1, -3, 2, 7);
//! assert_eq!(solution.to_string(), "[3/2 - sqrt(29)/2, 3/2 + sqrt(29)/2]");
//!
//! // 2x + 5 = 7
//! assert_eq!(solve_default(0, 2, 5).to_string(), "[1]");
//!
//! // Complex roots
//! assert_eq!(solve(1, 0, 1, 0).to_string(), "[-i, i]");
//! assert!(solve(Scalar::i(), 2, 3, 0).roots().is_some());
//!
//! // Degenerate equations
//! assert_eq!(solve(0, 0, 5, 5).status(), Some(Status::Identity));
//! assert_eq!(solve(0, 0, 5, 6).status(), Some(Status::Contradiction));
//! ```
//!
//! ## Feature Flags
//!
//! None. Serialisation through serde is always available.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod solver;
pub mod types;

pub use solver::{
    classify, is_valid_number, solve, solve_default, solve_request, solve_text, validate,
    EquationKind, SolveRequest, DEFAULT_TARGET,
};
pub use types::{Root, Scalar, ScalarParseError, Solution, SolveError, Status};
