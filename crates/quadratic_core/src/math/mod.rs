//! Exact and floating-point arithmetic behind the solver.
//!
//! This module provides:
//! - `gaussian`: Gaussian rationals (Q(i)) and their text rendering
//! - `radicals`: Square-free extraction and simplified square roots in Q(i)
//! - `surd`: Exact values `α + β·√δ`, the shape of every exact root
//! - `quadratic`: Closed-form roots, exact and `Complex64`

pub mod gaussian;
pub mod quadratic;
pub mod radicals;
pub mod surd;

pub use gaussian::GaussianRational;
pub use quadratic::{exact_roots, numeric_roots};
pub use radicals::{sqrt_exact, Radicand};
pub use surd::Surd;
