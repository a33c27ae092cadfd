//! Solver results.
//!
//! A call to the solver produces a [`Solution`]: either an ordered list of
//! [`Root`]s or one of three fixed [`Status`] messages. Invalid input is a
//! status like any other; callers distinguish outcomes by matching on the
//! variant.

use std::fmt;

use num_complex::Complex64;
use serde::{Serialize, Serializer};

use super::scalar::{render_complex64, Scalar};
use crate::math::surd::Surd;

/// Message for equations that reduce to `0 = 0`.
pub const IDENTITY_MESSAGE: &str = "infinitely many solutions (identity 0=0)";

/// Message for equations that reduce to `0 = k` with `k ≠ 0`.
pub const CONTRADICTION_MESSAGE: &str = "no solutions (contradiction of form 0=number)";

/// Message for rejected input.
pub const INVALID_INPUT_MESSAGE: &str =
    "error: parameters must be numbers (including complex, but not NaN/inf)";

/// Fixed outcome returned in place of roots.
///
/// # Examples
/// ```
/// use quadratic_core::types::Status;
///
/// assert_eq!(
///     Status::Identity.to_string(),
///     "infinitely many solutions (identity 0=0)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Every x solves the equation.
    Identity,
    /// No x solves the equation.
    Contradiction,
    /// At least one parameter was rejected by the validator.
    InvalidInput,
}

impl Status {
    /// The fixed human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            Status::Identity => IDENTITY_MESSAGE,
            Status::Contradiction => CONTRADICTION_MESSAGE,
            Status::InvalidInput => INVALID_INPUT_MESSAGE,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// A single root.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    /// Exact closed form, from exact coefficients.
    Exact(Surd),
    /// Floating-point value, from floating-point coefficients.
    Numeric(Complex64),
}

impl Root {
    /// Returns the exact form, if any.
    pub fn as_exact(&self) -> Option<&Surd> {
        match self {
            Root::Exact(surd) => Some(surd),
            Root::Numeric(_) => None,
        }
    }

    /// Returns true for roots computed in exact arithmetic.
    pub fn is_exact(&self) -> bool {
        matches!(self, Root::Exact(_))
    }

    /// Floating-point value of the root.
    pub fn to_complex64(&self) -> Complex64 {
        match self {
            Root::Exact(surd) => surd.to_complex64(),
            Root::Numeric(z) => *z,
        }
    }

    /// Returns true when the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        match self {
            Root::Exact(surd) => surd.is_real(),
            Root::Numeric(z) => z.im == 0.0,
        }
    }

    /// Returns true when the real part is exactly zero and the root is not.
    pub fn is_imaginary(&self) -> bool {
        match self {
            Root::Exact(surd) => surd.is_imaginary(),
            Root::Numeric(z) => z.re == 0.0 && z.im != 0.0,
        }
    }

    /// Exact value of `a·x² + b·x + c − target` at this root.
    ///
    /// Returns `None` for numeric roots or when any parameter is a float.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadratic_core::{solve, Scalar};
    ///
    /// let (a, b, c, t) = (Scalar::from(1), Scalar::from(-3), Scalar::from(2), Scalar::from(7));
    /// let solution = solve(a.clone(), b.clone(), c.clone(), t.clone());
    /// for root in solution.roots().unwrap() {
    ///     assert!(root.residual(&a, &b, &c, &t).unwrap().is_zero());
    /// }
    /// ```
    pub fn residual(
        &self,
        a: &Scalar,
        b: &Scalar,
        c: &Scalar,
        target: &Scalar,
    ) -> Option<Surd> {
        let surd = self.as_exact()?;
        let shifted = c.to_exact()? - target.to_exact()?;
        Some(surd.evaluate_quadratic(&a.to_exact()?, &b.to_exact()?, &shifted))
    }

    /// Floating-point value of `a·x² + b·x + c − target` at this root.
    pub fn numeric_residual(
        &self,
        a: &Scalar,
        b: &Scalar,
        c: &Scalar,
        target: &Scalar,
    ) -> Complex64 {
        let x = self.to_complex64();
        let shifted = c.to_complex64() - target.to_complex64();
        (a.to_complex64() * x + b.to_complex64()) * x + shifted
    }
}

impl From<Surd> for Root {
    fn from(surd: Surd) -> Self {
        Root::Exact(surd)
    }
}

impl From<Complex64> for Root {
    fn from(z: Complex64) -> Self {
        Root::Numeric(z)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Exact(surd) => write!(f, "{}", surd),
            Root::Numeric(z) => f.write_str(&render_complex64(*z)),
        }
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of solving `a·x² + b·x + c = target`.
///
/// Serialises as `{"roots": [..]}` or
/// `{"status": ".."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Solution {
    /// Roots in order: one for a linear equation, two for a quadratic.
    Roots(Vec<Root>),
    /// Degenerate equation or rejected input.
    Status(Status),
}

impl Solution {
    /// Returns the roots, if any were computed.
    pub fn roots(&self) -> Option<&[Root]> {
        match self {
            Solution::Roots(roots) => Some(roots),
            Solution::Status(_) => None,
        }
    }

    /// Returns the status, if the equation was degenerate or rejected.
    pub fn status(&self) -> Option<Status> {
        match self {
            Solution::Roots(_) => None,
            Solution::Status(status) => Some(*status),
        }
    }

    /// Returns true for the invalid-input status.
    pub fn is_invalid(&self) -> bool {
        self.status() == Some(Status::InvalidInput)
    }
}

impl From<Status> for Solution {
    fn from(status: Status) -> Self {
        Solution::Status(status)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Roots(roots) => {
                write!(f, "[")?;
                for (i, root) in roots.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", root)?;
                }
                write!(f, "]")
            }
            Solution::Status(status) => write!(f, "{}", status),
        }
    }
}
