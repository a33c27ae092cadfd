//! Classification and root finding for `a·x² + b·x + c = target`.

use tracing::{debug, trace};

use super::validate::{is_valid_number, SolveRequest};
use crate::math::quadratic::{exact_roots, numeric_roots};
use crate::types::{Root, Scalar, Solution, SolveError, Status};

/// Right-hand side used when the caller does not supply one.
pub const DEFAULT_TARGET: i64 = 7;

/// Shape of a validated equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquationKind {
    /// `a = b = 0` and `c = target`.
    Identity,
    /// `a = b = 0` and `c ≠ target`.
    Contradiction,
    /// `a = 0`, `b ≠ 0`.
    Linear,
    /// `a ≠ 0`.
    Quadratic,
}

/// Classifies the equation. Comparisons are exact.
///
/// # Examples
///
/// ```
/// use quadratic_core::{classify, EquationKind, Scalar};
///
/// let zero = Scalar::from(0);
/// assert_eq!(
///     classify(&zero, &zero, &Scalar::from(7.0), &Scalar::from(7)),
///     EquationKind::Identity
/// );
/// assert_eq!(
///     classify(&zero, &Scalar::from(2), &zero, &zero),
///     EquationKind::Linear
/// );
/// ```
pub fn classify(a: &Scalar, b: &Scalar, c: &Scalar, target: &Scalar) -> EquationKind {
    if a.is_zero() && b.is_zero() {
        if c == target {
            EquationKind::Identity
        } else {
            EquationKind::Contradiction
        }
    } else if a.is_zero() {
        EquationKind::Linear
    } else {
        EquationKind::Quadratic
    }
}

/// Solves `a·x² + b·x + c = target`.
///
/// Never fails: degenerate equations and rejected input come back as
/// [`Solution::Status`].
///
/// # Examples
///
/// ```
/// use quadratic_core::{solve, Scalar, Status};
///
/// let solution = solve(1, -3, 2, 7);
/// assert_eq!(solution.to_string(), "[3/2 - sqrt(29)/2, 3/2 + sqrt(29)/2]");
///
/// assert_eq!(solve(0, 0, 7, 7).status(), Some(Status::Identity));
/// assert_eq!(solve(f64::NAN, 2, 3, 7).status(), Some(Status::InvalidInput));
/// assert_eq!(solve(Scalar::i(), 0, 1, 1).to_string(), "[0, 0]");
/// ```
pub fn solve<A, B, C, T>(a: A, b: B, c: C, target: T) -> Solution
where
    A: Into<Scalar>,
    B: Into<Scalar>,
    C: Into<Scalar>,
    T: Into<Scalar>,
{
    solve_scalars(&a.into(), &b.into(), &c.into(), &target.into())
}

/// Solves `a·x² + b·x + c = 7`.
///
/// # Examples
///
/// ```
/// use quadratic_core::solve_default;
///
/// assert_eq!(solve_default(0, 2, 5).to_string(), "[1]");
/// ```
pub fn solve_default<A, B, C>(a: A, b: B, c: C) -> Solution
where
    A: Into<Scalar>,
    B: Into<Scalar>,
    C: Into<Scalar>,
{
    solve(a, b, c, DEFAULT_TARGET)
}

/// Solves an equation given as text literals.
///
/// Literals that do not parse as a [`Scalar`] are rejected like any other
/// invalid input.
///
/// # Examples
///
/// ```
/// use quadratic_core::{solve_text, Status};
///
/// assert_eq!(solve_text("1", "0", "1", "0").to_string(), "[-i, i]");
/// assert_eq!(solve_text("abc", "2", "5", "7").status(), Some(Status::InvalidInput));
/// ```
pub fn solve_text(a: &str, b: &str, c: &str, target: &str) -> Solution {
    let parsed = [("a", a), ("b", b), ("c", c), ("target", target)].map(|(parameter, text)| {
        text.parse::<Scalar>()
            .map_err(|e| SolveError::invalid(parameter, e.to_string()))
    });

    match parsed {
        [Ok(a), Ok(b), Ok(c), Ok(target)] => solve_scalars(&a, &b, &c, &target),
        rejected => {
            if let Some(Err(err)) = rejected.iter().find(|result| result.is_err()) {
                reject(err);
            }
            Status::InvalidInput.into()
        }
    }
}

/// Solves a deserialised request, validating every field first.
pub fn solve_request(request: &SolveRequest) -> Solution {
    match request.validate() {
        Ok([a, b, c, target]) => solve_scalars(&a, &b, &c, &target),
        Err(err) => {
            reject(&err);
            Status::InvalidInput.into()
        }
    }
}

fn reject(err: &SolveError) {
    debug!(error = %err, "rejecting solver input");
}

fn solve_scalars(a: &Scalar, b: &Scalar, c: &Scalar, target: &Scalar) -> Solution {
    let named = [("a", a), ("b", b), ("c", c), ("target", target)];
    if let Some(&(parameter, _)) = named.iter().find(|(_, value)| !is_valid_number(value)) {
        reject(&SolveError::invalid(parameter, "value is not finite"));
        return Status::InvalidInput.into();
    }

    let kind = classify(a, b, c, target);
    let exact = named.iter().all(|(_, value)| value.is_exact());
    debug!(?kind, exact, "classified equation");

    match kind {
        EquationKind::Identity => Status::Identity.into(),
        EquationKind::Contradiction => Status::Contradiction.into(),
        EquationKind::Linear | EquationKind::Quadratic if exact => {
            match exact_solution(a, b, c, target) {
                Some(roots) => Solution::Roots(roots),
                None => Status::InvalidInput.into(),
            }
        }
        EquationKind::Linear | EquationKind::Quadratic => {
            Solution::Roots(numeric_solution(a, b, c, target))
        }
    }
}

fn exact_solution(a: &Scalar, b: &Scalar, c: &Scalar, target: &Scalar) -> Option<Vec<Root>> {
    let a = a.to_exact()?;
    let b = b.to_exact()?;
    let shifted = c.to_exact()? - target.to_exact()?;

    let roots: Vec<Root> = exact_roots(&a, &b, &shifted)
        .into_iter()
        .map(Root::Exact)
        .collect();
    trace!(count = roots.len(), "computed exact roots");
    Some(roots)
}

fn numeric_solution(a: &Scalar, b: &Scalar, c: &Scalar, target: &Scalar) -> Vec<Root> {
    let shifted = c.to_complex64() - target.to_complex64();
    let roots: Vec<Root> = numeric_roots(a.to_complex64(), b.to_complex64(), shifted)
        .into_iter()
        .map(Root::Numeric)
        .collect();
    trace!(count = roots.len(), "computed numeric roots");
    roots
}
