//! Closed-form roots of `a·x² + b·x + c = 0`.
//!
//! Two renditions of the same formula:
//!
//! - [`exact_roots`] over Gaussian rationals, returning simplified [`Surd`]s;
//! - [`numeric_roots`] over `Complex64`.
//!
//! Both expect a non-degenerate equation (`a ≠ 0` or `b ≠ 0`); deciding
//! between identity, contradiction and root finding is the caller's job.
//! With `a = 0` they return the single linear root `-c/b`; otherwise both
//! quadratic roots, a repeated root listed twice.

use num_complex::Complex64;
use num_traits::Zero;

use super::gaussian::{rational, GaussianRational};
use super::radicals::sqrt_exact;
use super::surd::Surd;

/// Exact roots in simplified radical form.
///
/// Real roots are listed in ascending order; otherwise the `-√D` root comes
/// first.
///
/// # Examples
///
/// ```
/// use quadratic_core::math::gaussian::from_integers;
/// use quadratic_core::math::quadratic::exact_roots;
///
/// // x² - 7 = 0
/// let roots = exact_roots(
///     &from_integers(1, 0),
///     &from_integers(0, 0),
///     &from_integers(-7, 0),
/// );
/// let rendered: Vec<String> = roots.iter().map(|r| r.to_string()).collect();
/// assert_eq!(rendered, vec!["-sqrt(7)", "sqrt(7)"]);
/// ```
pub fn exact_roots(
    a: &GaussianRational,
    b: &GaussianRational,
    c: &GaussianRational,
) -> Vec<Surd> {
    if a.is_zero() {
        return vec![Surd::rational(-(c / b))];
    }

    let two_a = a.scale(rational(2));
    let discriminant = b * b - (a * c).scale(rational(4));
    let (kappa, radicand) = sqrt_exact(&discriminant);

    let centre = -(b / &two_a);
    let spread = kappa / &two_a;

    let mut roots = vec![
        Surd::new(centre.clone(), -spread.clone(), radicand.clone()),
        Surd::new(centre, spread, radicand),
    ];
    if roots.iter().all(Surd::is_real) {
        roots.sort_by(Surd::real_cmp);
    }
    roots
}

/// Floating-point roots.
///
/// Uses `q = -(b + sgn·√D)/2`, `x₁ = q/a`, `x₂ = c/q` with the sign chosen so
/// that `b` and `sgn·√D` do not cancel. Roots with zero imaginary parts are
/// listed in ascending order.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use num_complex::Complex64;
/// use quadratic_core::math::quadratic::numeric_roots;
///
/// let roots = numeric_roots(
///     Complex64::new(1.0, 0.0),
///     Complex64::new(-3.0, 0.0),
///     Complex64::new(2.0, 0.0),
/// );
/// assert_relative_eq!(roots[0].re, 1.0, epsilon = 1e-12);
/// assert_relative_eq!(roots[1].re, 2.0, epsilon = 1e-12);
/// ```
pub fn numeric_roots(a: Complex64, b: Complex64, c: Complex64) -> Vec<Complex64> {
    if a.is_zero() {
        return vec![-c / b];
    }

    let discriminant = b * b - a * c * 4.0;
    let sqrt_discriminant = discriminant.sqrt();
    let sign = if (b.conj() * sqrt_discriminant).re >= 0.0 {
        1.0
    } else {
        -1.0
    };
    let q = -(b + sqrt_discriminant * sign) / 2.0;

    let mut roots = if q.is_zero() {
        // b = 0 and D = 0, so c = 0 as well
        let root = -b / (a * 2.0);
        vec![root, root]
    } else {
        vec![q / a, c / q]
    };

    if roots.iter().all(|root| root.im == 0.0) {
        roots.sort_by(|left, right| {
            left.re
                .partial_cmp(&right.re)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::gaussian::from_integers;
    use approx::assert_relative_eq;

    fn rendered(roots: &[Surd]) -> Vec<String> {
        roots.iter().map(|root| root.to_string()).collect()
    }

    fn c64(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_exact_two_irrational_roots() {
        let roots = exact_roots(&from_integers(1, 0), &from_integers(-3, 0), &from_integers(-5, 0));
        assert_eq!(rendered(&roots), vec!["3/2 - sqrt(29)/2", "3/2 + sqrt(29)/2"]);
    }

    #[test]
    fn test_exact_negative_leading_coefficient_still_ascending() {
        // -x² + 7 = 0
        let roots = exact_roots(&from_integers(-1, 0), &from_integers(0, 0), &from_integers(7, 0));
        assert_eq!(rendered(&roots), vec!["-sqrt(7)", "sqrt(7)"]);
    }

    #[test]
    fn test_exact_rational_roots_simplify() {
        // x² - 4 = 0 → √16 reduces to 4
        let roots = exact_roots(&from_integers(1, 0), &from_integers(0, 0), &from_integers(-4, 0));
        assert_eq!(rendered(&roots), vec!["-2", "2"]);
        assert!(roots.iter().all(Surd::is_rational));
    }

    #[test]
    fn test_exact_repeated_root() {
        let roots = exact_roots(&from_integers(1, 0), &from_integers(2, 0), &from_integers(1, 0));
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0], roots[1]);
        assert_eq!(roots[0].to_string(), "-1");
    }

    #[test]
    fn test_exact_purely_imaginary() {
        let roots = exact_roots(&from_integers(1, 0), &from_integers(0, 0), &from_integers(1, 0));
        assert_eq!(rendered(&roots), vec!["-i", "i"]);
        assert!(roots.iter().all(Surd::is_imaginary));
    }

    #[test]
    fn test_exact_conjugate_pair() {
        let roots = exact_roots(&from_integers(1, 0), &from_integers(1, 0), &from_integers(1, 0));
        assert_eq!(
            rendered(&roots),
            vec!["-1/2 - sqrt(3)*i/2", "-1/2 + sqrt(3)*i/2"]
        );
        assert!(roots.iter().all(|root| !root.is_real()));
    }

    #[test]
    fn test_exact_complex_coefficients() {
        // i·x² + 2x + 3 = 0
        let a = from_integers(0, 1);
        let b = from_integers(2, 0);
        let c = from_integers(3, 0);
        let roots = exact_roots(&a, &b, &c);
        assert_eq!(roots.len(), 2);
        for root in &roots {
            assert!(root.evaluate_quadratic(&a, &b, &c).is_zero());
            assert!(!root.is_rational());
        }
    }

    #[test]
    fn test_exact_linear() {
        let roots = exact_roots(&from_integers(0, 0), &from_integers(2, 0), &from_integers(-2, 0));
        assert_eq!(rendered(&roots), vec!["1"]);
    }

    #[test]
    fn test_numeric_distinct_real() {
        let roots = numeric_roots(c64(1.5, 0.0), c64(2.8, 0.0), c64(-1.0, 0.0));
        assert_eq!(roots.len(), 2);
        assert!(roots[0].re < roots[1].re);
        for root in &roots {
            let residual = c64(1.5, 0.0) * root * root + c64(2.8, 0.0) * root - 1.0;
            assert_relative_eq!(residual.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_numeric_avoids_cancellation() {
        // x² - 1e8·x + 1 = 0 has a root near 1e-8
        let roots = numeric_roots(c64(1.0, 0.0), c64(-1e8, 0.0), c64(1.0, 0.0));
        assert_relative_eq!(roots[0].re, 1e-8, max_relative = 1e-12);
        assert_relative_eq!(roots[1].re, 1e8, max_relative = 1e-12);
    }

    #[test]
    fn test_numeric_complex_pair() {
        let roots = numeric_roots(c64(1.0, 0.0), c64(0.0, 0.0), c64(1.0, 0.0));
        assert_relative_eq!(roots[0].re, 0.0, epsilon = 1e-15);
        assert_relative_eq!(roots[0].im.abs(), 1.0, epsilon = 1e-15);
        assert_relative_eq!((roots[0] + roots[1]).norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_numeric_zero_double_root() {
        let roots = numeric_roots(c64(2.0, 0.0), c64(0.0, 0.0), c64(0.0, 0.0));
        assert_eq!(roots, vec![c64(0.0, 0.0), c64(0.0, 0.0)]);
    }

    #[test]
    fn test_numeric_linear() {
        let roots = numeric_roots(c64(0.0, 0.0), c64(2.0, 0.0), c64(-2.0, 0.0));
        assert_eq!(roots, vec![c64(1.0, 0.0)]);
    }
}
