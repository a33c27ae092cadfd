//! Exact values of the form `α + β·√δ` over Q(i).
//!
//! Every exact root of a quadratic with Gaussian rational coefficients fits
//! this shape: α and β are Gaussian rationals and δ is a normalised
//! [`Radicand`]. Because the radicand is normalised, √δ lies outside Q(i):
//! two surds over the same radicand are equal exactly when their parts are,
//! and an integer radicand never describes the same value as a Gaussian one.

use std::cmp::Ordering;
use std::fmt;

use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::gaussian::{render_sum, to_complex64, GaussianRational};
use super::radicals::Radicand;

/// Exact value `rational + coefficient·√radicand`.
///
/// # Invariants
///
/// `radicand` is [`Radicand::Unit`] exactly when `coefficient` is zero.
///
/// # Examples
///
/// ```
/// use quadratic_core::math::gaussian::{from_integers, from_real};
/// use quadratic_core::math::radicals::Radicand;
/// use quadratic_core::math::surd::Surd;
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
///
/// let half = BigRational::new(BigInt::from(1), BigInt::from(2));
/// let root = Surd::new(
///     from_real(half.clone() * BigRational::from_integer(BigInt::from(3))),
///     from_real(-half),
///     Radicand::Integer(BigInt::from(29)),
/// );
/// assert_eq!(root.to_string(), "3/2 - sqrt(29)/2");
/// assert!(root.is_real());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Surd {
    rational: GaussianRational,
    coefficient: GaussianRational,
    radicand: Radicand,
}

impl Surd {
    /// Creates `rational + coefficient·√radicand`, folding a unit radicand
    /// into the rational part.
    pub fn new(
        rational: GaussianRational,
        coefficient: GaussianRational,
        radicand: Radicand,
    ) -> Self {
        if radicand.is_unit() {
            return Self::rational(rational + coefficient);
        }
        if coefficient.is_zero() {
            return Self::rational(rational);
        }
        Self {
            rational,
            coefficient,
            radicand,
        }
    }

    /// Creates a surd with no radical part.
    pub fn rational(value: GaussianRational) -> Self {
        Self {
            rational: value,
            coefficient: GaussianRational::zero(),
            radicand: Radicand::Unit,
        }
    }

    /// The α part.
    pub fn rational_part(&self) -> &GaussianRational {
        &self.rational
    }

    /// The β part (zero for rational surds).
    pub fn radical_coefficient(&self) -> &GaussianRational {
        &self.coefficient
    }

    /// The normalised δ.
    pub fn radicand(&self) -> &Radicand {
        &self.radicand
    }

    /// Returns true when the value lies in Q(i).
    pub fn is_rational(&self) -> bool {
        self.radicand.is_unit()
    }

    /// Returns true for the exact value zero.
    pub fn is_zero(&self) -> bool {
        self.is_rational() && self.rational.is_zero()
    }

    /// (β·√δ)² = β²·δ, which lies in Q(i).
    fn radical_square(&self) -> GaussianRational {
        &self.coefficient * &self.coefficient * self.radicand.value()
    }

    /// Returns true when the imaginary part is exactly zero.
    ///
    /// β·√δ is either real, purely imaginary, or has an irrational imaginary
    /// part, so the decision reduces to the sign of β²·δ.
    pub fn is_real(&self) -> bool {
        if self.is_rational() {
            return self.rational.im.is_zero();
        }
        let square = self.radical_square();
        self.rational.im.is_zero() && square.im.is_zero() && !square.re.is_negative()
    }

    /// Returns true when the real part is exactly zero and the value is not.
    pub fn is_imaginary(&self) -> bool {
        if self.is_rational() {
            return self.rational.re.is_zero() && !self.rational.im.is_zero();
        }
        let square = self.radical_square();
        self.rational.re.is_zero() && square.im.is_zero() && square.re.is_negative()
    }

    /// Numeric approximation.
    pub fn to_complex64(&self) -> Complex64 {
        if self.is_rational() {
            return to_complex64(&self.rational);
        }
        to_complex64(&self.rational)
            + to_complex64(&self.coefficient) * self.radicand.sqrt_complex64()
    }

    /// Evaluates `a·x² + b·x + c` at `x = self`, exactly.
    ///
    /// The result stays in Q(i)(√δ) for the same δ.
    pub fn evaluate_quadratic(
        &self,
        a: &GaussianRational,
        b: &GaussianRational,
        c: &GaussianRational,
    ) -> Surd {
        let alpha = &self.rational;
        let beta = &self.coefficient;

        // x² = (α² + β²δ) + 2αβ·√δ
        let square_rational = alpha * alpha + self.radical_square();
        let two_alpha = alpha + alpha;
        let square_coefficient = &two_alpha * beta;

        let rational = a * &square_rational + b * alpha + c;
        let coefficient = a * &square_coefficient + b * beta;
        Surd::new(rational, coefficient, self.radicand.clone())
    }

    /// Total order on real surds, used to list real roots ascending.
    ///
    /// Rational values compare exactly; anything else compares numerically.
    pub(crate) fn real_cmp(&self, other: &Self) -> Ordering {
        if self.is_rational() && other.is_rational() {
            return self.rational.re.cmp(&other.rational.re);
        }
        self.to_complex64()
            .re
            .partial_cmp(&other.to_complex64().re)
            .unwrap_or(Ordering::Equal)
    }
}

impl From<GaussianRational> for Surd {
    fn from(value: GaussianRational) -> Self {
        Self::rational(value)
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atom = self.radicand.to_string();
        let imaginary_atom = format!("{}*i", atom);

        let mut terms: Vec<(&BigRational, &str)> =
            vec![(&self.rational.re, ""), (&self.rational.im, "i")];
        if !self.is_rational() {
            terms.push((&self.coefficient.re, atom.as_str()));
            terms.push((&self.coefficient.im, imaginary_atom.as_str()));
        }
        write!(f, "{}", render_sum(&terms))
    }
}
