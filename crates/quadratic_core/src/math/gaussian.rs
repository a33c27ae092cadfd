//! Gaussian rationals: complex numbers with exact rational parts.
//!
//! Exact arithmetic in the solver happens in Q(i). `num-complex` already
//! provides field operations for `Complex<BigRational>`; this module adds
//! constructors, float conversion and the text rendering shared by every
//! exact value in the crate.

use num_bigint::BigInt;
use num_complex::{Complex, Complex64};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Complex number with exact rational real and imaginary parts.
pub type GaussianRational = Complex<BigRational>;

/// Builds an exact rational from an integer.
pub fn rational(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Builds a Gaussian rational from integer parts.
///
/// # Examples
///
/// ```
/// use quadratic_core::math::gaussian::{from_integers, render};
///
/// assert_eq!(render(&from_integers(3, -2)), "3 - 2*i");
/// assert_eq!(render(&from_integers(0, 1)), "i");
/// ```
pub fn from_integers(re: i64, im: i64) -> GaussianRational {
    Complex::new(rational(re), rational(im))
}

/// Embeds a real rational into Q(i).
pub fn from_real(re: BigRational) -> GaussianRational {
    Complex::new(re, BigRational::zero())
}

/// Converts a finite `f64` into the exact rational it represents.
///
/// Returns `None` for infinities and NaN.
pub fn exact_float(x: f64) -> Option<BigRational> {
    BigRational::from_float(x)
}

/// Lossy conversion of an exact rational to `f64`.
pub fn ratio_to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Lossy conversion of a Gaussian rational to `Complex64`.
pub fn to_complex64(z: &GaussianRational) -> Complex64 {
    Complex64::new(ratio_to_f64(&z.re), ratio_to_f64(&z.im))
}

/// Renders `z` as `re + im*i`, omitting zero parts.
pub fn render(z: &GaussianRational) -> String {
    render_sum(&[(&z.re, ""), (&z.im, "i")])
}

/// Renders a sum of `coefficient * atom` terms.
///
/// Zero terms are skipped and an empty sum renders as `0`. An empty atom
/// stands for the rational coefficient on its own.
pub(crate) fn render_sum(terms: &[(&BigRational, &str)]) -> String {
    let mut out = String::new();
    for (coefficient, atom) in terms {
        if coefficient.is_zero() {
            continue;
        }
        if out.is_empty() {
            if coefficient.is_negative() {
                out.push('-');
            }
        } else if coefficient.is_negative() {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&render_term(&coefficient.abs(), atom));
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Renders a positive `magnitude * atom` as `p*atom/q`.
fn render_term(magnitude: &BigRational, atom: &str) -> String {
    let numer = magnitude.numer();
    let denom = magnitude.denom();

    let mut term = if atom.is_empty() {
        numer.to_string()
    } else if numer.is_one() {
        atom.to_string()
    } else {
        format!("{}*{}", numer, atom)
    };

    if !denom.is_one() {
        term.push('/');
        term.push_str(&denom.to_string());
    }
    term
}
