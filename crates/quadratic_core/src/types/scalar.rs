//! Accepted numeric inputs.
//!
//! [`Scalar`] is the closed set of values the solver accepts for `a`, `b`,
//! `c` and `target`. Exact variants keep the solver in exact arithmetic;
//! a single floating-point input switches the whole equation to `Complex64`.
//!
//! # Examples
//!
//! ```
//! use quadratic_core::types::Scalar;
//!
//! let half: Scalar = "1/2".parse().unwrap();
//! assert!(half.is_exact());
//!
//! let z: Scalar = "2-3i".parse().unwrap();
//! assert_eq!(z, Scalar::gaussian(2, -3));
//!
//! // Cross-variant comparison is exact
//! assert_eq!(Scalar::from(7), Scalar::from(7.0));
//! assert_ne!(Scalar::from(0.1), "1/10".parse::<Scalar>().unwrap());
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_complex::{Complex, Complex64};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::error::ScalarParseError;
use crate::math::gaussian::{self, GaussianRational};

/// Numeric input to the solver: real or complex, exact or floating-point.
#[derive(Debug, Clone)]
pub enum Scalar {
    /// Exact integer.
    Integer(i64),
    /// Exact fraction.
    Rational(BigRational),
    /// Exact complex number with rational parts.
    Gaussian(GaussianRational),
    /// Floating-point real.
    Real(f64),
    /// Floating-point complex.
    Complex(Complex64),
}

impl Scalar {
    /// The imaginary unit, exactly.
    pub fn i() -> Self {
        Scalar::gaussian(0, 1)
    }

    /// Exact complex number with integer parts.
    pub fn gaussian(re: i64, im: i64) -> Self {
        Scalar::Gaussian(gaussian::from_integers(re, im))
    }

    /// Floating-point complex number.
    pub fn complex(re: f64, im: f64) -> Self {
        Scalar::Complex(Complex64::new(re, im))
    }

    /// Exact fraction `numer / denom`.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarParseError::ZeroDenominator`] when `denom == 0`.
    pub fn fraction(numer: i64, denom: i64) -> Result<Self, ScalarParseError> {
        if denom == 0 {
            return Err(ScalarParseError::ZeroDenominator(format!(
                "{}/{}",
                numer, denom
            )));
        }
        Ok(Scalar::from(BigRational::new(
            BigInt::from(numer),
            BigInt::from(denom),
        )))
    }

    /// Returns true for exact variants.
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Scalar::Integer(_) | Scalar::Rational(_) | Scalar::Gaussian(_)
        )
    }

    /// Returns false when a real or imaginary part is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        match self {
            Scalar::Real(x) => x.is_finite(),
            Scalar::Complex(z) => z.re.is_finite() && z.im.is_finite(),
            _ => true,
        }
    }

    /// Exact value in Q(i).
    ///
    /// Finite floats convert to the binary rational they represent; returns
    /// `None` for non-finite values.
    pub fn to_exact(&self) -> Option<GaussianRational> {
        match self {
            Scalar::Integer(n) => Some(gaussian::from_integers(*n, 0)),
            Scalar::Rational(r) => Some(gaussian::from_real(r.clone())),
            Scalar::Gaussian(z) => Some(z.clone()),
            Scalar::Real(x) => gaussian::exact_float(*x).map(gaussian::from_real),
            Scalar::Complex(z) => Some(Complex::new(
                gaussian::exact_float(z.re)?,
                gaussian::exact_float(z.im)?,
            )),
        }
    }

    /// Floating-point value.
    pub fn to_complex64(&self) -> Complex64 {
        match self {
            Scalar::Integer(n) => Complex64::new(*n as f64, 0.0),
            Scalar::Rational(r) => Complex64::new(gaussian::ratio_to_f64(r), 0.0),
            Scalar::Gaussian(z) => gaussian::to_complex64(z),
            Scalar::Real(x) => Complex64::new(*x, 0.0),
            Scalar::Complex(z) => *z,
        }
    }

    /// Returns true when the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.to_exact().is_some_and(|z| z.is_zero())
    }
}

impl PartialEq for Scalar {
    /// Exact comparison; NaN compares unequal to everything.
    fn eq(&self, other: &Self) -> bool {
        match (self.to_exact(), other.to_exact()) {
            (Some(left), Some(right)) => left == right,
            _ => self.to_complex64() == other.to_complex64(),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar::Complex(value)
    }
}

impl From<BigInt> for Scalar {
    fn from(value: BigInt) -> Self {
        Scalar::from(BigRational::from_integer(value))
    }
}

impl From<BigRational> for Scalar {
    /// Integral values that fit in `i64` become [`Scalar::Integer`].
    fn from(value: BigRational) -> Self {
        if value.is_integer() {
            if let Some(n) = value.to_integer().to_i64() {
                return Scalar::Integer(n);
            }
        }
        Scalar::Rational(value)
    }
}

impl From<GaussianRational> for Scalar {
    /// Values with a zero imaginary part collapse to a real variant.
    fn from(value: GaussianRational) -> Self {
        if value.im.is_zero() {
            return Scalar::from(value.re);
        }
        Scalar::Gaussian(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Rational(r) => write!(f, "{}", r),
            Scalar::Gaussian(z) => write!(f, "{}", gaussian::render(z)),
            Scalar::Real(x) => write!(f, "{}", x),
            Scalar::Complex(z) => write!(f, "{}", render_complex64(*z)),
        }
    }
}

/// Renders a floating-point complex number, omitting a zero imaginary part.
pub(crate) fn render_complex64(z: Complex64) -> String {
    if z.im == 0.0 {
        return format!("{}", z.re);
    }
    let magnitude = z.im.abs();
    let imaginary = if magnitude == 1.0 {
        "i".to_string()
    } else {
        format!("{}*i", magnitude)
    };
    let negative = z.im.is_sign_negative();
    if z.re == 0.0 {
        if negative {
            format!("-{}", imaginary)
        } else {
            imaginary
        }
    } else if negative {
        format!("{} - {}", z.re, imaginary)
    } else {
        format!("{} + {}", z.re, imaginary)
    }
}

/// One real component of a literal.
enum Part {
    Exact(BigRational),
    Float(f64),
}

impl Part {
    fn from_integer(n: i64) -> Self {
        Part::Exact(gaussian::rational(n))
    }

    fn to_f64(&self) -> f64 {
        match self {
            Part::Exact(r) => gaussian::ratio_to_f64(r),
            Part::Float(x) => *x,
        }
    }
}

/// Parses a real literal: integer, `p/q` fraction or float.
fn parse_real(text: &str, literal: &str) -> Result<Part, ScalarParseError> {
    let invalid = || ScalarParseError::Invalid(literal.to_string());
    let text = text.strip_prefix('+').unwrap_or(text);

    if let Some((numer, denom)) = text.split_once('/') {
        let numer: BigInt = numer.parse().map_err(|_| invalid())?;
        let denom: BigInt = denom.parse().map_err(|_| invalid())?;
        if denom.is_zero() {
            return Err(ScalarParseError::ZeroDenominator(literal.to_string()));
        }
        return Ok(Part::Exact(BigRational::new(numer, denom)));
    }

    if let Ok(n) = text.parse::<BigInt>() {
        return Ok(Part::Exact(BigRational::from_integer(n)));
    }

    text.parse::<f64>().map(Part::Float).map_err(|_| invalid())
}

/// Position of the sign that starts the imaginary part of `body`, if any.
///
/// Signs at the start of the literal or inside an exponent do not count.
fn imaginary_split(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e'))
}

impl FromStr for Scalar {
    type Err = ScalarParseError;

    /// Parses `3`, `-3/2`, `1.5`, `1e-3`, `inf`, `nan`, `2+3i`, `-i`, `1j`.
    ///
    /// Whitespace inside the literal is ignored. Non-finite floats parse
    /// successfully; rejecting them is the validator's job.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if literal.is_empty() {
            return Err(ScalarParseError::Empty);
        }
        let lower = literal.to_ascii_lowercase();

        let Some(body) = lower.strip_suffix('i').or_else(|| lower.strip_suffix('j')) else {
            return Ok(match parse_real(&lower, &literal)? {
                Part::Exact(r) => Scalar::from(r),
                Part::Float(x) => Scalar::Real(x),
            });
        };

        let (re_text, im_text) = match imaginary_split(body) {
            Some(pos) => body.split_at(pos),
            None => ("", body),
        };
        let re = if re_text.is_empty() {
            Part::from_integer(0)
        } else {
            parse_real(re_text, &literal)?
        };
        let im = match im_text {
            "" | "+" => Part::from_integer(1),
            "-" => Part::from_integer(-1),
            text => parse_real(text, &literal)?,
        };

        Ok(match (re, im) {
            (Part::Exact(re), Part::Exact(im)) => Scalar::from(Complex::new(re, im)),
            (re, im) => Scalar::complex(re.to_f64(), im.to_f64()),
        })
    }
}
