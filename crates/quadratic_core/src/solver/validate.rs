//! Input validation.
//!
//! Typed callers only need [`is_valid_number`]: the [`Scalar`] enum already
//! rules out booleans, strings and missing values, leaving infinities and
//! NaN as the only way to be wrong.
//!
//! Deserialised input goes through [`validate`], which accepts
//!
//! | JSON                          | Scalar                        |
//! |-------------------------------|-------------------------------|
//! | integer                       | `Integer` (or exact big int)  |
//! | float                         | `Real`                        |
//! | `{"re": 1, "im": 2}`          | `Gaussian`                    |
//! | `{"re": 1.5, "im": -0.5}`     | `Complex`                     |
//! | `{"num": 1, "den": 3}`        | `Rational`                    |
//!
//! and rejects `null`, absent values, booleans, strings and arrays.

use std::fmt;

use num_bigint::BigInt;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::solve::DEFAULT_TARGET;
use crate::types::{Scalar, SolveError};

/// Returns true when `value` is acceptable as a coefficient or target.
///
/// # Examples
///
/// ```
/// use quadratic_core::{is_valid_number, Scalar};
///
/// assert!(is_valid_number(&Scalar::from(3)));
/// assert!(is_valid_number(&Scalar::complex(1.0, -2.0)));
/// assert!(!is_valid_number(&Scalar::from(f64::INFINITY)));
/// assert!(!is_valid_number(&Scalar::complex(0.0, f64::NAN)));
/// ```
pub fn is_valid_number(value: &Scalar) -> bool {
    value.is_finite()
}

/// Validates a deserialised value for `parameter`.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for anything that is not a finite
/// real or complex number.
///
/// # Examples
///
/// ```
/// use quadratic_core::{validate, Scalar};
/// use serde_json::json;
///
/// assert_eq!(validate("a", Some(&json!(2))).unwrap(), Scalar::from(2));
/// assert_eq!(
///     validate("a", Some(&json!({"re": 0, "im": 1}))).unwrap(),
///     Scalar::i()
/// );
/// assert!(validate("a", Some(&json!(true))).is_err());
/// assert!(validate("a", Some(&json!("abc"))).is_err());
/// assert!(validate("a", None).is_err());
/// ```
pub fn validate(parameter: &'static str, value: Option<&Value>) -> Result<Scalar, SolveError> {
    let scalar = match value {
        None | Some(Value::Null) => return Err(SolveError::invalid(parameter, "value is missing")),
        Some(Value::Bool(_)) => {
            return Err(SolveError::invalid(
                parameter,
                "boolean values are not numbers",
            ))
        }
        Some(Value::String(_)) => {
            return Err(SolveError::invalid(parameter, "strings are not numbers"))
        }
        Some(Value::Array(_)) => {
            return Err(SolveError::invalid(parameter, "arrays are not numbers"))
        }
        Some(Value::Number(n)) => from_json_number(parameter, n)?,
        Some(Value::Object(map)) => from_json_object(parameter, map)?,
    };

    if !is_valid_number(&scalar) {
        return Err(SolveError::invalid(parameter, "value is not finite"));
    }
    Ok(scalar)
}

fn from_json_number(parameter: &'static str, n: &Number) -> Result<Scalar, SolveError> {
    if let Some(i) = n.as_i64() {
        return Ok(Scalar::Integer(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Scalar::from(BigInt::from(u)));
    }
    n.as_f64()
        .map(Scalar::Real)
        .ok_or_else(|| SolveError::invalid(parameter, format!("unsupported number {}", n)))
}

/// Complex `{re, im}` or rational `{num, den}` object.
fn from_json_object(
    parameter: &'static str,
    map: &Map<String, Value>,
) -> Result<Scalar, SolveError> {
    if map.contains_key("re") || map.contains_key("im") {
        let re = complex_component(parameter, map.get("re"))?;
        let im = complex_component(parameter, map.get("im"))?;
        return Ok(match (re.to_exact(), im.to_exact()) {
            (Some(re_exact), Some(im_exact)) if re.is_exact() && im.is_exact() => {
                Scalar::from(Complex::new(re_exact.re, im_exact.re))
            }
            _ => Scalar::complex(re.to_complex64().re, im.to_complex64().re),
        });
    }

    if map.contains_key("num") {
        let numer = map
            .get("num")
            .and_then(Value::as_i64)
            .ok_or_else(|| SolveError::invalid(parameter, "`num` must be an integer"))?;
        let denom = match map.get("den") {
            None => 1,
            Some(value) => value
                .as_i64()
                .ok_or_else(|| SolveError::invalid(parameter, "`den` must be an integer"))?,
        };
        return Scalar::fraction(numer, denom)
            .map_err(|e| SolveError::invalid(parameter, e.to_string()));
    }

    Err(SolveError::invalid(
        parameter,
        "objects must have `re`/`im` or `num`/`den` fields",
    ))
}

/// A real component of a complex object; absent means zero.
fn complex_component(
    parameter: &'static str,
    value: Option<&Value>,
) -> Result<Scalar, SolveError> {
    match value {
        None => Ok(Scalar::Integer(0)),
        Some(Value::Number(n)) => from_json_number(parameter, n),
        Some(_) => Err(SolveError::invalid(
            parameter,
            "complex components must be numbers",
        )),
    }
}

fn default_target() -> Option<Value> {
    Some(Value::from(DEFAULT_TARGET))
}

/// Deserialised solver call.
///
/// Absent or `null` coefficients are kept as `None` and rejected by
/// validation; an absent `target` defaults to 7.
///
/// # Examples
///
/// ```
/// use quadratic_core::{solve_request, SolveRequest};
///
/// let request: SolveRequest = serde_json::from_str(r#"{"a": 0, "b": 2, "c": 5}"#).unwrap();
/// assert_eq!(solve_request(&request).to_string(), "[1]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Quadratic coefficient
    #[serde(default)]
    pub a: Option<Value>,
    /// Linear coefficient
    #[serde(default)]
    pub b: Option<Value>,
    /// Constant term
    #[serde(default)]
    pub c: Option<Value>,
    /// Right-hand side
    #[serde(default = "default_target")]
    pub target: Option<Value>,
}

impl SolveRequest {
    /// Creates a request with the default target.
    pub fn new(a: impl Into<Value>, b: impl Into<Value>, c: impl Into<Value>) -> Self {
        Self {
            a: Some(a.into()),
            b: Some(b.into()),
            c: Some(c.into()),
            target: default_target(),
        }
    }

    /// Replaces the target.
    pub fn with_target(mut self, target: impl Into<Value>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Validates all four parameters, returning the first rejection.
    pub fn validate(&self) -> Result<[Scalar; 4], SolveError> {
        Ok([
            validate("a", self.a.as_ref())?,
            validate("b", self.b.as_ref())?,
            validate("c", self.c.as_ref())?,
            validate("target", self.target.as_ref())?,
        ])
    }
}

impl Default for SolveRequest {
    fn default() -> Self {
        Self {
            a: None,
            b: None,
            c: None,
            target: default_target(),
        }
    }
}

impl fmt::Display for SolveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: &Option<Value>| match value {
            Some(value) => value.to_string(),
            None => "<missing>".to_string(),
        };
        write!(
            f,
            "a={}, b={}, c={}, target={}",
            show(&self.a),
            show(&self.b),
            show(&self.c),
            show(&self.target)
        )
    }
}
