//! End-to-end scenarios through the public API.

use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;
use quadratic_core::math::Radicand;
use quadratic_core::types::{CONTRADICTION_MESSAGE, IDENTITY_MESSAGE, INVALID_INPUT_MESSAGE};
use quadratic_core::{
    solve, solve_default, solve_request, solve_text, Root, Scalar, Solution, SolveRequest,
};
use serde_json::json;

fn roots(solution: &Solution) -> Vec<String> {
    solution
        .roots()
        .expect("expected roots")
        .iter()
        .map(Root::to_string)
        .collect()
}

fn message(solution: &Solution) -> &'static str {
    solution.status().expect("expected a status").message()
}

#[test]
fn test_irrational_pair() {
    assert_eq!(
        roots(&solve(1, -3, 2, 7)),
        ["3/2 - sqrt(29)/2", "3/2 + sqrt(29)/2"]
    );
}

#[test]
fn test_square_root_of_target() {
    assert_eq!(roots(&solve(1, 0, 0, 7)), ["-sqrt(7)", "sqrt(7)"]);
}

#[test]
fn test_purely_imaginary_pair() {
    let solution = solve(1, 0, 1, 0);
    assert_eq!(roots(&solution), ["-i", "i"]);
    for root in solution.roots().unwrap() {
        assert!(root.is_imaginary());
        assert_eq!(root.to_complex64().re, 0.0);
    }
}

#[test]
fn test_identity() {
    assert_eq!(message(&solve(0, 0, 7, 7)), IDENTITY_MESSAGE);
}

#[test]
fn test_contradiction() {
    assert_eq!(message(&solve(0, 0, 6, 7)), CONTRADICTION_MESSAGE);
}

#[test]
fn test_linear_with_default_target() {
    assert_eq!(roots(&solve(0, 2, 5, 7)), ["1"]);
    assert_eq!(roots(&solve_default(0, 2, 5)), ["1"]);
}

#[test]
fn test_repeated_root_listed_twice() {
    assert_eq!(roots(&solve(1, 2, 8, 7)), ["-1", "-1"]);
}

#[test]
fn test_string_input_rejected() {
    let request = SolveRequest::new("abc", 2, 5).with_target(7);
    assert_eq!(message(&solve_request(&request)), INVALID_INPUT_MESSAGE);
}

#[test]
fn test_boolean_input_rejected() {
    let request = SolveRequest::new(true, 2, 3);
    assert_eq!(message(&solve_request(&request)), INVALID_INPUT_MESSAGE);
}

#[test]
fn test_infinite_input_rejected() {
    assert_eq!(message(&solve(f64::INFINITY, 2, 3, 7)), INVALID_INPUT_MESSAGE);
    assert_eq!(message(&solve(1, f64::NAN, 3, 7)), INVALID_INPUT_MESSAGE);
}

#[test]
fn test_missing_input_rejected() {
    let request: SolveRequest = serde_json::from_value(json!({"a": 1, "c": 3})).unwrap();
    assert_eq!(message(&solve_request(&request)), INVALID_INPUT_MESSAGE);
}

#[test]
fn test_complex_leading_coefficient() {
    let (a, b, c, t) = (Scalar::i(), Scalar::from(2), Scalar::from(3), Scalar::from(0));
    let solution = solve(a.clone(), b.clone(), c.clone(), t.clone());
    let found = solution.roots().unwrap();
    assert_eq!(found.len(), 2);
    for root in found {
        assert!(root.is_exact());
        assert!(root.residual(&a, &b, &c, &t).unwrap().is_zero());
    }
}

fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

#[test]
fn test_gaussian_discriminant_reduces_to_integer_radicand() {
    // x² + 3/2 - 2i = 0, discriminant -6 + 8i = 2·(1 + 2i)²
    let solution = solve_text("1", "0", "3/2-2i", "0");
    assert_eq!(
        roots(&solution),
        ["-sqrt(2)/2 - sqrt(2)*i", "sqrt(2)/2 + sqrt(2)*i"]
    );
    let upper = solution.roots().unwrap()[1].as_exact().unwrap();
    assert_eq!(*upper.radicand(), Radicand::Integer(BigInt::from(2)));
    assert_eq!(
        upper.radical_coefficient(),
        &Complex::new(ratio(1, 2), ratio(1, 1))
    );
}

#[test]
fn test_imaginary_discriminant_reduces_to_integer_radicand() {
    // x² - 3i/2 = 0, discriminant 6i = 3·(1 + i)²
    let solution = solve_text("1", "0", "-3/2i", "0");
    assert_eq!(
        roots(&solution),
        ["-sqrt(3)/2 - sqrt(3)*i/2", "sqrt(3)/2 + sqrt(3)*i/2"]
    );
    for root in solution.roots().unwrap() {
        let exact = root.as_exact().unwrap();
        assert_eq!(*exact.radicand(), Radicand::Integer(BigInt::from(3)));
        assert!(exact.rational_part().re.is_integer());
    }
}

#[test]
fn test_complex_discriminant_from_real_coefficients() {
    // x² + x + 1 = 0
    assert_eq!(
        roots(&solve(1, 1, 1, 0)),
        ["-1/2 - sqrt(3)*i/2", "-1/2 + sqrt(3)*i/2"]
    );
}

#[test]
fn test_float_coefficients_stay_numeric() {
    let solution = solve(1.5, 2.8, 6, 7);
    let found = solution.roots().unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|root| !root.is_exact()));

    let (a, b, c, t) = (
        Scalar::from(1.5),
        Scalar::from(2.8),
        Scalar::from(6),
        Scalar::from(7),
    );
    for root in found {
        assert!(root.numeric_residual(&a, &b, &c, &t).norm() < 1e-10);
    }
}

#[test]
fn test_json_output_shapes() {
    assert_eq!(
        serde_json::to_value(solve(0, 2, 5, 7)).unwrap(),
        json!({"roots": ["1"]})
    );
    assert_eq!(
        serde_json::to_value(solve(0, 0, 6, 7)).unwrap(),
        json!({"status": CONTRADICTION_MESSAGE})
    );
}

#[test]
fn test_repeated_calls_agree() {
    assert_eq!(solve(1, -3, 2, 7), solve(1, -3, 2, 7));
    assert_eq!(solve(1.5, 2.8, 6, 7), solve(1.5, 2.8, 6, 7));
}
