//! Square roots of Gaussian rationals in simplified radical form.
//!
//! [`sqrt_exact`] writes √D as `κ·√R` where κ is a Gaussian rational and the
//! radicand R is normalised:
//!
//! - [`Radicand::Unit`]: D is a perfect square in Q(i), so √D = κ exactly
//!   (√4 = 2, √−1 = i, √(−3−4i) = 1−2i).
//! - [`Radicand::Integer`]: a square-free integer s > 1; negative reals pull
//!   out a factor of `i` (√−28 = 2i·√7), and so do Gaussian values of the
//!   form s·w² (√(6i) = (1+i)·√3, √(−6+8i) = (1+2i)·√2).
//! - [`Radicand::Gaussian`]: a non-real Gaussian integer that is not an
//!   integer times a Gaussian square, with the square part of gcd(re, im)
//!   pulled out (√(8 − 24i) = 2·√(2 − 6i)).
//!
//! The square root is always the principal one (non-negative real part).

use std::fmt;

use num_bigint::BigInt;
use num_complex::{Complex, Complex64};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::gaussian::{render_sum, GaussianRational};

/// Trial divisors are tried up to this bound; larger prime factors stay
/// under the radical.
const TRIAL_DIVISION_LIMIT: u64 = 1_000_000;

/// Normalised radicand of a simplified square root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Radicand {
    /// No radical: the square root was exact.
    Unit,
    /// Square-free integer greater than one.
    Integer(BigInt),
    /// Non-real Gaussian integer that is not an integer times a square.
    Gaussian(Complex<BigInt>),
}

impl Radicand {
    /// Returns true when there is no radical left.
    pub fn is_unit(&self) -> bool {
        matches!(self, Radicand::Unit)
    }

    /// The radicand δ itself, as a Gaussian rational.
    pub fn value(&self) -> GaussianRational {
        match self {
            Radicand::Unit => GaussianRational::one(),
            Radicand::Integer(s) => Complex::new(
                BigRational::from_integer(s.clone()),
                BigRational::zero(),
            ),
            Radicand::Gaussian(z) => Complex::new(
                BigRational::from_integer(z.re.clone()),
                BigRational::from_integer(z.im.clone()),
            ),
        }
    }

    /// Numeric value of the principal square root √δ.
    pub fn sqrt_complex64(&self) -> Complex64 {
        match self {
            Radicand::Unit => Complex64::new(1.0, 0.0),
            Radicand::Integer(s) => Complex64::new(s.to_f64().unwrap_or(f64::NAN).sqrt(), 0.0),
            Radicand::Gaussian(z) => Complex64::new(
                z.re.to_f64().unwrap_or(f64::NAN),
                z.im.to_f64().unwrap_or(f64::NAN),
            )
            .sqrt(),
        }
    }
}

impl fmt::Display for Radicand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radicand::Unit => write!(f, "1"),
            Radicand::Integer(s) => write!(f, "sqrt({})", s),
            Radicand::Gaussian(z) => {
                let re = BigRational::from_integer(z.re.clone());
                let im = BigRational::from_integer(z.im.clone());
                write!(f, "sqrt({})", render_sum(&[(&re, ""), (&im, "i")]))
            }
        }
    }
}

/// Returns the integer square root of `n` when `n` is a perfect square.
pub fn perfect_square_root(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        return None;
    }
    let root = n.sqrt();
    if &root * &root == *n {
        Some(root)
    } else {
        None
    }
}

/// Splits a positive integer as `n = k² · s`.
///
/// `s` is square-free whenever every prime factor of `n` is below the trial
/// division bound or `n` has at most one factor above it.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use quadratic_core::math::radicals::square_free_split;
///
/// let (k, s) = square_free_split(&BigInt::from(72));
/// assert_eq!(k, BigInt::from(6));
/// assert_eq!(s, BigInt::from(2));
/// ```
pub fn square_free_split(n: &BigInt) -> (BigInt, BigInt) {
    let mut square = BigInt::one();
    let mut free = BigInt::one();
    for (factor, multiplicity) in factorise(n) {
        if multiplicity >= 2 {
            square *= factor.pow(multiplicity / 2);
        }
        if multiplicity % 2 == 1 {
            free *= factor;
        }
    }
    (square, free)
}

/// Factors a positive integer by trial division.
///
/// Factors below the bound are prime. A cofactor left over above it is
/// returned whole, as `(root, 2)` when it is a perfect square.
fn factorise(n: &BigInt) -> Vec<(BigInt, u32)> {
    debug_assert!(n.is_positive(), "factorise expects n > 0");

    let mut rest = n.clone();
    let mut factors = Vec::new();

    let mut p: u64 = 2;
    while p <= TRIAL_DIVISION_LIMIT {
        let prime = BigInt::from(p);
        if &prime * &prime > rest {
            break;
        }

        let mut multiplicity = 0u32;
        while (&rest % &prime).is_zero() {
            rest /= &prime;
            multiplicity += 1;
        }
        if multiplicity > 0 {
            factors.push((prime, multiplicity));
        }

        p += if p == 2 { 1 } else { 2 };
    }

    if rest > BigInt::one() {
        match perfect_square_root(&rest) {
            Some(root) => factors.push((root, 2)),
            None => factors.push((rest, 1)),
        }
    }
    factors
}

/// Candidate integer radicands for a primitive Gaussian integer with
/// square-free content: every product of the content's factors and 2.
///
/// Only 2 ramifies in Z[i], so no other prime can move between the
/// integer radicand and a Gaussian square.
fn integer_radicand_candidates(content: &BigInt) -> Vec<BigInt> {
    let two = BigInt::from(2);
    let mut primes: Vec<BigInt> = factorise(content)
        .into_iter()
        .map(|(factor, _)| factor)
        .collect();
    if !primes.contains(&two) {
        primes.push(two);
    }

    let mut candidates = vec![BigInt::one()];
    for prime in &primes {
        let extended: Vec<BigInt> = candidates.iter().map(|c| c * prime).collect();
        candidates.extend(extended);
    }
    candidates.sort();
    candidates
}

/// Exact square root of a Gaussian integer `m + n·i` with `n ≠ 0`.
///
/// Returns the principal root `u + v·i` (u > 0) when one exists in Z[i].
fn gaussian_integer_sqrt(m: &BigInt, n: &BigInt) -> Option<Complex<BigInt>> {
    let norm = m * m + n * n;
    let modulus = perfect_square_root(&norm)?;

    let two = BigInt::from(2);
    let (u_sq, u_rem) = (&modulus + m).div_rem(&two);
    let (v_sq, v_rem) = (&modulus - m).div_rem(&two);
    if !u_rem.is_zero() || !v_rem.is_zero() {
        return None;
    }

    let u = perfect_square_root(&u_sq)?;
    let v = perfect_square_root(&v_sq)?;
    let v = if n.is_negative() { -v } else { v };
    Some(Complex::new(u, v))
}

/// Principal square root of `d` as `(κ, R)` with √d = κ·√R.
///
/// # Examples
///
/// ```
/// use quadratic_core::math::gaussian::from_integers;
/// use quadratic_core::math::radicals::{sqrt_exact, Radicand};
///
/// // √4 = 2
/// let (kappa, radicand) = sqrt_exact(&from_integers(4, 0));
/// assert_eq!(kappa, from_integers(2, 0));
/// assert_eq!(radicand, Radicand::Unit);
///
/// // √-28 = 2i·√7
/// let (kappa, radicand) = sqrt_exact(&from_integers(-28, 0));
/// assert_eq!(kappa, from_integers(0, 2));
/// assert_eq!(radicand.to_string(), "sqrt(7)");
/// ```
pub fn sqrt_exact(d: &GaussianRational) -> (GaussianRational, Radicand) {
    if d.is_zero() {
        return (GaussianRational::zero(), Radicand::Unit);
    }

    // √d = √(d·q²) / q with d·q² a Gaussian integer
    let q = d.re.denom().lcm(d.im.denom());
    let q_squared = BigRational::from_integer(&q * &q);
    let m = (&d.re * &q_squared).to_integer();
    let n = (&d.im * &q_squared).to_integer();
    let inv_q = BigRational::new(BigInt::one(), q.clone());

    if n.is_zero() {
        let (k, s) = square_free_split(&m.abs());
        let magnitude = BigRational::from_integer(k) * &inv_q;
        let kappa = if m.is_negative() {
            Complex::new(BigRational::zero(), magnitude)
        } else {
            Complex::new(magnitude, BigRational::zero())
        };
        let radicand = if s.is_one() {
            Radicand::Unit
        } else {
            Radicand::Integer(s)
        };
        return (kappa, radicand);
    }

    let (k, content) = square_free_split(&m.gcd(&n));
    let k_squared = &k * &k;
    let reduced = Complex::new(&m / &k_squared, &n / &k_squared);

    // m + n·i = s·w²/s², so √(m + n·i) = (w/s)·√s
    for s in integer_radicand_candidates(&content) {
        if let Some(w) = gaussian_integer_sqrt(&(&reduced.re * &s), &(&reduced.im * &s)) {
            let scale = BigRational::new(k.clone(), &q * &s);
            let kappa = Complex::new(
                BigRational::from_integer(w.re) * &scale,
                BigRational::from_integer(w.im) * &scale,
            );
            let radicand = if s.is_one() {
                Radicand::Unit
            } else {
                Radicand::Integer(s)
            };
            return (kappa, radicand);
        }
    }

    let kappa = Complex::new(BigRational::from_integer(k) * inv_q, BigRational::zero());
    (kappa, Radicand::Gaussian(reduced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::gaussian::{from_integers, to_complex64};
    use approx::assert_relative_eq;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(big(n), big(d))
    }

    /// Squares κ·√R back into a Gaussian rational.
    fn reassemble(kappa: &GaussianRational, radicand: &Radicand) -> GaussianRational {
        kappa * kappa * radicand.value()
    }

    #[test]
    fn test_square_free_split_prime() {
        assert_eq!(square_free_split(&big(29)), (big(1), big(29)));
    }

    #[test]
    fn test_square_free_split_perfect_square() {
        assert_eq!(square_free_split(&big(144)), (big(12), big(1)));
    }

    #[test]
    fn test_square_free_split_mixed() {
        assert_eq!(square_free_split(&big(28)), (big(2), big(7)));
        assert_eq!(square_free_split(&big(1)), (big(1), big(1)));
    }

    #[test]
    fn test_square_free_split_large_prime_square() {
        // 1_000_003 is prime and above the trial division bound
        let p = big(1_000_003);
        let (k, s) = square_free_split(&(&p * &p * big(3)));
        assert_eq!(k, p);
        assert_eq!(s, big(3));
    }

    #[test]
    fn test_perfect_square_root() {
        assert_eq!(perfect_square_root(&big(49)), Some(big(7)));
        assert_eq!(perfect_square_root(&big(50)), None);
        assert_eq!(perfect_square_root(&big(-4)), None);
        assert_eq!(perfect_square_root(&big(0)), Some(big(0)));
    }

    #[test]
    fn test_sqrt_zero() {
        let (kappa, radicand) = sqrt_exact(&GaussianRational::zero());
        assert!(kappa.is_zero());
        assert!(radicand.is_unit());
    }

    #[test]
    fn test_sqrt_negative_one_is_i() {
        let (kappa, radicand) = sqrt_exact(&from_integers(-1, 0));
        assert_eq!(kappa, from_integers(0, 1));
        assert_eq!(radicand, Radicand::Unit);
    }

    #[test]
    fn test_sqrt_rational() {
        // √(9/8) = 3/(2√2) = (3/4)·√2
        let d = Complex::new(ratio(9, 8), BigRational::zero());
        let (kappa, radicand) = sqrt_exact(&d);
        assert_eq!(kappa, Complex::new(ratio(3, 4), BigRational::zero()));
        assert_eq!(radicand, Radicand::Integer(big(2)));
    }

    #[test]
    fn test_sqrt_perfect_gaussian_square() {
        // (1 - 2i)² = -3 - 4i
        let (kappa, radicand) = sqrt_exact(&from_integers(-3, -4));
        assert_eq!(kappa, from_integers(1, -2));
        assert!(radicand.is_unit());

        // (2 + i)² = 3 + 4i
        let (kappa, _) = sqrt_exact(&from_integers(3, 4));
        assert_eq!(kappa, from_integers(2, 1));

        // 2i = (1 + i)²
        let (kappa, _) = sqrt_exact(&from_integers(0, 2));
        assert_eq!(kappa, from_integers(1, 1));
    }

    #[test]
    fn test_sqrt_gaussian_integer_times_square() {
        // -6 + 8i = 2·(1 + 2i)²
        let (kappa, radicand) = sqrt_exact(&from_integers(-6, 8));
        assert_eq!(kappa, from_integers(1, 2));
        assert_eq!(radicand, Radicand::Integer(big(2)));

        // 6i = 3·(1 + i)²
        let (kappa, radicand) = sqrt_exact(&from_integers(0, 6));
        assert_eq!(kappa, from_integers(1, 1));
        assert_eq!(radicand, Radicand::Integer(big(3)));
    }

    #[test]
    fn test_sqrt_gaussian_radicand_absorbs_two() {
        // 3i = 6·((1 + i)/2)²
        let (kappa, radicand) = sqrt_exact(&from_integers(0, 3));
        assert_eq!(kappa, Complex::new(ratio(1, 2), ratio(1, 2)));
        assert_eq!(radicand, Radicand::Integer(big(6)));
    }

    #[test]
    fn test_sqrt_rational_imaginary() {
        // -3i/2 = 3·((1 - i)/2)²
        let d = Complex::new(BigRational::zero(), ratio(-3, 2));
        let (kappa, radicand) = sqrt_exact(&d);
        assert_eq!(kappa, Complex::new(ratio(1, 2), ratio(-1, 2)));
        assert_eq!(radicand, Radicand::Integer(big(3)));
    }

    #[test]
    fn test_integer_radicand_candidates() {
        assert_eq!(integer_radicand_candidates(&big(1)), vec![big(1), big(2)]);
        assert_eq!(
            integer_radicand_candidates(&big(6)),
            vec![big(1), big(2), big(3), big(6)]
        );
        assert_eq!(
            integer_radicand_candidates(&big(15)),
            vec![big(1), big(2), big(3), big(5), big(6), big(10), big(15), big(30)]
        );
    }

    #[test]
    fn test_sqrt_gaussian_pulls_out_content() {
        let (kappa, radicand) = sqrt_exact(&from_integers(8, -24));
        assert_eq!(kappa, from_integers(2, 0));
        assert_eq!(radicand, Radicand::Gaussian(Complex::new(big(2), big(-6))));
        assert_eq!(radicand.to_string(), "sqrt(2 - 6*i)");
    }

    #[test]
    fn test_sqrt_gaussian_with_denominator() {
        // d = (1 + i)/4 → √d = √(1 + i)/2
        let d = Complex::new(ratio(1, 4), ratio(1, 4));
        let (kappa, radicand) = sqrt_exact(&d);
        assert_eq!(kappa, Complex::new(ratio(1, 2), BigRational::zero()));
        assert_eq!(radicand, Radicand::Gaussian(Complex::new(big(1), big(1))));
    }

    #[test]
    fn test_sqrt_reassembles_exactly() {
        let samples = [
            from_integers(29, 0),
            from_integers(-12, 0),
            from_integers(4, -12),
            from_integers(-7, 3),
            from_integers(-6, 8),
            from_integers(0, -10),
            Complex::new(ratio(5, 6), ratio(-7, 9)),
        ];
        for d in &samples {
            let (kappa, radicand) = sqrt_exact(d);
            assert_eq!(&reassemble(&kappa, &radicand), d);
        }
    }

    #[test]
    fn test_sqrt_is_principal() {
        for d in [
            from_integers(-7, 3),
            from_integers(-6, 8),
            from_integers(0, -6),
            from_integers(5, -10),
        ] {
            let (kappa, radicand) = sqrt_exact(&d);
            let numeric = to_complex64(&kappa) * radicand.sqrt_complex64();
            let expected = to_complex64(&d).sqrt();
            assert_relative_eq!(numeric.re, expected.re, epsilon = 1e-12);
            assert_relative_eq!(numeric.im, expected.im, epsilon = 1e-12);
        }
    }
}
