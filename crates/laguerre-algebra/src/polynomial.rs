//! Dense univariate polynomials over Q.

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Polynomial stored as coefficients in ascending powers.
///
/// Invariant: the highest stored coefficient is non-zero, so the zero
/// polynomial has no coefficients at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RationalPolynomial {
    coefficients: Vec<BigRational>,
}

impl RationalPolynomial {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from ascending coefficients, trimming trailing zeros.
    pub fn from_coefficients(coefficients: Vec<BigRational>) -> Self {
        let mut poly = Self { coefficients };
        poly.normalize();
        poly
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Coefficient of x^power (zero beyond the degree).
    pub fn coefficient(&self, power: usize) -> BigRational {
        self.coefficients
            .get(power)
            .cloned()
            .unwrap_or_else(BigRational::zero)
    }

    /// Ascending coefficients, including interior zeros.
    pub fn coefficients(&self) -> &[BigRational] {
        &self.coefficients
    }

    /// Non-zero terms as `(power, coefficient)`, highest power first.
    pub fn terms_descending(&self) -> impl Iterator<Item = (usize, &BigRational)> {
        self.coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
    }

    /// Add `coefficient * x^power` in place.
    pub fn add_term(&mut self, power: usize, coefficient: BigRational) {
        if coefficient.is_zero() {
            return;
        }
        if self.coefficients.len() <= power {
            self.coefficients.resize(power + 1, BigRational::zero());
        }
        self.coefficients[power] += coefficient;
        self.normalize();
    }

    /// Exact evaluation via Horner's scheme.
    pub fn eval_exact(&self, x: &BigRational) -> BigRational {
        self.coefficients
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * x + c)
    }

    /// Floating-point evaluation. Coefficients that do not fit an `f64`
    /// make the result NaN.
    pub fn eval_f64(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| {
            acc * x + c.to_f64().unwrap_or(f64::NAN)
        })
    }

    /// Coefficients converted once for repeated numeric evaluation.
    pub fn to_f64_coefficients(&self) -> Vec<f64> {
        self.coefficients
            .iter()
            .map(|c| c.to_f64().unwrap_or(f64::NAN))
            .collect()
    }

    fn normalize(&mut self) {
        while self.coefficients.last().is_some_and(Zero::is_zero) {
            self.coefficients.pop();
        }
    }
}

/// Horner evaluation over pre-converted ascending coefficients.
pub fn horner_f64(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_trailing_zeros_are_trimmed() {
        let poly = RationalPolynomial::from_coefficients(vec![q(1, 1), q(0, 1), q(0, 1)]);
        assert_eq!(poly.degree(), Some(0));
        assert!(RationalPolynomial::from_coefficients(vec![q(0, 1)]).is_zero());
    }

    #[test]
    fn test_add_term_cancels_to_zero() {
        let mut poly = RationalPolynomial::zero();
        poly.add_term(3, q(1, 2));
        assert_eq!(poly.degree(), Some(3));
        poly.add_term(3, q(-1, 2));
        assert!(poly.is_zero());
        assert_eq!(poly.degree(), None);
    }

    #[test]
    fn test_terms_descending_skips_zeros() {
        // 1 + x^2/2
        let poly = RationalPolynomial::from_coefficients(vec![q(1, 1), q(0, 1), q(1, 2)]);
        let powers: Vec<usize> = poly.terms_descending().map(|(p, _)| p).collect();
        assert_eq!(powers, vec![2, 0]);
    }

    #[test]
    fn test_eval_exact_and_float_agree() {
        // 1 - 2x + x^2/2
        let poly = RationalPolynomial::from_coefficients(vec![q(1, 1), q(-2, 1), q(1, 2)]);
        assert_eq!(poly.eval_exact(&q(2, 1)), q(-1, 1));
        assert!((poly.eval_f64(2.0) + 1.0).abs() < 1e-12);
        let coeffs = poly.to_f64_coefficients();
        assert!((horner_f64(&coeffs, 3.0) - poly.eval_f64(3.0)).abs() < 1e-12);
    }
}
