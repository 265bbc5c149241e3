//! LaTeX printing of expanded polynomials in canonical term order.
//!
//! Terms are printed highest power first. The one exception is a binomial
//! made of a positive constant and a negative variable term, which prints
//! the constant first (`1 - x` rather than `- x + 1`).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

use crate::polynomial::RationalPolynomial;

/// Render `poly` as LaTeX over the variable `var`.
pub fn to_latex(poly: &RationalPolynomial, var: &str) -> String {
    let mut terms: Vec<(usize, &BigRational)> = poly.terms_descending().collect();
    if terms.is_empty() {
        return "0".to_string();
    }
    if let [(_, leading), (0, constant)] = terms.as_slice()
        && leading.is_negative()
        && constant.is_positive()
    {
        terms.swap(0, 1);
    }

    let mut out = String::new();
    for (index, (power, coefficient)) in terms.into_iter().enumerate() {
        let body = term_body(&coefficient.abs(), power, var);
        match (index, coefficient.is_negative()) {
            (0, false) => {}
            (0, true) => out.push_str("- "),
            (_, false) => out.push_str(" + "),
            (_, true) => out.push_str(" - "),
        }
        out.push_str(&body);
    }
    out
}

fn term_body(magnitude: &BigRational, power: usize, var: &str) -> String {
    let monomial = match power {
        0 => None,
        1 => Some(var.to_string()),
        p => Some(format!("{var}^{{{p}}}")),
    };
    let numer = magnitude.numer();
    let numerator = match monomial {
        None => numer.to_string(),
        Some(m) if numer.is_one() => m,
        Some(m) => format!("{numer} {m}"),
    };
    let denom: &BigInt = magnitude.denom();
    if denom.is_one() {
        numerator
    } else {
        format!("\\frac{{{numerator}}}{{{denom}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laguerre::associated_laguerre;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_zero_and_constant() {
        assert_eq!(to_latex(&RationalPolynomial::zero(), "x"), "0");
        let poly = RationalPolynomial::from_coefficients(vec![q(-3, 2)]);
        assert_eq!(to_latex(&poly, "x"), r"- \frac{3}{2}");
    }

    #[test]
    fn test_known_expansions() {
        let cases = [
            (0, 0, "1"),
            (1, 0, "1 - x"),
            (1, 3, "4 - x"),
            (2, 0, r"\frac{x^{2}}{2} - 2 x + 1"),
            (2, 1, r"\frac{x^{2}}{2} - 3 x + 3"),
            (
                3,
                0,
                r"- \frac{x^{3}}{6} + \frac{3 x^{2}}{2} - 3 x + 1",
            ),
            (3, 1, r"- \frac{x^{3}}{6} + 2 x^{2} - 6 x + 4"),
            (
                4,
                2,
                r"\frac{x^{4}}{24} - x^{3} + \frac{15 x^{2}}{2} - 20 x + 15",
            ),
        ];
        for (n, l, expected) in cases {
            assert_eq!(
                to_latex(&associated_laguerre(n, l), "x"),
                expected,
                "L_{n}^{l}"
            );
        }
    }

    #[test]
    fn test_constant_first_only_for_mixed_sign_binomials() {
        // -x^2 - 1 keeps descending order
        let poly = RationalPolynomial::from_coefficients(vec![q(-1, 1), q(0, 1), q(-1, 1)]);
        assert_eq!(to_latex(&poly, "x"), "- x^{2} - 1");
        // 2 - 3x/2
        let poly = RationalPolynomial::from_coefficients(vec![q(2, 1), q(-3, 2)]);
        assert_eq!(to_latex(&poly, "x"), r"2 - \frac{3 x}{2}");
        // -x^2 + x has no constant
        let poly = RationalPolynomial::from_coefficients(vec![q(0, 1), q(1, 1), q(-1, 1)]);
        assert_eq!(to_latex(&poly, "x"), "- x^{2} + x");
    }
}
