//! Property tests for the Laguerre expansion.

use laguerre_algebra::{LaguerreEvaluator, associated_laguerre, to_latex};
use laguerre_model::PolynomialRequest;
use proptest::prelude::*;

/// Direct floating-point evaluation of the defining sum, with the sum of
/// absolute term values as an error scale.
fn defining_sum(n: u32, l: u32, x: f64) -> (f64, f64) {
    let mut total = 0.0;
    let mut scale = 1.0;
    for k in 0..=n {
        let mut binom = 1.0;
        let (top, choose) = (f64::from(n + l), n - k);
        for i in 0..choose {
            binom *= (top - f64::from(i)) / f64::from(i + 1);
        }
        let factorial: f64 = (1..=k).map(f64::from).product();
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        let term = binom * x.powi(k as i32) / factorial;
        total += sign * term;
        scale += term.abs();
    }
    (total, scale)
}

proptest! {
    #[test]
    fn expansion_matches_defining_sum(n in 0u32..=12, l in 0u32..=12, x in -3.0f64..6.0) {
        let poly = associated_laguerre(n, l);
        let (expected, scale) = defining_sum(n, l, x);
        let actual = poly.eval_f64(x);
        let tolerance = 1e-12 * scale;
        prop_assert!((actual - expected).abs() <= tolerance, "n={} l={} x={}: {} vs {}", n, l, x, actual, expected);
    }

    #[test]
    fn zeroth_polynomial_is_one(l in 0u32..=500) {
        prop_assert_eq!(to_latex(&associated_laguerre(0, l), "x"), "1");
    }

    #[test]
    fn evaluation_is_deterministic(n in 0u32..=15, l in 0u32..=15) {
        let evaluator = LaguerreEvaluator::default();
        let first = evaluator.expand(PolynomialRequest::new(n, l)).unwrap();
        let second = evaluator.expand(PolynomialRequest::new(n, l)).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn degree_ten_matches_reference_markup() {
    let expansion = LaguerreEvaluator::default()
        .expand(PolynomialRequest::new(10, 0))
        .unwrap();
    assert_eq!(
        expansion.markup,
        r"\frac{x^{10}}{3628800} - \frac{x^{9}}{36288} + \frac{x^{8}}{896} - \frac{x^{7}}{42} + \frac{7 x^{6}}{24} - \frac{21 x^{5}}{10} + \frac{35 x^{4}}{4} - 20 x^{3} + \frac{45 x^{2}}{2} - 10 x + 1"
    );
}

#[test]
fn value_at_zero_is_binomial() {
    // L_n^l(0) = C(n + l, n)
    let poly = associated_laguerre(6, 3);
    assert!((poly.eval_f64(0.0) - 84.0).abs() < 1e-12);
}
