//! L_n^l(x) = sum_{k=0}^{n} (-1)^k C(n+l, n-k) x^k / k!

use laguerre_model::{EvaluationError, EvaluationConfig, PolynomialRequest};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Signed;
use tracing::{debug, debug_span};

use crate::combinatorics::{binomial, factorial, generalized_binomial};
use crate::latex::to_latex;
use crate::polynomial::RationalPolynomial;

/// Expand the defining sum into an exact polynomial.
pub fn associated_laguerre(n: u32, l: u32) -> RationalPolynomial {
    let mut poly = RationalPolynomial::zero();
    for k in 0..=n {
        let magnitude = BigRational::new(binomial(n + l, n - k), factorial(k));
        let coefficient = if k.is_even() { magnitude } else { -magnitude };
        poly.add_term(k as usize, coefficient);
    }
    poly
}

/// L_n^l for any integer order. A negative `l` takes the generalized
/// binomial coefficient, so the top coefficient is still (-1)^n / n!.
pub fn associated_laguerre_any_order(n: u32, l: i64) -> RationalPolynomial {
    if let Ok(order) = u32::try_from(l)
        && n.checked_add(order).is_some()
    {
        return associated_laguerre(n, order);
    }
    let upper = BigInt::from(n) + l;
    let mut poly = RationalPolynomial::zero();
    for k in 0..=n {
        let magnitude = BigRational::new(generalized_binomial(&upper, n - k), factorial(k));
        let coefficient = if k.is_even() { magnitude } else { -magnitude };
        poly.add_term(k as usize, coefficient);
    }
    poly
}

/// Result of one evaluation: the exact polynomial and its markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub request: PolynomialRequest,
    pub polynomial: RationalPolynomial,
    pub markup: String,
}

/// Evaluator with a degree budget.
///
/// The exact arithmetic itself never overflows; the budget stands in for
/// the resource limit a user would otherwise hit as a frozen window.
#[derive(Debug, Clone)]
pub struct LaguerreEvaluator {
    max_degree: u32,
}

impl LaguerreEvaluator {
    pub fn new(config: &EvaluationConfig) -> Self {
        Self {
            max_degree: config.max_degree,
        }
    }

    pub fn max_degree(&self) -> u32 {
        self.max_degree
    }

    pub fn expand(&self, request: PolynomialRequest) -> Result<Expansion, EvaluationError> {
        let span = debug_span!("expand", n = request.n, l = request.l);
        let _guard = span.enter();

        if request.n > self.max_degree {
            return Err(EvaluationError::BudgetExceeded {
                degree: request.n,
                limit: self.max_degree,
            });
        }
        // n + l must stay representable for the binomial upper index.
        if request.n.checked_add(request.l).is_none() {
            return Err(EvaluationError::Internal(format!(
                "n + l overflows for n={}, l={}",
                request.n, request.l
            )));
        }

        let polynomial = associated_laguerre(request.n, request.l);
        check_leading_coefficient(request.n, &polynomial)?;
        let markup = to_latex(&polynomial, "x");
        debug!(terms = request.n + 1, chars = markup.len(), "expanded");

        Ok(Expansion {
            request,
            polynomial,
            markup,
        })
    }

    /// Markup for any pair of integers, as typed at the interactive prompt.
    ///
    /// A negative degree is the empty sum and gives `0`. A negative order is
    /// expanded with the generalized binomial coefficient.
    pub fn expand_integers(&self, n: i64, l: i64) -> Result<String, EvaluationError> {
        let span = debug_span!("expand_integers", n, l);
        let _guard = span.enter();

        if n < 0 {
            debug!("negative degree, empty sum");
            return Ok(to_latex(&RationalPolynomial::zero(), "x"));
        }
        let degree = u32::try_from(n).unwrap_or(u32::MAX);
        if degree > self.max_degree {
            return Err(EvaluationError::BudgetExceeded {
                degree,
                limit: self.max_degree,
            });
        }
        let polynomial = associated_laguerre_any_order(degree, l);
        check_leading_coefficient(degree, &polynomial)?;
        Ok(to_latex(&polynomial, "x"))
    }
}

impl Default for LaguerreEvaluator {
    fn default() -> Self {
        Self::new(&EvaluationConfig::default())
    }
}

/// The top coefficient of L_n^l is (-1)^n / n!; anything else means the
/// expansion went wrong.
fn check_leading_coefficient(
    n: u32,
    polynomial: &RationalPolynomial,
) -> Result<(), EvaluationError> {
    if polynomial.degree() != Some(n as usize) {
        return Err(EvaluationError::Internal(format!(
            "expected degree {n}, got {:?}",
            polynomial.degree()
        )));
    }
    let leading = polynomial.coefficient(n as usize);
    let expected_negative = n.is_odd();
    let expected_magnitude = BigRational::from_integer(factorial(n));
    if leading.is_negative() != expected_negative || leading.abs().recip() != expected_magnitude {
        return Err(EvaluationError::Internal(format!(
            "unexpected leading coefficient {leading}"
        )));
    }
    Ok(())
}
