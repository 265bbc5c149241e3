//! The algebra seam.

use laguerre_algebra::LaguerreEvaluator;
use laguerre_model::{EvaluationError, PolynomialRequest};

/// Expands a request into typesetting markup.
///
/// Takes `&mut self` so implementations may cache.
pub trait Evaluator {
    fn evaluate(&mut self, request: PolynomialRequest) -> Result<String, EvaluationError>;
}

impl Evaluator for LaguerreEvaluator {
    fn evaluate(&mut self, request: PolynomialRequest) -> Result<String, EvaluationError> {
        self.expand(request).map(|expansion| expansion.markup)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&mut self, request: PolynomialRequest) -> Result<String, EvaluationError> {
        (**self).evaluate(request)
    }
}
