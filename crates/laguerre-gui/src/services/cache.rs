//! LRU cache in front of the polynomial evaluator.

use std::num::NonZeroUsize;

use laguerre_core::Evaluator;
use laguerre_model::{EvaluationError, PolynomialRequest};
use lru::LruCache;

/// Remembers the markup of recently evaluated requests.
///
/// Errors are never cached, so a request refused under one budget is
/// evaluated again once the budget changes.
pub struct CachedEvaluator<E> {
    inner: E,
    cache: LruCache<PolynomialRequest, String>,
    hits: u64,
}

impl<E: Evaluator> CachedEvaluator<E> {
    pub fn new(inner: E, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: LruCache::new(capacity),
            hits: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Change how many results are kept, evicting the oldest if needed.
    pub fn resize(&mut self, capacity: NonZeroUsize) {
        self.cache.resize(capacity);
    }

    /// Swap the wrapped evaluator and forget everything it produced.
    pub fn replace_inner(&mut self, inner: E) {
        self.inner = inner;
        self.cache.clear();
    }
}

impl<E: Evaluator> Evaluator for CachedEvaluator<E> {
    fn evaluate(&mut self, request: PolynomialRequest) -> Result<String, EvaluationError> {
        if let Some(markup) = self.cache.get(&request) {
            self.hits += 1;
            tracing::debug!(%request, "evaluation cache hit");
            return Ok(markup.clone());
        }
        let markup = self.inner.evaluate(request)?;
        self.cache.put(request, markup.clone());
        Ok(markup)
    }
}
