//! Services wrapped around the shared controller.

mod cache;

pub use cache::CachedEvaluator;
