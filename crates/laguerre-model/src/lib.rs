pub mod config;
pub mod error;
pub mod request;

pub use config::{
    ClipboardConfig, DisplayConfig, EvaluationConfig, FormatConfig, StudioConfig,
    ValidationConfig,
};
pub use error::{EvaluationError, RenderError, Result, StudioError};
pub use request::{LargeComputationWarning, Parameter, PolynomialRequest};

/// Markup for the defining sum, shown before anything has been generated.
pub const DEFINING_FORMULA: &str =
    r"L_n^l(x) = \sum_{k=0}^{n} (-1)^k \binom{n+l}{n-k} \frac{x^k}{k!}";
