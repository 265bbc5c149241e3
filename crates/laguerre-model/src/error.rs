use thiserror::Error;

use crate::request::Parameter;

/// Faults raised while expanding a polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Degree above the configured evaluation budget.
    #[error("degree {degree} exceeds the evaluation limit of {limit}")]
    BudgetExceeded { degree: u32, limit: u32 },
    #[error("internal evaluation fault: {0}")]
    Internal(String),
}

/// Faults raised while turning markup into drawn output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unsupported control sequence \\{command}")]
    UnsupportedCommand { command: String },
    #[error("unbalanced braces at byte {position}")]
    UnbalancedBraces { position: usize },
    #[error("missing argument for \\{command}")]
    MissingArgument { command: String },
    #[error("canvas error: {0}")]
    Canvas(String),
}

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("{parameter} must be an integer (got {value:?})")]
    InvalidInput { parameter: Parameter, value: String },

    #[error("{parameter} must be a non-negative integer (got {value})")]
    NegativeValue { parameter: Parameter, value: i64 },

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("nothing to copy yet; generate a polynomial first")]
    NoContent,

    #[error("clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    #[error("invalid quantum numbers n={n}, l={l}: {message}")]
    InvalidQuantumNumbers { n: u32, l: u32, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StudioError {
    /// Short heading for user-facing notices.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } | Self::NegativeValue { .. } => "Input error",
            Self::Evaluation(_) => "Computation error",
            Self::Render(_) => "Rendering error",
            Self::NoContent => "Nothing to copy",
            Self::ClipboardUnavailable { .. } => "Copy failed",
            Self::InvalidQuantumNumbers { .. } => "Invalid orbital",
            Self::Config(_) => "Configuration error",
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
