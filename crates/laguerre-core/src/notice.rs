//! User-facing notices queued by the controller.

use laguerre_model::StudioError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message for the user, shown by the host as a dialog, toast or stderr
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&StudioError> for Notice {
    fn from(error: &StudioError) -> Self {
        let severity = match error {
            StudioError::InvalidInput { .. }
            | StudioError::NegativeValue { .. }
            | StudioError::NoContent => Severity::Warning,
            _ => Severity::Error,
        };
        Self {
            severity,
            title: error.title().to_string(),
            message: error.to_string(),
        }
    }
}
