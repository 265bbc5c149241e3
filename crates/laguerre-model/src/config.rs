//! Tunable thresholds shared by the CLI and the desktop app.
//!
//! Every section uses `#[serde(default)]` so a partial TOML file only
//! overrides the keys it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub validation: ValidationConfig,
    pub evaluation: EvaluationConfig,
    pub format: FormatConfig,
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

impl StudioConfig {
    /// Reject combinations the formatter and zoom state cannot work with.
    pub fn validate(&self) -> Result<(), StudioError> {
        let format = &self.format;
        if format.short_line == 0 || format.max_chunk == 0 {
            return Err(StudioError::Config(
                "format widths must be greater than zero".to_string(),
            ));
        }
        if format.long_threshold < format.short_line {
            return Err(StudioError::Config(format!(
                "format.long_threshold ({}) must not be below format.short_line ({})",
                format.long_threshold, format.short_line
            )));
        }
        let display = &self.display;
        if display.zoom_step == 0 {
            return Err(StudioError::Config(
                "display.zoom_step must be greater than zero".to_string(),
            ));
        }
        if display.default_font_size < display.min_font_size {
            return Err(StudioError::Config(format!(
                "display.default_font_size ({}) is below display.min_font_size ({})",
                display.default_font_size, display.min_font_size
            )));
        }
        Ok(())
    }
}

/// Input validation thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Values above this require explicit confirmation.
    pub max_safe_value: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { max_safe_value: 20 }
    }
}

/// Evaluation budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Hard ceiling on the degree n, even after confirmation.
    pub max_degree: u32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self { max_degree: 400 }
    }
}

/// Display formatter widths, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Longest expression kept on a single line.
    pub short_line: usize,
    /// Above this the output is paginated instead of wrapped.
    pub long_threshold: usize,
    /// Widest line in paginated output.
    pub max_chunk: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            short_line: 80,
            long_threshold: 2000,
            max_chunk: 100,
        }
    }
}

/// Font size and zoom behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_font_size: u32,
    pub zoom_step: u32,
    /// Floor for zoom-out and for the shrinking of paginated output.
    pub min_font_size: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_font_size: 14,
            zoom_step: 2,
            min_font_size: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// How long the copy button shows its "Copied!" state.
    pub feedback_ms: u64,
}

impl ClipboardConfig {
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { feedback_ms: 2000 }
    }
}
