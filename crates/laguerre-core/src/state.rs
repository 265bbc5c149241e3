//! Generated results and the state of the display area.

use laguerre_format::{DisplayContent, FormattedExpression, format_expression};
use laguerre_model::{DEFINING_FORMULA, FormatConfig, PolynomialRequest};

/// One successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialResult {
    request: PolynomialRequest,
    raw_expression: String,
    display: FormattedExpression,
}

impl PolynomialResult {
    pub fn new(request: PolynomialRequest, raw_expression: String, format: &FormatConfig) -> Self {
        let display = format_expression(&raw_expression, format);
        Self {
            request,
            raw_expression,
            display,
        }
    }

    pub fn request(&self) -> PolynomialRequest {
        self.request
    }

    /// Markup exactly as the evaluator produced it. This is what gets copied.
    pub fn raw_expression(&self) -> &str {
        &self.raw_expression
    }

    pub fn display(&self) -> &FormattedExpression {
        &self.display
    }

    /// Rebuild the display form with new widths.
    pub fn reformat(&mut self, format: &FormatConfig) {
        self.display = format_expression(&self.raw_expression, format);
    }

    /// Display content with the `L_{n}^{l}(x) = ` title in front.
    pub fn content(&self) -> DisplayContent {
        DisplayContent::math(&self.request.title_markup(), &self.display)
    }
}

/// What the display area shows and at which zoom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub font_size: u32,
    pub current_result: Option<PolynomialResult>,
    /// Content last handed to the renderer.
    pub shown: DisplayContent,
}

impl DisplayState {
    /// The defining formula, nothing generated yet.
    pub fn initial(font_size: u32) -> Self {
        Self {
            font_size,
            current_result: None,
            shown: DisplayContent::formula(DEFINING_FORMULA),
        }
    }
}
