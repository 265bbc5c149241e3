//! Drawing typeset output as plain terminal text.

use laguerre_core::{Canvas, PolynomialResult, Rendered, render};
use laguerre_format::{Layout, Placement};
use laguerre_model::{PolynomialRequest, RenderError, StudioConfig};
use serde::Serialize;

/// Collects drawn lines for printing.
#[derive(Debug, Default)]
pub struct TextCanvas {
    lines: Vec<String>,
    placement: Option<Placement>,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The drawn block, centered lines padded against the widest one.
    pub fn to_text(&self) -> String {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let centered = self.placement == Some(Placement::Centered);
        self.lines
            .iter()
            .map(|line| {
                if centered {
                    let pad = (width - line.chars().count()) / 2;
                    format!("{}{}", " ".repeat(pad), line)
                } else {
                    line.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for TextCanvas {
    fn clear(&mut self) {
        self.lines.clear();
        self.placement = None;
    }

    fn draw_line(
        &mut self,
        text: &str,
        placement: Placement,
        _font_size: u32,
    ) -> Result<(), RenderError> {
        self.placement = Some(placement);
        self.lines.push(text.trim_end().to_string());
        Ok(())
    }
}

/// Render a result the way the desktop display would, as text.
pub fn render_result(
    result: &PolynomialResult,
    config: &StudioConfig,
) -> Result<(TextCanvas, Rendered), RenderError> {
    let mut canvas = TextCanvas::new();
    let rendered = render(
        &mut canvas,
        &result.content(),
        config.display.default_font_size,
        &config.display,
    )?;
    Ok((canvas, rendered))
}

/// Machine-readable output of `generate --json`.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub request: PolynomialRequest,
    pub markup: String,
    pub layout: Layout,
    /// Formatted markup lines, title included.
    pub lines: Vec<String>,
    /// Typeset lines as drawn; plain text when typesetting failed.
    pub display: Vec<String>,
    pub degraded: bool,
}

impl GenerateReport {
    pub fn new(result: &PolynomialResult, config: &StudioConfig) -> Result<Self, RenderError> {
        let (canvas, rendered) = render_result(result, config)?;
        let content = result.content();
        Ok(Self {
            request: result.request(),
            markup: result.raw_expression().to_string(),
            layout: content.layout,
            lines: content.lines,
            display: canvas.lines,
            degraded: matches!(rendered, Rendered::Degraded { .. }),
        })
    }
}
