//! Tiered rendering of display content onto a [`Canvas`].
//!
//! 1. Typeset the lines to Unicode math text and draw them. Pieces of a
//!    term cut for width are typeset together and wrapped again.
//! 2. If that fails, draw the degraded plain-text form under a notice line.
//! 3. If drawing plain text fails too, return the error for the caller to
//!    surface.

use laguerre_format::mathtext::DEGRADED_NOTICE;
use laguerre_format::{DisplayContent, Placement, RenderPlan, degrade, plan_render, typeset_lines};
use laguerre_model::{DisplayConfig, RenderError};
use tracing::{debug, warn};

/// A surface that shows lines of text.
///
/// Lines are stacked in the order they are drawn; the canvas decides the
/// actual coordinates from the placement.
pub trait Canvas {
    fn clear(&mut self);

    fn draw_line(
        &mut self,
        text: &str,
        placement: Placement,
        font_size: u32,
    ) -> Result<(), RenderError>;
}

impl<C: Canvas + ?Sized> Canvas for Box<C> {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn draw_line(
        &mut self,
        text: &str,
        placement: Placement,
        font_size: u32,
    ) -> Result<(), RenderError> {
        (**self).draw_line(text, placement, font_size)
    }
}

/// Which tier produced what is on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Typeset math, or plain text that was asked for as plain text.
    Full,
    /// The math could not be drawn; plain text is shown instead.
    Degraded { cause: RenderError },
}

/// Draw `content` at `font_size`, falling back tier by tier.
pub fn render(
    canvas: &mut dyn Canvas,
    content: &DisplayContent,
    font_size: u32,
    config: &DisplayConfig,
) -> Result<Rendered, RenderError> {
    let plan = plan_render(content, font_size, config);

    if !content.is_math {
        draw_all(canvas, &plan.lines, &plan)?;
        return Ok(Rendered::Full);
    }

    let cause = match typeset_lines(&plan.lines) {
        Ok(lines) => match draw_all(canvas, &lines, &plan) {
            Ok(()) => {
                debug!(lines = lines.len(), font_size = plan.font_size, "rendered math");
                return Ok(Rendered::Full);
            }
            Err(error) => error,
        },
        Err(error) => error,
    };
    warn!(error = %cause, "math rendering failed, falling back to plain text");

    let plain = degrade(&plan.lines.concat());
    let degraded = RenderPlan {
        placement: Placement::Centered,
        font_size: plan.font_size,
        lines: vec![DEGRADED_NOTICE.to_string(), String::new(), plain],
    };
    if let Err(error) = draw_all(canvas, &degraded.lines, &degraded) {
        warn!(%error, "plain text rendering failed");
        return Err(error);
    }
    Ok(Rendered::Degraded { cause })
}

fn draw_all(canvas: &mut dyn Canvas, lines: &[String], plan: &RenderPlan) -> Result<(), RenderError> {
    canvas.clear();
    for line in lines {
        canvas.draw_line(line, plan.placement, plan.font_size)?;
    }
    Ok(())
}
