//! Canvas placement and font sizing for display content.

use laguerre_model::DisplayConfig;
use serde::{Deserialize, Serialize};

use crate::display::{FormattedExpression, Layout};

/// Beyond this many characters a centered expression is drawn 2pt smaller.
const SHRINK_MEDIUM_CHARS: usize = 500;
/// Beyond this many characters a centered expression is drawn 4pt smaller.
const SHRINK_LARGE_CHARS: usize = 1000;
/// Paginated output loses one point per this many lines.
const LINES_PER_POINT: usize = 5;

/// Where lines are anchored on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Block centered both ways.
    Centered,
    /// Lines stacked from the top-left corner.
    TopLeft,
}

/// What the display area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayContent {
    /// Lines of markup (or plain text when `is_math` is false).
    pub lines: Vec<String>,
    pub layout: Layout,
    pub is_math: bool,
}

impl DisplayContent {
    /// A formatted expression, with `prefix` prepended to its first line.
    pub fn math(prefix: &str, expression: &FormattedExpression) -> Self {
        let mut lines: Vec<String> = expression.lines().map(str::to_string).collect();
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, prefix);
        }
        Self {
            lines,
            layout: expression.layout(),
            is_math: true,
        }
    }

    /// A single line of markup.
    pub fn formula(markup: impl Into<String>) -> Self {
        Self {
            lines: vec![markup.into()],
            layout: Layout::SingleLine,
            is_math: true,
        }
    }

    /// Plain text, drawn as-is.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            layout: Layout::SingleLine,
            is_math: false,
        }
    }

    pub fn char_len(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }
}

/// Resolved drawing instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub placement: Placement,
    pub font_size: u32,
    pub lines: Vec<String>,
}

/// Decide placement and font size for `content` at the current zoom size.
///
/// The lines are passed through unchanged; typesetting happens later.
pub fn plan_render(content: &DisplayContent, font_size: u32, config: &DisplayConfig) -> RenderPlan {
    let (placement, font_size) = match content.layout {
        Layout::Paginated => (
            Placement::TopLeft,
            paginated_font_size(font_size, content.lines.len(), config.min_font_size),
        ),
        Layout::SingleLine | Layout::Wrapped => (
            Placement::Centered,
            centered_font_size(font_size, content.char_len(), config.min_font_size),
        ),
    };
    RenderPlan {
        placement,
        font_size,
        lines: content.lines.clone(),
    }
}

/// Font size for centered content: long expressions are drawn smaller.
pub fn centered_font_size(base: u32, chars: usize, min: u32) -> u32 {
    let shrink = if chars > SHRINK_LARGE_CHARS {
        4
    } else if chars > SHRINK_MEDIUM_CHARS {
        2
    } else {
        0
    };
    base.saturating_sub(shrink).max(min)
}

/// Font size for paginated content, never increasing with the line count
/// and never below `min`.
pub fn paginated_font_size(base: u32, lines: usize, min: u32) -> u32 {
    let shrink = u32::try_from(lines / LINES_PER_POINT).unwrap_or(u32::MAX);
    base.saturating_sub(shrink).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::format_expression;
    use laguerre_model::FormatConfig;

    #[test]
    fn test_centered_font_shrinks_for_long_content() {
        assert_eq!(centered_font_size(14, 100, 6), 14);
        assert_eq!(centered_font_size(14, 501, 6), 12);
        assert_eq!(centered_font_size(14, 1001, 6), 10);
        assert_eq!(centered_font_size(8, 1001, 6), 6);
    }

    #[test]
    fn test_paginated_font_is_monotonic_and_floored() {
        let mut previous = u32::MAX;
        for lines in 0..200 {
            let size = paginated_font_size(12, lines, 6);
            assert!(size <= previous);
            assert!(size >= 6);
            previous = size;
        }
        assert_eq!(paginated_font_size(12, 4, 6), 12);
        assert_eq!(paginated_font_size(12, 10, 6), 10);
        assert_eq!(paginated_font_size(12, 100, 6), 6);
    }

    #[test]
    fn test_prefix_goes_on_first_line() {
        let config = FormatConfig {
            short_line: 10,
            long_threshold: 1000,
            max_chunk: 10,
        };
        let expression = format_expression("a + b + c + d + e", &config);
        let content = DisplayContent::math("L = ", &expression);
        assert_eq!(content.lines.len(), expression.line_count());
        assert!(content.lines[0].starts_with("L = a"));
        assert_eq!(content.layout, Layout::Wrapped);
    }

    #[test]
    fn test_plan_placement_follows_layout() {
        let display = DisplayConfig::default();
        let formula = DisplayContent::formula("x");
        let plan = plan_render(&formula, 14, &display);
        assert_eq!(plan.placement, Placement::Centered);
        assert_eq!(plan.font_size, 14);

        let paginated = DisplayContent {
            lines: vec!["a".to_string(); 12],
            layout: Layout::Paginated,
            is_math: true,
        };
        let plan = plan_render(&paginated, 14, &display);
        assert_eq!(plan.placement, Placement::TopLeft);
        assert_eq!(plan.font_size, 12);
    }
}
