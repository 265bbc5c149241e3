//! Display formatting of polynomial markup.
//!
//! Formatting has three steps:
//!
//! 1. Whitespace collapses to single spaces and binary `+`/`-` get one
//!    space on each side. A unary minus is attached to its operand
//!    (`-\frac{x^{3}}{6}`). A newline between two non-space characters is a
//!    soft break and is dropped.
//! 2. The flat form is cut into terms at operators outside any brace group.
//! 3. Terms are packed greedily into lines: `short_line` wide when the flat
//!    form is longer than `short_line`, `max_chunk` wide when it is longer
//!    than `long_threshold`. A term wider than a line is cut into full-width
//!    pieces, so no line is ever wider than its limit. Only such a cut can
//!    land inside `\frac{..}{..}`.
//!
//! Lines are stored joined by `\n`. Every line after the first starts with
//! the separator of its first term (` + term`), so concatenating the lines
//! gives back the flat form. Formatting the output again yields the same
//! output.

use laguerre_model::FormatConfig;
use serde::{Deserialize, Serialize};

/// How a formatted expression is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Short enough for one line.
    SingleLine,
    /// Broken at operators into `short_line`-wide lines, still centered.
    Wrapped,
    /// Broken into `max_chunk`-wide lines, drawn top-left.
    Paginated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedExpression {
    text: String,
    layout: Layout,
}

impl FormattedExpression {
    /// Full text, lines separated by `\n`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Lines as stored, leading separators included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Length of the single-line form, in characters.
    pub fn flat_len(&self) -> usize {
        self.lines().map(char_len).sum()
    }
}

/// Format markup for display. See the module docs for the rules.
pub fn format_expression(raw: &str, config: &FormatConfig) -> FormattedExpression {
    let spaced = space_operators(raw);
    let flat_len = char_len(&spaced.text);

    let (layout, width) = if flat_len <= config.short_line {
        (Layout::SingleLine, None)
    } else if flat_len <= config.long_threshold {
        (Layout::Wrapped, Some(config.short_line))
    } else {
        (Layout::Paginated, Some(config.max_chunk))
    };

    let text = match width {
        None => spaced.text,
        Some(width) => pack_lines(&spaced.terms(), width).join("\n"),
    };
    tracing::trace!(chars = flat_len, ?layout, "formatted expression");
    FormattedExpression { text, layout }
}

/// Flat text plus the byte offsets where top-level terms start.
struct Spaced {
    text: String,
    breaks: Vec<usize>,
}

impl Spaced {
    fn terms(&self) -> Vec<&str> {
        split_terms(&self.text, &self.breaks)
    }
}

fn split_terms<'a>(text: &'a str, breaks: &[usize]) -> Vec<&'a str> {
    let mut terms = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for &end in breaks {
        if end > start {
            terms.push(&text[start..end]);
        }
        start = end;
    }
    terms.push(&text[start..]);
    terms
}

fn space_operators(raw: &str) -> Spaced {
    let mut text = String::with_capacity(raw.len() + raw.len() / 4);
    let mut breaks = Vec::new();
    let mut depth: i32 = 0;
    let mut pending_space = false;
    let mut after_unary = false;
    let mut prev: Option<char> = None;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        let soft_break = ch == '\n'
            && prev.is_some_and(|c| !c.is_whitespace())
            && chars.peek().is_some_and(|c| !c.is_whitespace());
        if soft_break {
            continue;
        }
        prev = Some(ch);
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if matches!(ch, '+' | '-') && is_binary_position(&text) {
            while text.ends_with(' ') {
                text.pop();
            }
            if depth == 0 {
                breaks.push(text.len());
            }
            text.push(' ');
            text.push(ch);
            text.push(' ');
            pending_space = false;
            after_unary = false;
            continue;
        }
        if pending_space && !text.is_empty() && !text.ends_with(' ') && !after_unary {
            text.push(' ');
        }
        pending_space = false;
        after_unary = ch == '-';
        match ch {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        text.push(ch);
    }

    Spaced { text, breaks }
}

/// A `+`/`-` is binary unless it starts the expression or follows an
/// opening delimiter, a script marker, `=`, `,` or another operator.
fn is_binary_position(text: &str) -> bool {
    match text.trim_end().chars().last() {
        None => false,
        Some(prev) => !matches!(prev, '{' | '(' | '[' | '^' | '_' | '=' | ',' | '+' | '-'),
    }
}

/// Re-wrap typeset text at its ` + `/` - ` separators, no line wider than
/// `width` characters.
pub fn wrap_typeset(text: &str, width: usize) -> Vec<String> {
    let mut breaks: Vec<usize> = text
        .match_indices(" + ")
        .chain(text.match_indices(" - "))
        .map(|(at, _)| at)
        .collect();
    breaks.sort_unstable();
    pack_lines(&split_terms(text, &breaks), width)
}

fn pack_lines(terms: &[&str], width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for term in terms {
        let term_len = char_len(term);
        if !current.is_empty() && current_len + term_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        let mut rest: &str = term;
        let mut rest_len = term_len;
        while rest_len > width {
            let cut = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(at, _)| at);
            lines.push(rest[..cut].to_string());
            rest = &rest[cut..];
            rest_len -= width;
        }
        current.push_str(rest);
        current_len += rest_len;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaced(raw: &str) -> String {
        space_operators(raw).text
    }

    #[test]
    fn test_binary_operators_get_single_spaces() {
        assert_eq!(spaced("1-2x+x^2"), "1 - 2x + x^2");
        assert_eq!(spaced("a  +   b"), "a + b");
        assert_eq!(spaced("a\n+\tb"), "a + b");
    }

    #[test]
    fn test_unary_minus_attaches_to_operand() {
        assert_eq!(
            spaced(r"- \frac{x^{3}}{6} + \frac{3 x^{2}}{2} - 3 x + 1"),
            r"-\frac{x^{3}}{6} + \frac{3 x^{2}}{2} - 3 x + 1"
        );
        assert_eq!(spaced("(-1)^k"), "(-1)^k");
        assert_eq!(spaced("x^{-2}"), "x^{-2}");
        assert_eq!(spaced("a = -b"), "a = -b");
    }

    #[test]
    fn test_operators_inside_groups_are_spaced_but_not_breaks() {
        let result = space_operators(r"\binom{n+l}{n-k} + x");
        assert_eq!(result.text, r"\binom{n + l}{n - k} + x");
        assert_eq!(result.breaks, vec![r"\binom{n + l}{n - k}".len()]);
    }

    #[test]
    fn test_short_input_is_single_line() {
        let formatted = format_expression(r"\frac{x^{2}}{2} - 2 x + 1", &FormatConfig::default());
        assert_eq!(formatted.layout(), Layout::SingleLine);
        assert_eq!(formatted.line_count(), 1);
        assert_eq!(formatted.as_str(), r"\frac{x^{2}}{2} - 2 x + 1");
    }

    #[test]
    fn test_pack_lines_cuts_oversized_term() {
        let lines = pack_lines(&["aaaaaaaaaaaa", " + b", " + c"], 8);
        assert_eq!(lines, vec!["aaaaaaaa", "aaaa + b", " + c"]);
    }

    #[test]
    fn test_pack_lines_cuts_on_char_boundaries() {
        let lines = pack_lines(&["x¹²³⁴⁵⁶⁷"], 3);
        assert_eq!(lines, vec!["x¹²", "³⁴⁵", "⁶⁷"]);
    }

    #[test]
    fn test_soft_break_joins_cut_pieces() {
        assert_eq!(spaced("\\frac{x^{2}}{66\n89} + 1\n + 2"), r"\frac{x^{2}}{6689} + 1 + 2");
        assert_eq!(spaced("a\n\nb"), "a b");
    }

    #[test]
    fn test_wrap_typeset_breaks_at_separators() {
        assert_eq!(wrap_typeset("x²/2 - 2x + 1", 9), vec!["x²/2 - 2x", " + 1"]);
        assert_eq!(wrap_typeset("C(n+l, n-k)", 20), vec!["C(n+l, n-k)"]);
    }

    #[test]
    fn test_empty_input() {
        let formatted = format_expression("   ", &FormatConfig::default());
        assert_eq!(formatted.as_str(), "");
        assert_eq!(formatted.line_count(), 1);
    }
}
