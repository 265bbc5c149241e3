//! Tests for display formatting, layout planning and typesetting.

use laguerre_algebra::LaguerreEvaluator;
use laguerre_format::{
    DisplayContent, Layout, Placement, degrade, format_expression, plan_render, typeset,
    typeset_lines,
};
use laguerre_model::{DisplayConfig, FormatConfig, PolynomialRequest};
use proptest::prelude::*;

const DEGREE_SIX: &str = r"\frac{x^{6}}{720} - \frac{3 x^{5}}{40} + \frac{3 x^{4}}{2} - 14 x^{3} + 63 x^{2} - 126 x + 84";

fn small_config() -> FormatConfig {
    FormatConfig {
        short_line: 40,
        long_threshold: 120,
        max_chunk: 40,
    }
}

/// One polynomial term, the way the algebra crate writes them.
fn term() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..1000).prop_map(|c| c.to_string()),
        (1u32..100, 1u32..20).prop_map(|(c, p)| format!("{c} x^{{{p}}}")),
        (1u32..20, 1u32..10_000).prop_map(|(p, d)| format!(r"\frac{{x^{{{p}}}}}{{{d}}}")),
        (1u32..100, 1u32..20, 2u32..1000)
            .prop_map(|(c, p, d)| format!(r"\frac{{{c} x^{{{p}}}}}{{{d}}}")),
    ]
}

/// Terms joined by `+`/`-` with irregular whitespace, optionally led by a
/// unary minus.
fn messy_expression() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        term(),
        prop::collection::vec((any::<bool>(), "[ \n\t]{0,3}", "[ \n]{0,2}", term()), 0..60),
    )
        .prop_map(|(negative, first, rest)| {
            let mut out = String::new();
            if negative {
                out.push_str("- ");
            }
            out.push_str(&first);
            for (plus, before, after, term) in rest {
                out.push_str(&before);
                out.push(if plus { '+' } else { '-' });
                out.push_str(&after);
                out.push_str(&term);
            }
            out
        })
}

// =========================================================================
// Formatting properties
// =========================================================================

proptest! {
    #[test]
    fn formatting_is_idempotent(raw in messy_expression()) {
        for config in [FormatConfig::default(), small_config()] {
            let once = format_expression(&raw, &config);
            let twice = format_expression(once.as_str(), &config);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn short_expressions_stay_on_one_line(raw in messy_expression()) {
        let config = FormatConfig::default();
        let formatted = format_expression(&raw, &config);
        if formatted.flat_len() <= config.short_line {
            prop_assert_eq!(formatted.layout(), Layout::SingleLine);
            prop_assert_eq!(formatted.line_count(), 1);
            prop_assert!(!formatted.as_str().contains('\n'));
        }
    }

    #[test]
    fn paginated_lines_respect_chunk_width(raw in messy_expression()) {
        let config = small_config();
        let formatted = format_expression(&raw, &config);
        if formatted.layout() == Layout::Paginated {
            let chunk = config.max_chunk;
            prop_assert!(formatted.line_count() >= formatted.flat_len().div_ceil(chunk));
            for line in formatted.lines() {
                prop_assert!(line.chars().count() <= chunk, "line too long: {:?}", line);
            }
        }
    }

    /// Generated terms are narrower than a line, so no term is ever cut.
    #[test]
    fn lines_never_split_inside_braces(raw in messy_expression()) {
        let formatted = format_expression(&raw, &small_config());
        for line in formatted.lines() {
            let opens = line.matches('{').count();
            let closes = line.matches('}').count();
            prop_assert_eq!(opens, closes, "unbalanced line {:?}", line);
        }
    }
}

#[test]
fn test_pagination_line_count_is_exact_when_terms_align() {
    let config = FormatConfig {
        short_line: 10,
        long_threshold: 20,
        max_chunk: 10,
    };
    for k in 2..30 {
        let raw = format!("abcdefghij{}", " + abcdefg".repeat(k));
        let formatted = format_expression(&raw, &config);
        assert_eq!(formatted.layout(), Layout::Paginated);
        assert_eq!(formatted.line_count(), k + 1);
        assert_eq!(formatted.line_count(), raw.len().div_ceil(config.max_chunk));
    }
}

fn markup(n: u32) -> String {
    LaguerreEvaluator::default()
        .expand(PolynomialRequest::new(n, 0))
        .unwrap()
        .markup
}

#[test]
fn test_high_degree_pages_fit_chunk_width() {
    let config = FormatConfig::default();
    for n in [80, 120] {
        let raw = markup(n);
        let formatted = format_expression(&raw, &config);
        assert_eq!(formatted.layout(), Layout::Paginated);
        let widest = formatted.lines().map(|line| line.chars().count()).max();
        assert!(widest <= Some(config.max_chunk), "n={n}: widest line {widest:?}");
        assert!(formatted.line_count() >= formatted.flat_len().div_ceil(config.max_chunk));
        assert_eq!(format_expression(formatted.as_str(), &config), formatted);
    }
}

#[test]
fn test_cut_terms_typeset_as_one() {
    let config = FormatConfig::default();
    let formatted = format_expression(&markup(120), &config);
    let content = DisplayContent::math("L_{120}^{0}(x) = ", &formatted);

    let widest = content.lines.iter().map(|line| line.chars().count()).max().unwrap();

    let lines = typeset_lines(&content.lines).unwrap();
    assert!(lines[0].starts_with("L₁₂₀⁰(x) = x¹²⁰/"));
    for line in &lines {
        assert!(line.chars().count() <= widest, "line too long: {line:?}");
    }
    assert!(lines.last().unwrap().ends_with("+ 1"));
}

#[test]
fn test_typeset_lines_keeps_whole_term_lines() {
    let formatted = format_expression(DEGREE_SIX, &FormatConfig::default());
    let lines = typeset_lines(&formatted.lines().collect::<Vec<_>>()).unwrap();
    assert_eq!(lines, ["x⁶/720 - 3x⁵/40 + 3x⁴/2 - 14x³ + 63x²", "- 126x + 84"]);
}

#[test]
fn test_degree_six_wraps_at_operator() {
    let formatted = format_expression(DEGREE_SIX, &FormatConfig::default());
    assert_eq!(formatted.layout(), Layout::Wrapped);
    let lines: Vec<&str> = formatted.lines().collect();
    assert_eq!(
        lines,
        vec![
            r"\frac{x^{6}}{720} - \frac{3 x^{5}}{40} + \frac{3 x^{4}}{2} - 14 x^{3} + 63 x^{2}",
            " - 126 x + 84",
        ]
    );
    assert_eq!(lines.concat(), DEGREE_SIX);
}

#[test]
fn test_newlines_collapse_to_single_line() {
    let formatted = format_expression("x\n+\n1", &FormatConfig::default());
    assert_eq!(formatted.as_str(), "x + 1");
}

// =========================================================================
// Layout planning
// =========================================================================

#[test]
fn test_wrapped_expression_is_centered() {
    let formatted = format_expression(DEGREE_SIX, &FormatConfig::default());
    let content = DisplayContent::math("L_{6}^{3}(x) = ", &formatted);
    let plan = plan_render(&content, 14, &DisplayConfig::default());
    assert_eq!(plan.placement, Placement::Centered);
    assert_eq!(plan.font_size, 14);
    assert_eq!(plan.lines.len(), 2);
    assert!(plan.lines[0].starts_with("L_{6}^{3}(x) = \\frac"));
}

#[test]
fn test_paginated_expression_is_top_left() {
    let long = vec![r"\frac{x^{2}}{2}"; 200].join(" + ");
    let formatted = format_expression(&long, &FormatConfig::default());
    assert_eq!(formatted.layout(), Layout::Paginated);
    let content = DisplayContent::math("", &formatted);
    let plan = plan_render(&content, 14, &DisplayConfig::default());
    assert_eq!(plan.placement, Placement::TopLeft);
    assert!(plan.font_size >= DisplayConfig::default().min_font_size);
    assert!(plan.font_size < 14);
}

// =========================================================================
// Typesetting
// =========================================================================

#[test]
fn test_typeset_generated_polynomials() {
    insta::assert_snapshot!(
        typeset(r"L_{2}^{0}(x) = \frac{x^{2}}{2} - 2 x + 1").unwrap(),
        @"L₂⁰(x) = x²/2 - 2x + 1"
    );
    insta::assert_snapshot!(
        typeset(r"L_{4}^{2}(x) = \frac{x^{4}}{24} - x^{3} + \frac{15 x^{2}}{2} - 20 x + 15").unwrap(),
        @"L₄²(x) = x⁴/24 - x³ + 15x²/2 - 20x + 15"
    );
    insta::assert_snapshot!(typeset(DEGREE_SIX).unwrap(), @"x⁶/720 - 3x⁵/40 + 3x⁴/2 - 14x³ + 63x² - 126x + 84");
}

#[test]
fn test_typeset_defining_formula() {
    insta::assert_snapshot!(
        typeset(laguerre_model::DEFINING_FORMULA).unwrap(),
        @"Lₙˡ(x) = Σₖ₌₀ⁿ(-1)ᵏC(n+l, n-k)xᵏ/k!"
    );
}

#[test]
fn test_continuation_line_typesets() {
    assert_eq!(typeset(" - 126 x + 84").unwrap(), "- 126x + 84");
}

#[test]
fn test_unsupported_markup_degrades() {
    let markup = r"\alpha + \frac{x}{2}";
    assert!(typeset(markup).is_err());
    assert_eq!(degrade(markup), "alpha + fracx2");
}
