//! Tests for the studio application, driven without a window.

use std::time::{Duration, Instant};

use laguerre_core::{CopyStatus, GenerateOutcome, Severity};
use laguerre_format::Placement;
use laguerre_gui::StudioApp;
use laguerre_gui::app::{copy_button_label, window_title};
use laguerre_gui::settings::Settings;
use laguerre_model::PolynomialRequest;

fn studio() -> (StudioApp, egui::Context) {
    let ctx = egui::Context::default();
    let app = StudioApp::with_settings(ctx.clone(), Settings::default());
    (app, ctx)
}

fn drawn(app: &StudioApp) -> Vec<String> {
    app.controller()
        .canvas()
        .lines()
        .iter()
        .map(|line| line.text.clone())
        .collect()
}

fn toast_titles(app: &StudioApp) -> Vec<String> {
    app.toasts()
        .notices()
        .map(|notice| notice.title.clone())
        .collect()
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_starts_with_defining_formula_and_default_input() {
    let (app, _ctx) = studio();
    assert_eq!(app.input(), ("3", "1"));
    assert_eq!(drawn(&app), ["Lₙˡ(x) = Σₖ₌₀ⁿ(-1)ᵏC(n+l, n-k)xᵏ/k!"]);
    assert!(app.controller().current_result().is_none());
}

#[test]
fn test_restores_last_input() {
    let mut settings = Settings::default();
    settings.last_input.n = "7".to_string();
    settings.last_input.l = "2".to_string();
    let app = StudioApp::with_settings(egui::Context::default(), settings);
    assert_eq!(app.input(), ("7", "2"));
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_generate_draws_result_and_remembers_input() {
    let (mut app, ctx) = studio();
    app.set_input("2", "0");
    let outcome = app.generate(&ctx);

    assert_eq!(outcome, GenerateOutcome::Generated(PolynomialRequest::new(2, 0)));
    assert_eq!(drawn(&app), ["L₂⁰(x) = x²/2 - 2x + 1"]);
    assert_eq!(app.settings().last_input.n, "2");
    assert_eq!(app.settings().last_input.l, "0");
}

#[test]
fn test_repeat_generation_uses_cache() {
    let (mut app, ctx) = studio();
    app.set_input("5", "2");
    app.generate(&ctx);
    app.generate(&ctx);
    assert_eq!(app.controller().evaluator().hits(), 1);
    assert_eq!(app.controller().evaluator().len(), 1);
}

#[test]
fn test_invalid_input_becomes_toast() {
    let (mut app, ctx) = studio();
    app.set_input("three", "1");
    assert_eq!(app.generate(&ctx), GenerateOutcome::Rejected);

    app.tick(Instant::now());
    assert_eq!(toast_titles(&app), ["Input error"]);
    assert_eq!(
        app.toasts().notices().next().unwrap().severity,
        Severity::Warning
    );
}

#[test]
fn test_large_input_waits_for_confirmation() {
    let (mut app, ctx) = studio();
    app.set_input("25", "0");
    let outcome = app.generate(&ctx);
    assert!(matches!(outcome, GenerateOutcome::NeedsConfirmation(_)));
    assert!(app.controller().current_result().is_none());

    let outcome = app.confirm_pending(&ctx);
    assert_eq!(outcome, GenerateOutcome::Generated(PolynomialRequest::new(25, 0)));
    assert!(app.controller().pending().is_none());
}

#[test]
fn test_cancelled_confirmation_reports_and_keeps_display() {
    let (mut app, ctx) = studio();
    let before = drawn(&app);
    app.set_input("3", "40");
    app.generate(&ctx);
    app.cancel_pending();

    app.tick(Instant::now());
    assert_eq!(toast_titles(&app), ["Cancelled"]);
    assert_eq!(drawn(&app), before);
}

// ============================================================================
// Copy feedback
// ============================================================================

#[test]
fn test_copy_before_generate_is_refused() {
    let (mut app, _ctx) = studio();
    let now = Instant::now();
    assert!(!app.copy(now));
    app.tick(now);
    assert_eq!(toast_titles(&app), ["Nothing to copy"]);
    assert_eq!(app.controller().copy_status(), CopyStatus::Idle);
}

#[test]
fn test_copy_feedback_schedules_wake_up_and_reverts() {
    let (mut app, ctx) = studio();
    app.generate(&ctx);
    let now = Instant::now();
    assert!(app.copy(now));
    assert_eq!(app.controller().copy_status(), CopyStatus::Copied);
    assert_eq!(app.tick(now), Some(Duration::from_secs(2)));

    assert_eq!(app.tick(now + Duration::from_secs(2)), None);
    assert_eq!(app.controller().copy_status(), CopyStatus::Idle);
}

#[test]
fn test_copy_button_label_follows_status() {
    assert!(copy_button_label(CopyStatus::Idle).ends_with("Copy LaTeX"));
    assert!(copy_button_label(CopyStatus::Copied).ends_with("Copied!"));
}

// ============================================================================
// Zoom and settings
// ============================================================================

#[test]
fn test_zoom_redraws_at_new_size() {
    let (mut app, ctx) = studio();
    app.set_input("2", "0");
    app.generate(&ctx);
    app.zoom_in();
    assert_eq!(app.controller().state().font_size, 16);
    let line = &app.controller().canvas().lines()[0];
    assert_eq!(line.font_size, 16);
    assert_eq!(line.placement, Placement::Centered);
}

#[test]
fn test_apply_settings_rewraps_current_result() {
    let (mut app, ctx) = studio();
    app.set_input("6", "3");
    app.generate(&ctx);
    assert_eq!(drawn(&app).len(), 2);

    let mut settings = app.settings().clone();
    settings.studio.format.short_line = 200;
    assert!(app.apply_settings(&ctx, settings));
    assert_eq!(drawn(&app).len(), 1);
    assert_eq!(app.settings().studio.format.short_line, 200);
}

#[test]
fn test_invalid_settings_are_refused() {
    let (mut app, ctx) = studio();
    let mut settings = app.settings().clone();
    settings.studio.display.zoom_step = 0;
    assert!(!app.apply_settings(&ctx, settings));
    assert_eq!(app.settings().studio.display.zoom_step, 2);

    app.tick(Instant::now());
    assert_eq!(toast_titles(&app), ["Configuration error"]);
}

#[test]
fn test_lower_degree_limit_applies_after_settings_change() {
    let (mut app, ctx) = studio();
    app.set_input("12", "0");
    app.generate(&ctx);

    let mut settings = app.settings().clone();
    settings.studio.evaluation.max_degree = 10;
    assert!(app.apply_settings(&ctx, settings));
    assert!(app.controller().evaluator().is_empty());

    assert_eq!(app.generate(&ctx), GenerateOutcome::Rejected);
    app.tick(Instant::now());
    assert_eq!(toast_titles(&app), ["Computation error"]);
}

#[test]
fn test_window_title_names_polynomial() {
    assert_eq!(
        window_title(Some(PolynomialRequest::new(3, 1))),
        "Associated Laguerre Polynomial Generator - L_3^1(x)"
    );
    assert_eq!(window_title(None), "Associated Laguerre Polynomial Generator");
}
