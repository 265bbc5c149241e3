//! Main application struct and eframe::App implementation

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use egui::RichText;
use laguerre_algebra::LaguerreEvaluator;
use laguerre_core::{Controller, CopyStatus, GenerateOutcome, Notice};
use laguerre_model::{PolynomialRequest, StudioError};

use crate::canvas::DisplayCanvas;
use crate::clipboard::EguiClipboard;
use crate::services::CachedEvaluator;
use crate::settings::{self, Settings, ui::SettingsResult};
use crate::theme::{self, colors, spacing};
use crate::toast::ToastQueue;

pub const APP_TITLE: &str = "Associated Laguerre Polynomial Generator";

pub type StudioController =
    Controller<CachedEvaluator<LaguerreEvaluator>, DisplayCanvas, EguiClipboard>;

/// Window title, naming the polynomial on display.
pub fn window_title(request: Option<PolynomialRequest>) -> String {
    match request {
        Some(request) => format!("{APP_TITLE} - L_{}^{}(x)", request.n, request.l),
        None => APP_TITLE.to_string(),
    }
}

/// Label of the copy button for the current feedback state.
pub fn copy_button_label(status: CopyStatus) -> String {
    match status {
        CopyStatus::Idle => format!("{} Copy LaTeX", egui_phosphor::regular::COPY),
        CopyStatus::Copied => format!("{} Copied!", egui_phosphor::regular::CHECK),
    }
}

fn cache_capacity(settings: &Settings) -> NonZeroUsize {
    NonZeroUsize::new(settings.general.cache_capacity).unwrap_or(NonZeroUsize::MIN)
}

/// Main application struct
pub struct StudioApp {
    controller: StudioController,
    settings: Settings,
    /// Edited copy while the settings window is open.
    settings_pending: Option<Settings>,
    n_text: String,
    l_text: String,
    toasts: ToastQueue,
    /// Whether settings changes are written to disk.
    persist: bool,
}

impl StudioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = settings::load_settings();
        tracing::info!(
            "Loaded settings: dark_mode={}, font_size={}",
            settings.general.dark_mode,
            settings.studio.display.default_font_size
        );
        theme::apply(&cc.egui_ctx, settings.general.dark_mode);

        let mut app = Self::with_settings(cc.egui_ctx.clone(), settings);
        app.persist = true;
        app
    }

    /// Build the application around `ctx` without touching the disk.
    pub fn with_settings(ctx: egui::Context, settings: Settings) -> Self {
        let evaluator = CachedEvaluator::new(
            LaguerreEvaluator::new(&settings.studio.evaluation),
            cache_capacity(&settings),
        );
        let controller = Controller::new(
            settings.studio.clone(),
            evaluator,
            DisplayCanvas::new(),
            EguiClipboard::new(ctx),
        );
        Self {
            controller,
            n_text: settings.last_input.n.clone(),
            l_text: settings.last_input.l.clone(),
            settings,
            settings_pending: None,
            toasts: ToastQueue::new(),
            persist: false,
        }
    }

    pub fn controller(&self) -> &StudioController {
        &self.controller
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn input(&self) -> (&str, &str) {
        (&self.n_text, &self.l_text)
    }

    pub fn set_input(&mut self, n: impl Into<String>, l: impl Into<String>) {
        self.n_text = n.into();
        self.l_text = l.into();
    }
}

// ============================================================================
// Actions
// ============================================================================

impl StudioApp {
    /// Generate from the n and l fields.
    pub fn generate(&mut self, ctx: &egui::Context) -> GenerateOutcome {
        let outcome = self.controller.generate(&self.n_text, &self.l_text);
        self.after_generate(ctx, outcome);
        outcome
    }

    /// Proceed with a computation held back by the confirmation dialog.
    pub fn confirm_pending(&mut self, ctx: &egui::Context) -> GenerateOutcome {
        let outcome = self.controller.confirm_pending();
        self.after_generate(ctx, outcome);
        outcome
    }

    pub fn cancel_pending(&mut self) {
        if self.controller.pending().is_some() {
            self.controller.cancel_pending();
            self.controller
                .push_notice(Notice::info("Cancelled", "Generation was cancelled."));
        }
    }

    fn after_generate(&mut self, ctx: &egui::Context, outcome: GenerateOutcome) {
        if let GenerateOutcome::Generated(request) = outcome {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(Some(request))));
            self.settings.last_input.n = request.n.to_string();
            self.settings.last_input.l = request.l.to_string();
            self.save_settings();
        }
    }

    pub fn copy(&mut self, now: Instant) -> bool {
        self.controller.copy(now)
    }

    pub fn zoom_in(&mut self) {
        self.controller.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.controller.zoom_out();
    }

    /// Validate and adopt edited settings. Invalid ones are refused with a
    /// notice and the previous settings stay in force.
    pub fn apply_settings(&mut self, ctx: &egui::Context, settings: Settings) -> bool {
        if let Err(e) = settings.studio.validate() {
            self.controller.push_notice(Notice::from(&e));
            return false;
        }
        if settings.general.cache_capacity == 0 {
            let e = StudioError::Config("cache size must be at least 1".to_string());
            self.controller.push_notice(Notice::from(&e));
            return false;
        }

        if settings.studio.evaluation != self.settings.studio.evaluation {
            self.controller
                .evaluator_mut()
                .replace_inner(LaguerreEvaluator::new(&settings.studio.evaluation));
        }
        self.controller
            .evaluator_mut()
            .resize(cache_capacity(&settings));
        if settings.general.dark_mode != self.settings.general.dark_mode {
            theme::apply(ctx, settings.general.dark_mode);
        }
        if settings.studio != *self.controller.config() {
            self.controller.apply_config(settings.studio.clone());
        }

        self.settings = settings;
        self.save_settings();
        true
    }

    fn open_settings(&mut self) {
        if self.settings_pending.is_none() {
            self.settings_pending = Some(self.settings.clone());
        }
    }

    fn save_settings(&self) {
        if !self.persist {
            return;
        }
        if let Err(e) = settings::save_settings(&self.settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    /// Move controller notices into the toast queue.
    fn collect_notices(&mut self, now: Instant) {
        for notice in self.controller.take_notices() {
            self.toasts.push(notice, now);
        }
    }

    /// Advance timers and drain notices; returns when to wake up next.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        self.controller.poll(now);
        self.collect_notices(now);
        self.toasts.expire(now);
        [
            self.controller.feedback_remaining(now),
            self.toasts.next_expiry(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

// ============================================================================
// eframe::App
// ============================================================================

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.poll(now);

        self.handle_shortcuts(ctx, now);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(spacing::SM);
            self.show_controls(ui, ctx, now);
            ui.add_space(spacing::SM);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controller.canvas().show(ui);
        });

        self.show_confirmation(ctx);
        self.show_settings(ctx);

        if let Some(wake) = self.tick(now) {
            ctx.request_repaint_after(wake);
        }
        self.toasts.show(ctx);
    }
}

impl StudioApp {
    fn show_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        ui.horizontal(|ui| {
            ui.label("n:");
            ui.add(egui::TextEdit::singleline(&mut self.n_text).desired_width(60.0));
            ui.add_space(spacing::XS);
            ui.label("l:");
            ui.add(egui::TextEdit::singleline(&mut self.l_text).desired_width(60.0));

            ui.add_space(spacing::MD);
            if ui
                .button(egui_phosphor::regular::MAGNIFYING_GLASS_MINUS)
                .on_hover_text("Zoom out")
                .clicked()
            {
                self.zoom_out();
            }
            ui.label(format!("{} pt", self.controller.state().font_size));
            if ui
                .button(egui_phosphor::regular::MAGNIFYING_GLASS_PLUS)
                .on_hover_text("Zoom in")
                .clicked()
            {
                self.zoom_in();
            }

            ui.add_space(spacing::MD);
            if ui
                .button(format!("{} Generate", egui_phosphor::regular::FUNCTION))
                .on_hover_text("Enter")
                .clicked()
            {
                self.generate(ctx);
            }

            let status = self.controller.copy_status();
            let label = RichText::new(copy_button_label(status));
            let label = match status {
                CopyStatus::Copied => label.color(colors::SUCCESS),
                CopyStatus::Idle => label,
            };
            if ui.button(label).on_hover_text("Ctrl+C").clicked() {
                self.copy(now);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Exit", egui_phosphor::regular::SIGN_OUT))
                    .on_hover_text("Esc")
                    .clicked()
                {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ui
                    .button(egui_phosphor::regular::GEAR)
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.open_settings();
                }
            });
        });
    }

    /// Modal asking whether to run a large computation.
    fn show_confirmation(&mut self, ctx: &egui::Context) {
        let Some(warning) = self.controller.pending().copied() else {
            return;
        };
        let mut choice = None;

        egui::Window::new("Large computation")
            .id(egui::Id::new("confirm_large_computation"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(spacing::SM);
                    ui.label(
                        RichText::new(egui_phosphor::regular::WARNING)
                            .size(36.0)
                            .color(colors::WARNING),
                    );
                    ui.add_space(spacing::SM);
                    ui.label(format!(
                        "{} = {} is above the recommended maximum of {}.",
                        warning.parameter, warning.value, warning.threshold
                    ));
                    ui.label("The computation may be slow and the result very long.");
                    ui.add_space(spacing::MD);
                    ui.horizontal(|ui| {
                        if ui.button("Continue").clicked() {
                            choice = Some(true);
                        }
                        if ui.button("Cancel").clicked() {
                            choice = Some(false);
                        }
                    });
                });
            });

        match choice {
            Some(true) => {
                self.confirm_pending(ctx);
            }
            Some(false) => self.cancel_pending(),
            None => {}
        }
    }

    fn show_settings(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.settings_pending.as_mut() else {
            return;
        };
        match settings::ui::show(ctx, pending) {
            SettingsResult::Open => {}
            SettingsResult::Apply => {
                if let Some(edited) = self.settings_pending.take()
                    && !self.apply_settings(ctx, edited.clone())
                {
                    // Keep the window open so the values can be fixed.
                    self.settings_pending = Some(edited);
                }
            }
            SettingsResult::Cancel => {
                self.settings_pending = None;
            }
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        // Use Cmd on macOS, Ctrl on other platforms
        let modifiers = ctx.input(|i| i.modifiers);
        let cmd_or_ctrl = if cfg!(target_os = "macos") {
            modifiers.command
        } else {
            modifiers.ctrl
        };
        let dialog_open = self.controller.pending().is_some() || self.settings_pending.is_some();

        let (enter, escape, copy, settings) = ctx.input(|i| {
            let copy_event = i
                .events
                .iter()
                .any(|event| matches!(event, egui::Event::Copy));
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
                copy_event || (cmd_or_ctrl && i.key_pressed(egui::Key::C)),
                cmd_or_ctrl && i.key_pressed(egui::Key::Comma),
            )
        });

        // Escape - close the open dialog, otherwise exit
        if escape {
            if self.controller.pending().is_some() {
                self.cancel_pending();
            } else if self.settings_pending.is_some() {
                self.settings_pending = None;
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            return;
        }
        if dialog_open {
            return;
        }

        // Enter - generate
        if enter {
            self.generate(ctx);
        }

        // Cmd/Ctrl+C - copy the LaTeX, unless a text field owns the keyboard
        if copy && !ctx.wants_keyboard_input() {
            self.copy(now);
        }

        // Cmd/Ctrl+, - open settings
        if settings {
            self.open_settings();
        }
    }
}
