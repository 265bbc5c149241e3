//! Toast notifications.
//!
//! Notices from the controller appear at the bottom-right of the window and
//! dismiss themselves after a timeout.

use std::time::{Duration, Instant};

use egui::{Align2, Frame, RichText};
use laguerre_core::{Notice, Severity};

use crate::theme::{severity_style, spacing};

/// How long a toast stays up, by severity.
pub fn display_duration(severity: Severity) -> Duration {
    match severity {
        Severity::Info => Duration::from_secs(3),
        Severity::Warning => Duration::from_secs(5),
        Severity::Error => Duration::from_secs(8),
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notice: Notice,
    expires: Instant,
}

/// Visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Most toasts kept on screen at once.
    const MAX_VISIBLE: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        let expires = now + display_duration(notice.severity);
        self.toasts.push(Toast { notice, expires });
        if self.toasts.len() > Self::MAX_VISIBLE {
            let overflow = self.toasts.len() - Self::MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
    }

    /// Drop expired toasts.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires > now);
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.toasts.iter().map(|toast| &toast.notice)
    }

    /// Time until the next toast expires.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .map(|toast| toast.expires.saturating_duration_since(now))
            .min()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let mut dismissed = None;
        for (index, toast) in self.toasts.iter().enumerate() {
            let (color, icon) = severity_style(toast.notice.severity);
            let offset = -(spacing::MD + index as f32 * 72.0);
            egui::Area::new(egui::Id::new("toast").with(index))
                .anchor(Align2::RIGHT_BOTTOM, [-spacing::MD, offset])
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(360.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).size(18.0).color(color));
                            ui.add_space(spacing::XS);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&toast.notice.title).strong());
                                ui.label(&toast.notice.message);
                            });
                            if ui.small_button(egui_phosphor::regular::X).clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                });
        }
        if let Some(index) = dismissed {
            self.toasts.remove(index);
        }
    }
}
