//! Settings window.

use super::Settings;
use crate::theme::spacing;
use egui::{DragValue, RichText};

/// Result of showing the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResult {
    /// Keep the window open.
    Open,
    /// Apply changes and close.
    Apply,
    /// Cancel changes and close.
    Cancel,
}

/// Show the editable copy of the settings.
///
/// The caller validates on `Apply`; this window only edits numbers.
pub fn show(ctx: &egui::Context, settings: &mut Settings) -> SettingsResult {
    let mut result = SettingsResult::Open;
    let mut open = true;

    egui::Window::new(format!("{} Settings", egui_phosphor::regular::GEAR))
        .id(egui::Id::new("settings_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(360.0);

            section(ui, "General");
            ui.checkbox(&mut settings.general.dark_mode, "Dark mode");
            egui::Grid::new("settings_general").num_columns(2).show(ui, |ui| {
                ui.label("Cached polynomials");
                ui.add(DragValue::new(&mut settings.general.cache_capacity).range(1..=4096));
                ui.end_row();
            });

            let studio = &mut settings.studio;
            section(ui, "Generation");
            egui::Grid::new("settings_generation").num_columns(2).show(ui, |ui| {
                ui.label("Confirm above n or l of");
                ui.add(DragValue::new(&mut studio.validation.max_safe_value));
                ui.end_row();
                ui.label("Largest degree evaluated");
                ui.add(DragValue::new(&mut studio.evaluation.max_degree));
                ui.end_row();
            });

            section(ui, "Layout");
            egui::Grid::new("settings_layout").num_columns(2).show(ui, |ui| {
                ui.label("Single line up to (chars)");
                ui.add(DragValue::new(&mut studio.format.short_line).range(1..=usize::MAX));
                ui.end_row();
                ui.label("Paginate above (chars)");
                ui.add(DragValue::new(&mut studio.format.long_threshold));
                ui.end_row();
                ui.label("Page width (chars)");
                ui.add(DragValue::new(&mut studio.format.max_chunk).range(1..=usize::MAX));
                ui.end_row();
            });

            section(ui, "Display");
            egui::Grid::new("settings_display").num_columns(2).show(ui, |ui| {
                ui.label("Font size");
                ui.add(DragValue::new(&mut studio.display.default_font_size).range(1..=96));
                ui.end_row();
                ui.label("Zoom step");
                ui.add(DragValue::new(&mut studio.display.zoom_step).range(1..=24));
                ui.end_row();
                ui.label("Smallest font size");
                ui.add(DragValue::new(&mut studio.display.min_font_size).range(1..=96));
                ui.end_row();
                ui.label("\"Copied!\" shown for (ms)");
                ui.add(DragValue::new(&mut studio.clipboard.feedback_ms).range(0..=60_000));
                ui.end_row();
            });

            ui.add_space(spacing::MD);
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    result = SettingsResult::Apply;
                }
                if ui.button("Cancel").clicked() {
                    result = SettingsResult::Cancel;
                }
            });
        });

    if !open {
        result = SettingsResult::Cancel;
    }
    result
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(spacing::SM);
    ui.label(RichText::new(title).strong());
    ui.separator();
}
