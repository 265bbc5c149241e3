//! Theme and styling constants

use laguerre_core::Severity;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
    pub const INFO: Color32 = Color32::from_rgb(59, 130, 246);
}

/// Accent color and icon for a notice.
pub fn severity_style(severity: Severity) -> (egui::Color32, &'static str) {
    match severity {
        Severity::Info => (colors::INFO, egui_phosphor::regular::INFO),
        Severity::Warning => (colors::WARNING, egui_phosphor::regular::WARNING),
        Severity::Error => (colors::ERROR, egui_phosphor::regular::X_CIRCLE),
    }
}

/// Switch between the stock light and dark visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}
