//! Associated Laguerre polynomial generator - desktop application
//!
//! Expands L_n^l(x) exactly and shows the typeset result, with zoom and
//! copy-to-clipboard of the LaTeX markup.

use eframe::egui;
use laguerre_gui::{APP_TITLE, StudioApp};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}
