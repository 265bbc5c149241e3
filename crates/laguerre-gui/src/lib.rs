//! Associated Laguerre polynomial generator - GUI library
//!
//! This module exposes the application pieces for testing.

pub mod app;
pub mod canvas;
pub mod clipboard;
pub mod services;
pub mod settings;
pub mod theme;
pub mod toast;

pub use app::{APP_TITLE, StudioApp};
