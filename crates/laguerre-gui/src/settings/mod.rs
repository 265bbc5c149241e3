//! Settings for the Laguerre studio window.
//!
//! Everything the user can change is persisted as TOML:
//! - General preferences (dark mode, cache size)
//! - Generator thresholds ([`StudioConfig`])
//! - The last n and l that were generated

mod persistence;
pub mod ui;

pub use persistence::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
};

use laguerre_model::StudioConfig;
use serde::{Deserialize, Serialize};

// ============================================================================
// Main Settings Struct
// ============================================================================

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub studio: StudioConfig,
    pub last_input: LastInput,
}

impl Settings {
    /// Replace out-of-range generator thresholds with defaults.
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = self.studio.validate() {
            tracing::warn!("Invalid generator settings ({}), using defaults", e);
            self.studio = StudioConfig::default();
        }
        if self.general.cache_capacity == 0 {
            self.general.cache_capacity = GeneralSettings::default().cache_capacity;
        }
        self
    }
}

// ============================================================================
// General Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
    /// How many evaluated polynomials to keep in memory.
    pub cache_capacity: usize,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            cache_capacity: 64,
        }
    }
}

// ============================================================================
// Last Input
// ============================================================================

/// Field contents restored on the next start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastInput {
    pub n: String,
    pub l: String,
}

impl Default for LastInput {
    fn default() -> Self {
        Self {
            n: "3".to_string(),
            l: "1".to_string(),
        }
    }
}
