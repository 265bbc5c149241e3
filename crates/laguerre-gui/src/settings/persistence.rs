//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific application data folder:
//! - macOS: ~/Library/Application Support/org.laguerre.Laguerre-Studio/
//! - Windows: %APPDATA%/laguerre/Laguerre Studio/config/
//! - Linux: ~/.config/laguerrestudio/

use super::Settings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "laguerre";
const APP_NAME: &str = "Laguerre Studio";
const CONFIG_FILENAME: &str = "settings.toml";

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform config directory.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from `path`.
///
/// Returns default settings if the file doesn't exist or cannot be parsed.
/// Invalid generator thresholds fall back to defaults, see [`Settings::sanitized`].
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings.sanitized()
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to the platform config directory.
pub fn save_settings(settings: &Settings) -> Result<(), String> {
    let Some(path) = settings_path() else {
        return Err("Could not determine settings path".to_string());
    };
    save_settings_to(&path, settings)
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(path, content).map_err(|e| format!("Failed to write settings file: {}", e))?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}
