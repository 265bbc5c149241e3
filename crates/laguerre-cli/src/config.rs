//! Loading `StudioConfig` from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use laguerre_model::StudioConfig;
use tracing::debug;

/// Read and validate a config file, or return defaults when `path` is None.
pub fn load_config(path: Option<&Path>) -> Result<StudioConfig> {
    let Some(path) = path else {
        return Ok(StudioConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config = parse_config(&text).with_context(|| format!("load config {}", path.display()))?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse and validate TOML text.
pub fn parse_config(text: &str) -> Result<StudioConfig> {
    let config: StudioConfig = toml::from_str(text).context("parse TOML")?;
    config.validate()?;
    Ok(config)
}
