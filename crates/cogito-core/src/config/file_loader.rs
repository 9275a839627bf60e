//! File-based configuration loading

use super::model::Config;
use crate::error::{CogitoError, CogitoResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON and TOML formats based on file extension; anything that is
/// not `.toml` is parsed as JSON. Fields missing from the file keep their
/// defaults.
pub fn load_from_file(path: &Path) -> CogitoResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        CogitoError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            CogitoError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            CogitoError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}
