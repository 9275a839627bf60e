//! Configuration commands

use super::load_config;
use crate::console::CliConsole;
use anyhow::Context;
use std::path::Path;

/// Print the effective configuration with API keys masked
pub fn show(config_file: Option<&Path>) -> anyhow::Result<()> {
    let console = CliConsole;
    console.print_header("Configuration");

    match config_file {
        Some(path) => console.info(&format!("Config file: {}", path.display())),
        None => console.info("No config file; using defaults and environment"),
    }

    let config = load_config(config_file, false)?;
    let rendered = serde_json::to_string_pretty(&config.redacted())
        .context("failed to render configuration")?;
    println!("{}", rendered);
    println!();

    match config.validate() {
        Ok(()) => console.success("Configuration is valid"),
        Err(e) => console.warn(&format!("Configuration is not usable yet: {}", e)),
    }
    Ok(())
}
