//! Command implementations

pub mod call;
pub mod config;
pub mod serve;
pub mod tools;

use anyhow::Context;
use cogito_core::config::{Config, ConfigLoader};
use std::path::Path;

/// Defaults, then the optional file, then the environment (including `.env`)
pub(crate) fn load_config(config_file: Option<&Path>, validate: bool) -> anyhow::Result<Config> {
    let loader = ConfigLoader::new()
        .with_optional_file(config_file)
        .with_env();
    let config = if validate {
        loader.load()
    } else {
        loader.load_unchecked()
    };
    config.context("failed to load configuration")
}

/// Cancellation token that fires on Ctrl-C
pub(crate) fn ctrl_c_token() -> tokio_util::sync::CancellationToken {
    let token = tokio_util::sync::CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("interrupt received");
                trigger.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "cannot listen for Ctrl-C"),
        }
    });
    token
}
