//! Configuration loading from multiple sources

use super::env_loader;
use super::file_loader;
use super::model::Config;
use crate::error::CogitoResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration file (replaces everything loaded before it)
    File(PathBuf),
    /// Process environment, including a `.env` file
    Environment,
    /// Explicit key/value overrides using the environment variable names
    Overrides(HashMap<String, String>),
}

/// Configuration loader with support for multiple sources.
///
/// Sources are applied in the order they were added, starting from
/// [`Config::default`]. The result is validated before it is returned.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add a file source if a path was given
    pub fn with_optional_file<P: AsRef<Path>>(self, path: Option<P>) -> Self {
        match path {
            Some(path) => self.with_file(path),
            None => self,
        }
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add explicit overrides
    pub fn with_overrides(self, overrides: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::Overrides(overrides))
    }

    /// Load configuration from all sources without validating it
    pub fn load_unchecked(&self) -> CogitoResult<Config> {
        let mut config = Config::default();

        for source in &self.sources {
            match source {
                ConfigSource::File(path) => {
                    tracing::debug!(path = %path.display(), "loading config file");
                    config = file_loader::load_from_file(path)?;
                }
                ConfigSource::Environment => env_loader::apply_process_env(&mut config)?,
                ConfigSource::Overrides(map) => {
                    env_loader::apply_env(&mut config, |key| map.get(key).cloned())?
                }
            }
        }

        tracing::debug!(
            provider = %config.provider,
            model = config.active_model(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> CogitoResult<Config> {
        let config = self.load_unchecked()?;
        config.validate()?;
        Ok(config)
    }
}
