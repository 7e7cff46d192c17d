//! `config.toml` loading and saving.
//!
//! A missing or blank file yields `AppConfig::default()`. Saves go through
//! [`AtomicFile`] so a crash never leaves a half-written config behind.

use std::path::PathBuf;

use namesake_core::config::AppConfig;
use namesake_core::error::{NamesakeError, Result};

use crate::paths::NamesakePaths;
use crate::storage::AtomicFile;

/// Reads and writes the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicFile,
}

impl ConfigService {
    /// Creates a service for the platform default `config.toml`.
    pub fn new() -> Result<Self> {
        let path = NamesakePaths::config_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a service for an explicit file (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    /// Loads the configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<AppConfig> {
        match self.file.read()? {
            Some(content) => {
                let config: AppConfig = toml::from_str(&content).map_err(|e| {
                    NamesakeError::config(format!(
                        "Failed to parse {}: {}",
                        self.file.path().display(),
                        e
                    ))
                })?;
                tracing::debug!(path = %self.file.path().display(), "Loaded config");
                Ok(config)
            }
            None => {
                tracing::debug!(
                    path = %self.file.path().display(),
                    "No config file, using defaults"
                );
                Ok(AppConfig::default())
            }
        }
    }

    /// Writes the configuration atomically.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let content = toml::to_string_pretty(config)?;
        self.file.write(&content)?;
        tracing::info!(path = %self.file.path().display(), "Saved config");
        Ok(())
    }

    /// Applies `f` to the stored configuration under a file lock and saves
    /// the result.
    pub fn update<F>(&self, f: F) -> Result<AppConfig>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut updated = AppConfig::default();
        self.file.update(|current| {
            let mut config = match current {
                Some(content) => toml::from_str(&content)?,
                None => AppConfig::default(),
            };
            f(&mut config);
            let content = toml::to_string_pretty(&config)?;
            updated = config;
            Ok(content)
        })?;
        Ok(updated)
    }
}
