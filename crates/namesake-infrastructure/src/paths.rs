//! Unified path management for namesake files.
//!
//! Directories are resolved via `AppPaths` from the version-migrate crate so
//! they follow platform conventions (XDG on Linux, Application Support on
//! macOS, AppData on Windows).

use std::path::PathBuf;
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for namesake_core::NamesakeError {
    fn from(err: PathError) -> Self {
        namesake_core::NamesakeError::config(err.to_string())
    }
}

/// Unified path management for namesake.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/namesake/          # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/namesake/     # Data directory
/// ├── favorites.json           # Favorited people
/// ├── person_details.json      # Per-person detail records
/// └── names/                   # Optional custom name tables
///     ├── german.json
///     └── british.json
/// ```
pub struct NamesakePaths;

impl NamesakePaths {
    const APP_NAME: &'static str = "namesake";

    fn app_paths() -> AppPaths {
        AppPaths::new(Self::APP_NAME)
    }

    /// Returns the namesake configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the namesake data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .data_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory searched for custom name tables.
    pub fn names_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("names"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = NamesakePaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = NamesakePaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
        assert!(config_dir.ends_with("namesake"));
    }

    #[test]
    fn test_names_dir() {
        let names_dir = NamesakePaths::names_dir().unwrap();
        assert!(names_dir.ends_with("names"));
        let data_dir = NamesakePaths::data_dir().unwrap();
        assert!(names_dir.starts_with(&data_dir));
    }
}
