// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Pass an explicit directory (the `--config-dir` CLI flag)
//! 2. Set the `MENAGERIE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform config directory under `Menagerie/`
//!
//! An unreadable or unparsable file is reported once and replaced by
//! defaults; it is never fatal.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "Menagerie";
const CONFIG_DIR_ENV: &str = "MENAGERIE_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pins the gallery shuffle order. Absent means a fresh order per launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,

    /// Page width in logical pixels; clamped through `PageWidth` when used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_width: Option<f32>,
}

fn resolve_dir(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

fn config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    resolve_dir(dir_override).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, falling back to defaults when the file is
/// missing, unreadable, or malformed. Failures are logged, not propagated.
#[must_use]
pub fn load(dir_override: Option<&Path>) -> Config {
    let Some(path) = config_path(dir_override) else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings file");
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| Error::Io(e.to_string()))?;
    toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
}

/// Saves the configuration to the resolved location, creating the directory
/// if needed.
pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    let path = config_path(dir_override)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Io(e.to_string()))?;
    }
    let contents = toml::to_string(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, contents).map_err(|e| Error::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            shuffle_seed: Some(42),
            page_width: Some(300.0),
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let config = load(Some(dir.path()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "shuffle_seed = \"not a number\"").expect("write");

        let config = load(Some(dir.path()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let rendered = toml::to_string(&Config::default()).expect("serialize");
        assert!(rendered.is_empty());
    }
}
