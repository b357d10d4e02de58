// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Only presentation preferences are persisted. Form content is deliberately
//! never written anywhere: the contact form has no cross-session state.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Folio";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Light/dark/system theme preference.
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// When set, entrance animations sample straight to their final state.
    #[serde(default)]
    pub reduced_motion: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            reduced_motion: Some(false),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring a `--config-dir` override.
fn resolve_path(config_dir: Option<&str>) -> Option<PathBuf> {
    match config_dir {
        Some(dir) => Some(Path::new(dir).join(CONFIG_FILE)),
        None => get_default_config_path(),
    }
}

pub fn load(config_dir: Option<&str>) -> Result<Config> {
    if let Some(path) = resolve_path(config_dir) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, config_dir: Option<&str>) -> Result<()> {
    if let Some(path) = resolve_path(config_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            theme_mode: ThemeMode::Dark,
            reduced_motion: Some(true),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_with_explicit_dir_falls_back_to_default_when_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().to_string_lossy().into_owned();

        let loaded = load(Some(&dir)).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_with_explicit_dir_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().to_string_lossy().into_owned();
        let config = Config {
            theme_mode: ThemeMode::Light,
            reduced_motion: Some(false),
        };

        save(&config, Some(&dir)).expect("failed to save");
        let loaded = load(Some(&dir)).expect("failed to load");
        assert_eq!(loaded.theme_mode, ThemeMode::Light);
    }
}
