// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The application never writes it.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[flash]` - Banner fade and removal delays
//! - `[message_box]` - Dialog focus behavior
//! - `[status]` - Whether the status line is displayed
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`load_with_override()` with an explicit location
//! 2. Pass `--config-dir` on the command line
//! 3. Set `LASTKINGS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lastkings_ui::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//!
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let fade_ms = config.flash.fade_delay_ms.unwrap_or(config::DEFAULT_FLASH_FADE_DELAY_MS);
//! println!("Banners fade after {fade_ms} ms");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Flash banner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashConfig {
    /// Delay before a banner starts fading (milliseconds).
    #[serde(
        default = "default_fade_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_delay_ms: Option<u64>,

    /// Delay between the start of the fade and removal (milliseconds).
    #[serde(
        default = "default_removal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub removal_delay_ms: Option<u64>,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: default_fade_delay_ms(),
            removal_delay_ms: default_removal_delay_ms(),
        }
    }
}

/// Message box settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBoxConfig {
    /// Delay before the first button of a new dialog is focused (milliseconds).
    #[serde(
        default = "default_focus_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub focus_delay_ms: Option<u64>,
}

impl Default for MessageBoxConfig {
    fn default() -> Self {
        Self {
            focus_delay_ms: default_focus_delay_ms(),
        }
    }
}

/// Status line settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusConfig {
    /// Whether the status display is part of the page.
    #[serde(default = "default_status_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            enabled: default_status_enabled(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Flash banner settings.
    #[serde(default)]
    pub flash: FlashConfig,

    /// Message box settings.
    #[serde(default)]
    pub message_box: MessageBoxConfig,

    /// Status line settings.
    #[serde(default)]
    pub status: StatusConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_fade_delay_ms() -> Option<u64> {
    Some(DEFAULT_FLASH_FADE_DELAY_MS)
}

fn default_removal_delay_ms() -> Option<u64> {
    Some(DEFAULT_FLASH_REMOVAL_DELAY_MS)
}

fn default_focus_delay_ms() -> Option<u64> {
    Some(DEFAULT_FOCUS_DELAY_MS)
}

fn default_status_enabled() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("Settings could not be read; defaults are in use.".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        let content = toml::to_string_pretty(config).expect("serialize config");
        fs::write(path, content).expect("write config");
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            flash: FlashConfig {
                fade_delay_ms: Some(4500),
                removal_delay_ms: Some(250),
            },
            message_box: MessageBoxConfig {
                focus_delay_ms: Some(0),
            },
            status: StatusConfig {
                enabled: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[flash]\nfade_delay_ms = 1200\n").expect("write");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.flash.fade_delay_ms, Some(1200));
        assert_eq!(
            loaded.flash.removal_delay_ms,
            Some(DEFAULT_FLASH_REMOVAL_DELAY_MS)
        );
        assert_eq!(loaded.message_box, MessageBoxConfig::default());
        assert_eq!(loaded.status.enabled, Some(true));
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[flash\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
