//! Configuration and settings management for PolyKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Designer settings (undo depth, pick radius, file layout)
//! - Recent files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Directory name under the platform config dir.
const APP_DIR: &str = "polykit";
/// Config file name inside [`APP_DIR`].
const CONFIG_FILE: &str = "config.toml";
/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 10;

/// Designer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Number of undo snapshots kept, including the current state
    pub history_capacity: usize,
    /// Pick radius for selecting and dragging points
    pub hit_radius: f64,
    /// Write scene files indented rather than compact
    pub pretty_json: bool,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            history_capacity: 20,
            hit_radius: 8.0,
            pretty_json: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Designer settings
    pub designer: DesignerSettings,
}

#[derive(Clone, Copy)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// Default config file location: `<config dir>/polykit/config.toml`.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.designer.history_capacity < 2 {
            return Err(ConfigError::ValueOutOfRange {
                key: "designer.history_capacity".to_string(),
                value: self.designer.history_capacity.to_string(),
            });
        }

        let radius = self.designer.hit_radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "designer.hit_radius".to_string(),
                value: radius.to_string(),
            });
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
