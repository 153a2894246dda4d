//! PolyKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, DesignerSettings, MAX_RECENT_FILES};
pub use error::{ConfigError, SettingsError, SettingsResult};
