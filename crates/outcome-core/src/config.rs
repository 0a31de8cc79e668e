//! Settings configuration
//!
//! File-backed configuration for the ambient parts of [`ResultSettings`].
//! Factories are code and are only configurable through the builder.
//!
//! ```toml
//! [logging]
//! enabled = true
//! level = "info"
//! ```
//!
//! [`ResultSettings`]: crate::ResultSettings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsResult;
use crate::logger::LogLevel;

/// Main settings configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfig {
    /// Logger configuration
    pub logging: LoggingConfig,
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Whether outcome values are logged at all
    pub enabled: bool,

    /// Minimum level forwarded to tracing
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::default(),
        }
    }
}

impl SettingsConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded settings configuration");
        Ok(config)
    }
}
