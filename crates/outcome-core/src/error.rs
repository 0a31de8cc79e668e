// Settings Error Types
//
// Failures raised while loading outcome settings. Building settings and
// creating reasons never fail.

use thiserror::Error;

/// Error type for settings configuration
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading the configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or does not match the schema
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Type alias for settings results
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
