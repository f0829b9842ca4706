use std::path::PathBuf;

use thiserror::Error;

/// Errors while resolving or reading the dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for the expected shape.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// A `[columns]` key names no canonical column.
    #[error("Unknown column '{name}' in [columns]; expected one of: {expected}")]
    UnknownColumn { name: String, expected: String },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}
