//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur while obtaining configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// HTTP request for the configuration document failed
    #[error("Failed to fetch configuration: {0}")]
    FetchFailed(#[from] reqwest::Error),

    /// Configuration endpoint answered with a non-success status
    #[error("Configuration request to {url} failed with status {status}")]
    BadStatus { url: String, status: u16 },

    /// Failed to load configuration file
    #[error("Failed to load configuration from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document is not valid JSON
    #[error("Failed to parse configuration document: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// Document is JSON but does not have the expected shape
    #[error("Invalid configuration at {path}: {reason}")]
    Invalid { path: String, reason: String },

    /// Failed to deserialize settings file
    #[error("Failed to deserialize settings: {0}")]
    DeserializationFailed(String),
}

impl ConfigError {
    pub(crate) fn invalid(path: &str, reason: &str) -> ConfigError {
        ConfigError::Invalid {
            path: path.to_owned(),
            reason: reason.to_owned(),
        }
    }
}
