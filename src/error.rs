//! Application-wide error types.
//!
//! Catalog building itself cannot fail; errors come from the edges: reading
//! settings, snapshots and command-line arguments.

pub use crate::config::ConfigError;
pub use crate::model::SnapshotError;

/// Main application error type.
///
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration and settings errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot loading errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization errors
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Malformed command-line arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
