//! Snapshot-specific error types.

use std::path::PathBuf;

/// Errors that can occur while loading a task snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file
    #[error("Failed to read snapshot {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Snapshot content is not a valid task collection
    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
}
