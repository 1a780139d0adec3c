use super::error::SnapshotError;
use super::resource::{Label, Project, Task};
use log::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// An in-memory copy of the task collection a catalog is computed from.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Snapshot {
    /// Parse a snapshot from its JSON representation.
    ///
    pub fn from_json(contents: &str) -> Result<Snapshot, SnapshotError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read and parse a snapshot file.
    ///
    pub fn from_path(path: &Path) -> Result<Snapshot, SnapshotError> {
        let contents = fs::read_to_string(path).map_err(|e| SnapshotError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let snapshot = Snapshot::from_json(&contents)?;
        debug!(
            "Loaded snapshot from {}: {} tasks, {} projects, {} labels",
            path.display(),
            snapshot.tasks.len(),
            snapshot.projects.len(),
            snapshot.labels.len()
        );
        Ok(snapshot)
    }
}
