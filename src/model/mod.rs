//! Domain data model.
//!
//! Tasks, projects and labels as delivered by the task-tracking service,
//! plus the view options the engine produces from them.

mod error;
pub mod palette;
mod resource;
mod snapshot;
mod view;

pub use error::SnapshotError;
pub use resource::*;
pub use snapshot::Snapshot;
pub use view::*;
