//! View-composition engine for reviewing a task queue.
//!
//! A snapshot of tasks, projects and labels is turned into catalogs of view
//! options, one per mode (project, priority, label, due date, deadline,
//! preset, whole-list orderings and a curated prioritized list), each with
//! live task counts. A JSON configuration document decides how every
//! catalog is sorted and filtered.

pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod views;
