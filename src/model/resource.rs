use crate::views::calendar;
use chrono::NaiveDate;
use fake::Dummy;
use log::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Content prefix marking a task as archived. Archived tasks never count.
pub const ARCHIVE_MARKER: &str = "* ";

/// Raw priority of a task that does not specify one.
pub const DEFAULT_PRIORITY: u8 = 1;

/// Defines due date data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    pub date: String,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Defines deadline data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub date: String,
}

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub project_id: String,
    #[serde(default = "default_priority")]
    pub priority: u8, // 1..=4, 4 is the most urgent
    #[serde(default)]
    pub labels: Vec<String>, // label names, no duplicates
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub deadline: Option<Deadline>,
}

fn default_priority() -> u8 {
    DEFAULT_PRIORITY
}

impl Task {
    /// Returns a new task with the lowest priority and no labels or dates.
    ///
    pub fn new(id: &str, content: &str, project_id: &str) -> Task {
        Task {
            id: id.to_owned(),
            content: content.to_owned(),
            project_id: project_id.to_owned(),
            priority: DEFAULT_PRIORITY,
            labels: vec![],
            due: None,
            deadline: None,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Task {
        self.priority = priority;
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Task {
        self.labels = vec![];
        for label in labels {
            if !self.has_label(label) {
                self.labels.push((*label).to_owned());
            }
        }
        self
    }

    pub fn with_due(mut self, date: &str, is_recurring: bool) -> Task {
        self.due = Some(Due {
            date: date.to_owned(),
            is_recurring,
        });
        self
    }

    pub fn with_deadline(mut self, date: &str) -> Task {
        self.deadline = Some(Deadline {
            date: date.to_owned(),
        });
        self
    }

    /// Whether the content carries the archive marker.
    ///
    pub fn is_archived(&self) -> bool {
        self.content.starts_with(ARCHIVE_MARKER)
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }

    /// Calendar day of the due date, ignoring any time of day.
    ///
    pub fn due_day(&self) -> Option<NaiveDate> {
        let due = self.due.as_ref()?;
        let day = calendar::parse_day(&due.date);
        if day.is_none() {
            debug!("Task {} has unreadable due date '{}'", self.id, due.date);
        }
        day
    }

    /// Calendar day of the deadline, ignoring any time of day.
    ///
    pub fn deadline_day(&self) -> Option<NaiveDate> {
        let deadline = self.deadline.as_ref()?;
        let day = calendar::parse_day(&deadline.date);
        if day.is_none() {
            debug!(
                "Task {} has unreadable deadline '{}'",
                self.id, deadline.date
            );
        }
        day
    }
}

/// Defines project data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String, // palette name, see `model::palette`
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub child_order: i32,
    #[serde(default)]
    pub is_inbox_project: bool,
}

fn default_color() -> String {
    crate::model::palette::DEFAULT_COLOR.to_string()
}

impl Project {
    pub fn new(id: &str, name: &str) -> Project {
        Project {
            id: id.to_owned(),
            name: name.to_owned(),
            color: default_color(),
            parent_id: None,
            child_order: 0,
            is_inbox_project: false,
        }
    }

    pub fn with_parent(mut self, parent_id: &str) -> Project {
        self.parent_id = Some(parent_id.to_owned());
        self
    }

    pub fn with_order(mut self, child_order: i32) -> Project {
        self.child_order = child_order;
        self
    }

    pub fn with_color(mut self, color: &str) -> Project {
        self.color = color.to_owned();
        self
    }

    pub fn as_inbox(mut self) -> Project {
        self.is_inbox_project = true;
        self
    }

    /// A project without a parent reference. An empty parent id counts as none.
    ///
    pub fn is_root(&self) -> bool {
        self.parent_id.as_deref().map_or(true, str::is_empty)
    }

    pub fn is_child_of(&self, parent_id: &str) -> bool {
        self.parent_id.as_deref() == Some(parent_id)
    }
}

/// Defines label data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Label {
    pub fn new(id: &str, name: &str) -> Label {
        Label {
            id: id.to_owned(),
            name: name.to_owned(),
            color: default_color(),
        }
    }
}

/// Per-project metadata supplied alongside the task data.
///
/// Only `priority` is interpreted; every other key is carried through.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProjectMetadata {
    pub fn with_priority(priority: i64) -> ProjectMetadata {
        ProjectMetadata {
            priority: Some(priority),
            extra: serde_json::Map::new(),
        }
    }
}

/// Project id -> metadata.
pub type ProjectMetadataMap = HashMap<String, ProjectMetadata>;
