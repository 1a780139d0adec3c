use super::resource::{Label, Project};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping strategies a queue can be reviewed by.
///
/// `Filter` and `Assignee` are accepted in configuration documents but have
/// no catalog of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeName {
    Project,
    Priority,
    Label,
    Date,
    Deadline,
    Preset,
    All,
    Filter,
    Assignee,
    Prioritized,
}

impl ModeName {
    pub const MODES: [ModeName; 10] = [
        ModeName::Project,
        ModeName::Priority,
        ModeName::Label,
        ModeName::Date,
        ModeName::Deadline,
        ModeName::Preset,
        ModeName::All,
        ModeName::Filter,
        ModeName::Assignee,
        ModeName::Prioritized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModeName::Project => "project",
            ModeName::Priority => "priority",
            ModeName::Label => "label",
            ModeName::Date => "date",
            ModeName::Deadline => "deadline",
            ModeName::Preset => "preset",
            ModeName::All => "all",
            ModeName::Filter => "filter",
            ModeName::Assignee => "assignee",
            ModeName::Prioritized => "prioritized",
        }
    }

    pub fn parse(name: &str) -> Option<ModeName> {
        ModeName::MODES
            .iter()
            .copied()
            .find(|mode| mode.as_str() == name)
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display information for a registered preset.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Task orderings offered by the `all` mode.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOrder {
    Default,
    Priority,
    DueDate,
    Deadline,
    Project,
    Content,
}

/// A named way of ordering the full task list.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub order: TaskOrder,
}

/// The domain object a view option was built from.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionSource {
    Project(Project),
    Label(Label),
    Preset(PresetInfo),
    Sort(SortDefinition),
    Bucket,
}

/// Free-form metadata attached to a view option.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionMetadata {
    pub source: OptionSource,
    /// Priority tag of the underlying project, from project metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_priority: Option<i64>,
    /// Set on options produced by a `priority-projects` expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard_priority: Option<i64>,
}

impl OptionMetadata {
    pub fn new(source: OptionSource) -> OptionMetadata {
        OptionMetadata {
            source,
            project_priority: None,
            wildcard_priority: None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard_priority.is_some()
    }
}

/// One entry of a mode's catalog.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewOption {
    pub id: String,
    pub label: String,
    pub mode: ModeName,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub count: usize,
    pub indent: usize,
    pub metadata: OptionMetadata,
}

impl ViewOption {
    /// Returns a new option with no count and bucket metadata.
    ///
    pub fn new(mode: ModeName, id: &str, label: &str) -> ViewOption {
        ViewOption {
            id: id.to_owned(),
            label: label.to_owned(),
            mode,
            icon: None,
            color: None,
            description: None,
            count: 0,
            indent: 0,
            metadata: OptionMetadata::new(OptionSource::Bucket),
        }
    }

    pub fn with_icon(mut self, icon: &str) -> ViewOption {
        self.icon = Some(icon.to_owned());
        self
    }

    pub fn with_color(mut self, color: &str) -> ViewOption {
        self.color = Some(color.to_owned());
        self
    }

    pub fn with_description(mut self, description: &str) -> ViewOption {
        self.description = Some(description.to_owned());
        self
    }

    pub fn with_count(mut self, count: usize) -> ViewOption {
        self.count = count;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> ViewOption {
        self.indent = indent;
        self
    }

    pub fn with_source(mut self, source: OptionSource) -> ViewOption {
        self.metadata.source = source;
        self
    }
}
