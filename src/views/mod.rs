//! Catalog builders.
//!
//! Each mode turns a task snapshot into an ordered list of view options with
//! task counts. Builders are pure: the same context and configuration always
//! produce the same catalog, and none of them modify their inputs.

pub mod all;
pub mod calendar;
pub mod date;
pub mod deadline;
pub mod filter;
pub mod label;
pub mod preset;
pub mod prioritized;
pub mod priority;
pub mod project;
pub mod queue;
pub mod sort;

pub use filter::BaselineFilter;
pub use preset::{Preset, PresetRegistry};
pub use prioritized::{Resolution, SourceCatalogs};
pub use sort::SortRegistry;

use crate::config::{ModeConfig, QueueConfiguration};
use crate::model::{Label, ModeName, Project, ProjectMetadataMap, Snapshot, Task, ViewOption};
use chrono::NaiveDate;
use log::*;
use serde::Serialize;

/// Everything a builder reads besides its mode configuration.
///
pub struct ViewContext<'a> {
    pub tasks: &'a [Task],
    pub projects: &'a [Project],
    pub labels: &'a [Label],
    pub project_metadata: ProjectMetadataMap,
    pub baseline: BaselineFilter,
    pub presets: PresetRegistry,
    pub sorts: SortRegistry,
    /// Calendar day the date buckets are relative to.
    pub today: NaiveDate,
}

impl<'a> ViewContext<'a> {
    /// Returns a context over the given collections with the built-in
    /// presets and comparators, relative to the local current day.
    ///
    pub fn new(tasks: &'a [Task], projects: &'a [Project], labels: &'a [Label]) -> ViewContext<'a> {
        ViewContext {
            tasks,
            projects,
            labels,
            project_metadata: ProjectMetadataMap::new(),
            baseline: BaselineFilter::default(),
            presets: PresetRegistry::with_defaults(),
            sorts: SortRegistry::with_defaults(),
            today: calendar::today(),
        }
    }

    pub fn from_snapshot(snapshot: &'a Snapshot) -> ViewContext<'a> {
        ViewContext::new(&snapshot.tasks, &snapshot.projects, &snapshot.labels)
    }

    pub fn with_today(mut self, today: NaiveDate) -> ViewContext<'a> {
        self.today = today;
        self
    }

    pub fn with_excluded_labels<I>(mut self, labels: I) -> ViewContext<'a>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.baseline = BaselineFilter::new(labels);
        self
    }

    pub fn with_project_metadata(mut self, metadata: ProjectMetadataMap) -> ViewContext<'a> {
        self.project_metadata = metadata;
        self
    }

    pub fn with_presets(mut self, presets: PresetRegistry) -> ViewContext<'a> {
        self.presets = presets;
        self
    }

    pub fn with_sorts(mut self, sorts: SortRegistry) -> ViewContext<'a> {
        self.sorts = sorts;
        self
    }

    /// Number of admitted tasks matching `predicate`.
    ///
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&Task) -> bool,
    {
        filter::count_tasks(self.tasks, &self.baseline, predicate)
    }

    pub fn project_priority(&self, project_id: &str) -> Option<i64> {
        self.project_metadata
            .get(project_id)
            .and_then(|metadata| metadata.priority)
    }

    /// Apply a mode's sort and empty filtering to a freshly built catalog.
    /// `fallback_key` is used when the mode does not name a sort key.
    pub(crate) fn finish(
        &self,
        options: Vec<ViewOption>,
        config: &ModeConfig,
        fallback_key: Option<&str>,
    ) -> Vec<ViewOption> {
        let key = config.sort_by.as_deref().or(fallback_key);
        let sorted = self.sorts.sort(&options, key, config.sort_direction);
        filter::filter_empty(sorted, config.hide_empty)
    }
}

/// The catalogs of every mode, computed together.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ViewCatalogs {
    pub project: Vec<ViewOption>,
    pub priority: Vec<ViewOption>,
    pub label: Vec<ViewOption>,
    pub date: Vec<ViewOption>,
    pub deadline: Vec<ViewOption>,
    pub preset: Vec<ViewOption>,
    pub all: Vec<ViewOption>,
    pub prioritized: Vec<ViewOption>,
}

impl ViewCatalogs {
    /// Build every catalog. The prioritized catalog references the final
    /// project, priority and preset catalogs, so anything hidden or excluded
    /// there is unavailable to it as well.
    ///
    pub fn build(ctx: &ViewContext, config: &QueueConfiguration) -> ViewCatalogs {
        let project = project::build(ctx, config.mode(ModeName::Project));
        let priority = priority::build(ctx, config.mode(ModeName::Priority));
        let preset = preset::build(ctx, config.mode(ModeName::Preset));
        let prioritized = prioritized::build(
            &config.prioritized_items,
            &SourceCatalogs {
                projects: &project,
                priorities: &priority,
                presets: &preset,
                project_metadata: &ctx.project_metadata,
            },
            config.mode(ModeName::Prioritized),
        );

        let catalogs = ViewCatalogs {
            label: label::build(ctx, config.mode(ModeName::Label)),
            date: date::build(ctx, config.mode(ModeName::Date)),
            deadline: deadline::build(ctx, config.mode(ModeName::Deadline)),
            all: all::build(ctx, config.mode(ModeName::All)),
            project,
            priority,
            preset,
            prioritized,
        };
        debug!(
            "Built catalogs for {} tasks relative to {}",
            ctx.tasks.len(),
            ctx.today
        );
        catalogs
    }

    /// Catalog of a mode. Modes without a builder have an empty catalog.
    ///
    pub fn options(&self, mode: ModeName) -> &[ViewOption] {
        match mode {
            ModeName::Project => &self.project,
            ModeName::Priority => &self.priority,
            ModeName::Label => &self.label,
            ModeName::Date => &self.date,
            ModeName::Deadline => &self.deadline,
            ModeName::Preset => &self.preset,
            ModeName::All => &self.all,
            ModeName::Prioritized => &self.prioritized,
            ModeName::Filter | ModeName::Assignee => &[],
        }
    }

    pub fn find(&self, mode: ModeName, id: &str) -> Option<&ViewOption> {
        self.options(mode).iter().find(|option| option.id == id)
    }
}
