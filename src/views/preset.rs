//! Preset catalog: named task predicates supplied by a registry.
//!
//! A predicate that fails for a task is treated as "no match" for that task
//! only; the failure is logged and every other count is unaffected.

use super::ViewContext;
use crate::config::ModeConfig;
use crate::model::{ModeName, OptionSource, PresetInfo, ProjectMetadataMap, Task, ViewOption};
use anyhow::Result;
use log::*;

/// Task predicate receiving the per-project metadata map.
pub type PresetPredicate = Box<dyn Fn(&Task, &ProjectMetadataMap) -> Result<bool> + Send + Sync>;

/// Project metadata priority at or above which a project counts as important.
pub const IMPORTANT_PROJECT_PRIORITY: i64 = 3;

/// A named predicate with its display information.
///
pub struct Preset {
    pub info: PresetInfo,
    predicate: PresetPredicate,
}

impl Preset {
    pub fn new<F>(id: &str, name: &str, predicate: F) -> Preset
    where
        F: Fn(&Task, &ProjectMetadataMap) -> Result<bool> + Send + Sync + 'static,
    {
        Preset {
            info: PresetInfo {
                id: id.to_owned(),
                name: name.to_owned(),
                description: None,
                icon: None,
            },
            predicate: Box::new(predicate),
        }
    }

    pub fn with_description(mut self, description: &str) -> Preset {
        self.info.description = Some(description.to_owned());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Preset {
        self.info.icon = Some(icon.to_owned());
        self
    }

    /// Evaluate the predicate, treating a failure as no match.
    ///
    pub fn matches(&self, task: &Task, metadata: &ProjectMetadataMap) -> bool {
        match (self.predicate)(task, metadata) {
            Ok(matched) => matched,
            Err(e) => {
                warn!(
                    "Preset '{}' failed for task {}: {}",
                    self.info.id, task.id, e
                );
                false
            }
        }
    }
}

/// Ordered collection of presets, unique by id.
///
#[derive(Default)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl PresetRegistry {
    /// Returns an empty registry.
    ///
    pub fn new() -> PresetRegistry {
        PresetRegistry { presets: vec![] }
    }

    /// Returns a registry holding the built-in presets.
    ///
    pub fn with_defaults() -> PresetRegistry {
        let mut registry = PresetRegistry::new();
        registry.register(
            Preset::new("no_due_date", "No Due Date", |task, _| Ok(task.due.is_none()))
                .with_description("Tasks without a due date")
                .with_icon("calendar-off"),
        );
        registry.register(
            Preset::new("no_deadline", "No Deadline", |task, _| {
                Ok(task.deadline.is_none())
            })
            .with_description("Tasks without a deadline")
            .with_icon("target"),
        );
        registry.register(
            Preset::new("no_labels", "No Labels", |task, _| Ok(task.labels.is_empty()))
                .with_description("Tasks without any label")
                .with_icon("tag"),
        );
        registry.register(
            Preset::new("urgent", "Urgent", |task, _| Ok(task.priority == 4))
                .with_description("Highest priority tasks")
                .with_icon("flame"),
        );
        registry.register(
            Preset::new("important_projects", "Important Projects", |task, metadata| {
                Ok(metadata
                    .get(&task.project_id)
                    .and_then(|project| project.priority)
                    .map_or(false, |priority| priority >= IMPORTANT_PROJECT_PRIORITY))
            })
            .with_description("Tasks in projects tagged priority 3 or higher")
            .with_icon("star"),
        );
        registry
    }

    /// Add a preset, replacing any preset with the same id in place.
    ///
    pub fn register(&mut self, preset: Preset) {
        match self
            .presets
            .iter_mut()
            .find(|existing| existing.info.id == preset.info.id)
        {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.info.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Build the preset catalog.
///
pub fn build(ctx: &ViewContext, config: &ModeConfig) -> Vec<ViewOption> {
    let options = ctx
        .presets
        .iter()
        .filter(|preset| !config.excludes(&preset.info.id, &preset.info.name))
        .map(|preset| {
            let mut option = ViewOption::new(ModeName::Preset, &preset.info.id, &preset.info.name)
                .with_count(ctx.count(|task| preset.matches(task, &ctx.project_metadata)))
                .with_source(OptionSource::Preset(preset.info.clone()));
            option.icon = preset.info.icon.clone();
            option.description = preset.info.description.clone();
            option
        })
        .collect();

    ctx.finish(options, config, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectMetadata;
    use anyhow::anyhow;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("1", "Plan", "work").with_priority(4),
            Task::new("2", "Read", "home").with_labels(&["deep"]).with_due("2024-06-12", false),
            Task::new("3", "* Archived", "work").with_priority(4),
            Task::new("4", "Ship", "side").with_deadline("2024-06-20"),
        ]
    }

    fn counts(options: &[ViewOption]) -> Vec<(&str, usize)> {
        options
            .iter()
            .map(|option| (option.id.as_str(), option.count))
            .collect()
    }

    #[test]
    fn test_default_presets() {
        let tasks = tasks();
        let mut metadata = ProjectMetadataMap::new();
        metadata.insert("work".to_string(), ProjectMetadata::with_priority(3));
        metadata.insert("home".to_string(), ProjectMetadata::with_priority(1));
        let ctx = ViewContext::new(&tasks, &[], &[]).with_project_metadata(metadata);

        let options = build(&ctx, &ModeConfig::default());
        assert_eq!(
            counts(&options),
            vec![
                ("no_due_date", 2),
                ("no_deadline", 2),
                ("no_labels", 2),
                ("urgent", 1),
                ("important_projects", 1),
            ]
        );
        assert_eq!(options[3].icon.as_deref(), Some("flame"));
        assert!(options[0].description.is_some());
    }

    #[test]
    fn test_failing_predicate_is_isolated() {
        let tasks = tasks();
        let mut presets = PresetRegistry::new();
        presets.register(Preset::new("fragile", "Fragile", |task, _| {
            if task.project_id == "side" {
                Err(anyhow!("cannot evaluate side projects"))
            } else {
                Ok(true)
            }
        }));
        presets.register(Preset::new("everything", "Everything", |_, _| Ok(true)));
        let ctx = ViewContext::new(&tasks, &[], &[]).with_presets(presets);

        let options = build(&ctx, &ModeConfig::default());
        assert_eq!(counts(&options), vec![("fragile", 2), ("everything", 3)]);
    }

    #[test]
    fn test_important_projects_without_metadata_is_a_plain_miss() {
        let presets = PresetRegistry::with_defaults();
        let preset = presets.get("important_projects").unwrap();
        let task = Task::new("1", "Plan", "untagged");
        let mut metadata = ProjectMetadataMap::new();
        metadata.insert("untagged".to_string(), ProjectMetadata::default());

        assert!(!(preset.predicate)(&task, &ProjectMetadataMap::new()).unwrap());
        assert!(!(preset.predicate)(&task, &metadata).unwrap());
        assert!(!preset.matches(&task, &metadata));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut presets = PresetRegistry::with_defaults();
        let before = presets.len();
        presets.register(Preset::new("no_labels", "Unlabelled", |_, _| Ok(false)));
        assert_eq!(presets.len(), before);
        assert_eq!(presets.iter().nth(2).unwrap().info.name, "Unlabelled");
    }

    #[test]
    fn test_exclusions() {
        let tasks = tasks();
        let ctx = ViewContext::new(&tasks, &[], &[]);
        let config = ModeConfig::default().with_excluded(&["urgent", "No Labels"]);
        let options = build(&ctx, &config);
        assert!(options.iter().all(|option| option.id != "urgent" && option.id != "no_labels"));
        assert_eq!(options.len(), 3);
    }
}
