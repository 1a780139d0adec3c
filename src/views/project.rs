//! Project catalog in hierarchy order.
//!
//! The inbox comes first, followed by its own children. Then every root
//! project by `child_order`, each followed depth-first by its children.
//! Projects whose parent is missing from the roster, or excluded from it,
//! root their own subtree after the true roots. Counts are per project,
//! never aggregated over a subtree.

use super::ViewContext;
use crate::config::ModeConfig;
use crate::model::{palette, ModeName, OptionSource, Project, ViewOption};
use std::collections::HashSet;

pub const INBOX_LABEL: &str = "Inbox";

/// Build the project catalog.
///
pub fn build(ctx: &ViewContext, config: &ModeConfig) -> Vec<ViewOption> {
    let projects: Vec<&Project> = ctx
        .projects
        .iter()
        .filter(|project| !config.excludes(&project.id, &project.name))
        .collect();
    let present: HashSet<&str> = projects.iter().map(|project| project.id.as_str()).collect();

    let mut options = Vec::with_capacity(projects.len());
    if let Some(inbox) = projects.iter().find(|project| project.is_inbox_project) {
        options.push(project_option(ctx, inbox, INBOX_LABEL, 0).with_icon("inbox"));
        for child in ordered(&projects, |candidate| candidate.is_child_of(&inbox.id)) {
            walk(ctx, &projects, child, 1, &mut options);
        }
    }

    for root in ordered(&projects, |project| project.is_root()) {
        walk(ctx, &projects, root, 0, &mut options);
    }
    let orphans = ordered(&projects, |project| {
        project
            .parent_id
            .as_deref()
            .map_or(false, |parent| !parent.is_empty() && !present.contains(parent))
    });
    for orphan in orphans {
        walk(ctx, &projects, orphan, 0, &mut options);
    }

    ctx.finish(options, config, None)
}

fn walk<'p>(
    ctx: &ViewContext,
    projects: &[&'p Project],
    project: &'p Project,
    depth: usize,
    options: &mut Vec<ViewOption>,
) {
    options.push(project_option(ctx, project, &project.name, depth));
    for child in ordered(projects, |candidate| candidate.is_child_of(&project.id)) {
        walk(ctx, projects, child, depth + 1, options);
    }
}

/// Non-inbox projects matching `select`, by ascending `child_order`.
fn ordered<'p, F>(projects: &[&'p Project], select: F) -> Vec<&'p Project>
where
    F: Fn(&Project) -> bool,
{
    let mut selected: Vec<&Project> = projects
        .iter()
        .copied()
        .filter(|project| !project.is_inbox_project && select(*project))
        .collect();
    selected.sort_by_key(|project| project.child_order);
    selected
}

fn project_option(ctx: &ViewContext, project: &Project, label: &str, depth: usize) -> ViewOption {
    let mut option = ViewOption::new(ModeName::Project, &project.id, label)
        .with_icon("folder")
        .with_color(palette::hex(&project.color))
        .with_count(ctx.count(|task| task.project_id == project.id))
        .with_indent(depth)
        .with_source(OptionSource::Project(project.clone()));
    option.metadata.project_priority = ctx.project_priority(&project.id);
    option
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectMetadata, ProjectMetadataMap, Task};

    fn projects() -> Vec<Project> {
        vec![
            Project::new("home", "Home").with_order(2),
            Project::new("garden", "Garden").with_parent("home").with_order(1),
            Project::new("work", "Work").with_order(1),
            Project::new("inbox", "Inbox 2.0").as_inbox().with_order(0),
            Project::new("kitchen", "Kitchen").with_parent("home").with_order(0),
            Project::new("tiles", "Tiles").with_parent("kitchen"),
        ]
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("1", "Mow", "garden"),
            Task::new("2", "Call plumber", "home"),
            Task::new("3", "Pick grout", "tiles"),
            Task::new("4", "Sort mail", "inbox"),
            Task::new("5", "* Old paint colors", "home"),
            Task::new("6", "Review", "work"),
            Task::new("7", "Lost", "deleted-project"),
        ]
    }

    fn summary(options: &[ViewOption]) -> Vec<(&str, usize, usize)> {
        options
            .iter()
            .map(|option| (option.id.as_str(), option.indent, option.count))
            .collect()
    }

    #[test]
    fn test_hierarchy_order_and_counts() {
        let (tasks, projects) = (tasks(), projects());
        let ctx = ViewContext::new(&tasks, &projects, &[]);
        let options = build(&ctx, &ModeConfig::default());

        assert_eq!(
            summary(&options),
            vec![
                ("inbox", 0, 1),
                ("work", 0, 1),
                ("home", 0, 1),
                ("kitchen", 1, 0),
                ("tiles", 2, 1),
                ("garden", 1, 1),
            ]
        );
        assert_eq!(options[0].label, "Inbox");
        assert_eq!(options[2].label, "Home");
    }

    #[test]
    fn test_excluded_project_promotes_its_children() {
        let (tasks, projects) = (tasks(), projects());
        let ctx = ViewContext::new(&tasks, &projects, &[]);
        let config = ModeConfig::default().with_excluded(&["Kitchen", "inbox"]);
        let options = build(&ctx, &config);

        assert_eq!(
            summary(&options),
            vec![("work", 0, 1), ("home", 0, 1), ("garden", 1, 1), ("tiles", 0, 1)]
        );
    }

    #[test]
    fn test_every_project_is_reachable() {
        let projects = vec![
            Project::new("work", "Work").with_order(1),
            Project::new("q3", "Q3 goals").with_parent("archived-parent").with_order(5),
            Project::new("child", "Triage").with_parent("inbox"),
            Project::new("inbox", "Inbox").as_inbox(),
            Project::new("okr", "OKRs").with_parent("gone").with_order(2),
            Project::new("kr1", "Key result").with_parent("okr"),
        ];
        let tasks = vec![
            Task::new("1", "Draft goals", "q3"),
            Task::new("2", "Sort inbox", "child"),
            Task::new("3", "Measure", "kr1"),
        ];
        let ctx = ViewContext::new(&tasks, &projects, &[]);
        let options = build(&ctx, &ModeConfig::default());

        assert_eq!(
            summary(&options),
            vec![
                ("inbox", 0, 0),
                ("child", 1, 1),
                ("work", 0, 0),
                ("okr", 0, 0),
                ("kr1", 1, 1),
                ("q3", 0, 1),
            ]
        );
        assert_eq!(options.len(), projects.len());
    }

    #[test]
    fn test_inbox_children_become_roots_when_inbox_is_excluded() {
        let projects = vec![
            Project::new("inbox", "Inbox").as_inbox(),
            Project::new("child", "Triage").with_parent("inbox").with_order(3),
            Project::new("work", "Work").with_order(1),
        ];
        let ctx = ViewContext::new(&[], &projects, &[]);
        let options = build(&ctx, &ModeConfig::default().with_excluded(&["inbox"]));
        assert_eq!(summary(&options), vec![("work", 0, 0), ("child", 0, 0)]);
    }

    #[test]
    fn test_hide_empty_and_sort_apply_after_traversal() {
        let (tasks, projects) = (tasks(), projects());
        let ctx = ViewContext::new(&tasks, &projects, &[]);
        let config = ModeConfig::default()
            .with_hide_empty(true)
            .with_sort("name", None);
        let options = build(&ctx, &config);

        let ids: Vec<&str> = options.iter().map(|option| option.id.as_str()).collect();
        assert_eq!(ids, vec!["garden", "home", "inbox", "tiles", "work"]);
    }

    #[test]
    fn test_metadata_and_color() {
        let tasks = tasks();
        let projects = vec![Project::new("work", "Work").with_color("berry_red")];
        let mut metadata = ProjectMetadataMap::new();
        metadata.insert("work".to_string(), ProjectMetadata::with_priority(3));
        let ctx = ViewContext::new(&tasks, &projects, &[]).with_project_metadata(metadata);

        let options = build(&ctx, &ModeConfig::default());
        assert_eq!(options[0].color.as_deref(), Some("#b8256f"));
        assert_eq!(options[0].metadata.project_priority, Some(3));
        assert_eq!(
            options[0].metadata.source,
            OptionSource::Project(projects[0].clone())
        );
    }

    #[test]
    fn test_empty_roster() {
        let tasks = tasks();
        let ctx = ViewContext::new(&tasks, &[], &[]);
        assert!(build(&ctx, &ModeConfig::default()).is_empty());
    }
}
