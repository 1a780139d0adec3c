//! The `all` mode: orderings of the full task list rather than subsets.
//!
//! Every option carries the same count, the number of admitted tasks.

use super::ViewContext;
use crate::config::ModeConfig;
use crate::model::{ModeName, OptionSource, Project, SortDefinition, Task, TaskOrder, ViewOption};
use std::{cmp::Ordering, collections::HashMap};

const DEFINITIONS: [(&str, &str, &str, &str, TaskOrder); 6] = [
    ("default", "Default", "Tasks in their original order", "list", TaskOrder::Default),
    ("priority", "Priority", "Most urgent first", "flag", TaskOrder::Priority),
    ("due_date", "Due Date", "Earliest due date first", "calendar", TaskOrder::DueDate),
    ("deadline", "Deadline", "Earliest deadline first", "target", TaskOrder::Deadline),
    ("project", "Project", "Grouped by project name", "folder", TaskOrder::Project),
    ("content", "Alphabetical", "By task content", "sort-asc", TaskOrder::Content),
];

/// The fixed list of sort definitions.
///
pub fn sort_definitions() -> Vec<SortDefinition> {
    DEFINITIONS
        .iter()
        .map(|&(id, name, description, icon, order)| SortDefinition {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            order,
        })
        .collect()
}

pub fn definition(id: &str) -> Option<SortDefinition> {
    sort_definitions()
        .into_iter()
        .find(|definition| definition.id == id)
}

/// Build the `all` catalog.
///
pub fn build(ctx: &ViewContext, config: &ModeConfig) -> Vec<ViewOption> {
    let total = ctx.count(|_| true);
    let options = sort_definitions()
        .into_iter()
        .filter(|definition| !config.excludes(&definition.id, &definition.name))
        .map(|definition| {
            ViewOption::new(ModeName::All, &definition.id, &definition.name)
                .with_icon(&definition.icon)
                .with_description(&definition.description)
                .with_count(total)
                .with_source(OptionSource::Sort(definition))
        })
        .collect();

    ctx.finish(options, config, None)
}

impl SortDefinition {
    /// Stably order tasks by this definition. Tasks lacking the sorted field
    /// go last.
    ///
    pub fn sort_tasks(&self, tasks: &mut [&Task], projects: &[Project]) {
        match self.order {
            TaskOrder::Default => {}
            TaskOrder::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
            TaskOrder::DueDate => {
                tasks.sort_by(|a, b| nones_last(a.due_day(), b.due_day()));
            }
            TaskOrder::Deadline => {
                tasks.sort_by(|a, b| nones_last(a.deadline_day(), b.deadline_day()));
            }
            TaskOrder::Project => {
                let names: HashMap<&str, String> = projects
                    .iter()
                    .map(|project| (project.id.as_str(), project.name.to_lowercase()))
                    .collect();
                tasks.sort_by(|a, b| {
                    nones_last(
                        names.get(a.project_id.as_str()),
                        names.get(b.project_id.as_str()),
                    )
                });
            }
            TaskOrder::Content => {
                tasks.sort_by_cached_key(|task| task.content.to_lowercase());
            }
        }
    }
}

fn nones_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("1", "write tests", "b").with_due("2024-06-20", false),
            Task::new("2", "Answer mail", "a").with_priority(4).with_deadline("2024-06-15"),
            Task::new("3", "* archived", "a"),
            Task::new("4", "Book venue", "zz").with_priority(3).with_due("2024-06-13", false),
        ]
    }

    fn sorted_ids(order: &str, tasks: &[Task], projects: &[Project]) -> Vec<String> {
        let mut refs: Vec<&Task> = tasks.iter().collect();
        definition(order).unwrap().sort_tasks(&mut refs, projects);
        refs.iter().map(|task| task.id.clone()).collect()
    }

    #[test]
    fn test_every_option_has_total_count() {
        let tasks = tasks();
        let ctx = ViewContext::new(&tasks, &[], &[]);
        let options = build(&ctx, &ModeConfig::default());
        assert_eq!(options.len(), 6);
        assert!(options.iter().all(|option| option.count == 3));
        assert!(matches!(options[0].metadata.source, OptionSource::Sort(_)));
    }

    #[test]
    fn test_exclusions() {
        let ctx = ViewContext::new(&[], &[], &[]);
        let options = build(&ctx, &ModeConfig::default().with_excluded(&["content", "Deadline"]));
        let ids: Vec<&str> = options.iter().map(|option| option.id.as_str()).collect();
        assert_eq!(ids, vec!["default", "priority", "due_date", "project"]);
    }

    #[test]
    fn test_sort_tasks() {
        let tasks = tasks();
        let projects = vec![Project::new("a", "Zeta"), Project::new("b", "alpha")];
        assert_eq!(sorted_ids("default", &tasks, &projects), vec!["1", "2", "3", "4"]);
        assert_eq!(sorted_ids("priority", &tasks, &projects), vec!["2", "4", "1", "3"]);
        assert_eq!(sorted_ids("due_date", &tasks, &projects), vec!["4", "1", "2", "3"]);
        assert_eq!(sorted_ids("deadline", &tasks, &projects), vec!["2", "1", "3", "4"]);
        assert_eq!(sorted_ids("project", &tasks, &projects), vec!["1", "2", "3", "4"]);
        assert_eq!(sorted_ids("content", &tasks, &projects), vec!["3", "2", "4", "1"]);
    }
}
