//! Baseline filtering, counting and empty-option removal shared by every
//! catalog builder.

use crate::model::{Task, ViewOption};
use std::collections::HashSet;

/// Exclusion rules applied before every count: archived tasks and tasks
/// carrying an excluded label never count.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaselineFilter {
    excluded_labels: HashSet<String>,
}

impl BaselineFilter {
    pub fn new<I>(excluded_labels: I) -> BaselineFilter
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        BaselineFilter {
            excluded_labels: excluded_labels
                .into_iter()
                .map(|label| label.as_ref().to_owned())
                .collect(),
        }
    }

    pub fn admits(&self, task: &Task) -> bool {
        !task.is_archived()
            && !task
                .labels
                .iter()
                .any(|label| self.excluded_labels.contains(label))
    }
}

/// Count the admitted tasks matching `predicate`.
///
pub fn count_tasks<F>(tasks: &[Task], baseline: &BaselineFilter, mut predicate: F) -> usize
where
    F: FnMut(&Task) -> bool,
{
    tasks
        .iter()
        .filter(|task| baseline.admits(task) && predicate(task))
        .count()
}

/// Drop options without tasks when `hide` is set.
///
pub fn filter_empty(options: Vec<ViewOption>, hide: bool) -> Vec<ViewOption> {
    if !hide {
        return options;
    }
    options.into_iter().filter(|option| option.count > 0).collect()
}
