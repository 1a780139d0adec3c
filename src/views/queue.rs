//! Resolution of a selected option back to the tasks it counts.
//!
//! For every mode with a catalog, the tasks returned for an option are
//! exactly the tasks its count was computed from.

use super::{all, date::DateBucket, deadline::DeadlineBucket, priority, ViewContext};
use crate::model::{ModeName, Task, ViewOption};

/// Tasks behind a single option, in snapshot order. Options of the `all`
/// mode return every admitted task ordered by their sort definition.
///
pub fn select<'t>(ctx: &ViewContext<'t>, option: &ViewOption) -> Vec<&'t Task> {
    let mut selected: Vec<&'t Task> = ctx
        .tasks
        .iter()
        .filter(|task| ctx.baseline.admits(task) && matches(ctx, option, task))
        .collect();

    if option.mode == ModeName::All {
        if let Some(definition) = all::definition(&option.id) {
            definition.sort_tasks(&mut selected, ctx.projects);
        }
    }
    selected
}

/// Tasks behind any of the given options, in snapshot order and without
/// duplicates.
///
pub fn select_any<'t>(ctx: &ViewContext<'t>, options: &[ViewOption]) -> Vec<&'t Task> {
    ctx.tasks
        .iter()
        .filter(|task| {
            ctx.baseline.admits(task) && options.iter().any(|option| matches(ctx, option, task))
        })
        .collect()
}

fn matches(ctx: &ViewContext, option: &ViewOption, task: &Task) -> bool {
    match option.mode {
        ModeName::Project => task.project_id == option.id,
        ModeName::Priority => priority::parse_id(&option.id) == Some(task.priority),
        ModeName::Label => ctx
            .labels
            .iter()
            .find(|label| label.id == option.id)
            .map_or(false, |label| task.has_label(&label.name)),
        ModeName::Date => {
            DateBucket::from_id(&option.id).map_or(false, |bucket| bucket.contains(task, ctx.today))
        }
        ModeName::Deadline => DeadlineBucket::from_id(&option.id)
            .map_or(false, |bucket| bucket.contains(task, ctx.today)),
        ModeName::Preset => ctx
            .presets
            .get(&option.id)
            .map_or(false, |preset| preset.matches(task, &ctx.project_metadata)),
        ModeName::All => true,
        // Prioritized entries keep the mode of the catalog they came from.
        ModeName::Prioritized | ModeName::Filter | ModeName::Assignee => false,
    }
}
