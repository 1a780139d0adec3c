//! The four fixed priority buckets.

use super::ViewContext;
use crate::config::ModeConfig;
use crate::model::{ModeName, ViewOption};

/// Raw priorities from most to least urgent, with their display label and
/// color.
const PRIORITIES: [(u8, &str, &str); 4] = [
    (4, "P1", "#d1453b"),
    (3, "P2", "#eb8909"),
    (2, "P3", "#246fe0"),
    (1, "P4", "#808080"),
];

/// Build the priority catalog. Always four buckets before empty filtering;
/// exclusions do not apply.
///
pub fn build(ctx: &ViewContext, config: &ModeConfig) -> Vec<ViewOption> {
    let options = PRIORITIES
        .iter()
        .map(|&(priority, label, color)| {
            ViewOption::new(ModeName::Priority, &priority.to_string(), label)
                .with_icon("flag")
                .with_color(color)
                .with_description(&format!("Priority {}", label.trim_start_matches('P')))
                .with_count(ctx.count(|task| task.priority == priority))
        })
        .collect();

    ctx.finish(options, config, None)
}

/// Raw priority addressed by a priority option id.
///
pub fn parse_id(id: &str) -> Option<u8> {
    id.parse::<u8>()
        .ok()
        .filter(|priority| (1..=4).contains(priority))
}
