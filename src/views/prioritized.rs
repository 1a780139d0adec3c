//! Composition of the prioritized mode.
//!
//! The configuration lists references into the project, priority and preset
//! catalogs. Output follows that list exactly; nothing is re-sorted. A
//! `priority-projects` entry fans out to every project tagged with the given
//! priority, in project catalog order.

use super::filter;
use crate::config::{ModeConfig, PrioritizedItem, PrioritizedKind};
use crate::model::{ProjectMetadataMap, ViewOption};
use log::*;

/// Catalogs the prioritized list can reference.
///
pub struct SourceCatalogs<'a> {
    pub projects: &'a [ViewOption],
    pub priorities: &'a [ViewOption],
    pub presets: &'a [ViewOption],
    pub project_metadata: &'a ProjectMetadataMap,
}

/// Outcome of resolving a single prioritized item.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Found(ViewOption),
    Expanded(Vec<ViewOption>),
    /// The item references something absent from its catalog.
    Missing,
}

impl Resolution {
    pub fn into_options(self) -> Vec<ViewOption> {
        match self {
            Resolution::Found(option) => vec![option],
            Resolution::Expanded(options) => options,
            Resolution::Missing => vec![],
        }
    }
}

/// Resolve one item against the catalogs.
///
pub fn resolve(item: &PrioritizedItem, catalogs: &SourceCatalogs) -> Resolution {
    let catalog = match item.kind {
        PrioritizedKind::Project => catalogs.projects,
        PrioritizedKind::Priority => catalogs.priorities,
        PrioritizedKind::Preset => catalogs.presets,
        PrioritizedKind::PriorityProjects => return expand(item, catalogs),
    };

    match catalog.iter().find(|option| option.id == item.value) {
        Some(option) => {
            let mut option = option.clone();
            if let Some(name) = &item.name {
                option.label = name.clone();
            }
            if let Some(icon) = &item.icon {
                option.icon = Some(icon.clone());
            }
            Resolution::Found(option)
        }
        None => Resolution::Missing,
    }
}

fn expand(item: &PrioritizedItem, catalogs: &SourceCatalogs) -> Resolution {
    let tag = match item.value.trim().parse::<i64>() {
        Ok(tag) => tag,
        Err(_) => return Resolution::Missing,
    };

    let options = catalogs
        .projects
        .iter()
        .filter(|option| {
            catalogs
                .project_metadata
                .get(&option.id)
                .and_then(|metadata| metadata.priority)
                == Some(tag)
        })
        .map(|option| {
            let mut option = option.clone();
            option.metadata.project_priority = Some(tag);
            option.metadata.wildcard_priority = Some(tag);
            option
        })
        .collect();
    Resolution::Expanded(options)
}

/// Compose the prioritized catalog in configuration order.
///
pub fn compose(items: &[PrioritizedItem], catalogs: &SourceCatalogs) -> Vec<ViewOption> {
    items
        .iter()
        .flat_map(|item| {
            let resolution = resolve(item, catalogs);
            if resolution == Resolution::Missing {
                debug!(
                    "Prioritized item {:?} '{}' not found, skipping",
                    item.kind, item.value
                );
            }
            resolution.into_options()
        })
        .collect()
}

/// Build the prioritized catalog. Only the mode's `hide_empty` applies;
/// sorting would destroy the configured order.
///
pub fn build(
    items: &[PrioritizedItem],
    catalogs: &SourceCatalogs,
    config: &ModeConfig,
) -> Vec<ViewOption> {
    filter::filter_empty(compose(items, catalogs), config.hide_empty)
}
