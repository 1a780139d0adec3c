//! Named comparators for ordering catalogs.

use crate::config::SortDirection;
use crate::model::ViewOption;
use log::*;
use std::{cmp::Ordering, collections::HashMap};

/// Sort key that leaves a catalog in its natural order.
pub const DEFAULT_SORT: &str = "default";

/// Pure ordering of two options.
pub type Comparator = fn(&ViewOption, &ViewOption) -> Ordering;

struct Entry {
    comparator: Comparator,
    direction: SortDirection,
}

/// Registry of comparators addressable by name.
///
/// Each comparator is registered with the direction used when a mode names
/// the key without a direction.
pub struct SortRegistry {
    entries: HashMap<String, Entry>,
}

impl Default for SortRegistry {
    fn default() -> Self {
        SortRegistry::with_defaults()
    }
}

impl SortRegistry {
    /// Returns an empty registry.
    ///
    pub fn new() -> SortRegistry {
        SortRegistry {
            entries: HashMap::new(),
        }
    }

    /// Returns a registry with the built-in `count` and `name` comparators.
    ///
    pub fn with_defaults() -> SortRegistry {
        let mut registry = SortRegistry::new();
        registry.register("count", by_count, SortDirection::Desc);
        registry.register("name", by_name, SortDirection::Asc);
        registry
    }

    pub fn register(&mut self, key: &str, comparator: Comparator, direction: SortDirection) {
        self.entries.insert(
            key.to_owned(),
            Entry {
                comparator,
                direction,
            },
        );
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Return a stably sorted copy of `options`.
    ///
    /// An absent key, `"default"` or an unregistered key leave the order
    /// unchanged.
    pub fn sort(
        &self,
        options: &[ViewOption],
        key: Option<&str>,
        direction: Option<SortDirection>,
    ) -> Vec<ViewOption> {
        let mut sorted = options.to_vec();
        let key = match key {
            Some(key) if key != DEFAULT_SORT => key,
            _ => return sorted,
        };
        let entry = match self.entries.get(key) {
            Some(entry) => entry,
            None => {
                warn!("Unknown sort key '{}', keeping natural order", key);
                return sorted;
            }
        };

        let comparator = entry.comparator;
        match direction.unwrap_or(entry.direction) {
            SortDirection::Asc => sorted.sort_by(|a, b| comparator(a, b)),
            SortDirection::Desc => sorted.sort_by(|a, b| comparator(b, a)),
        }
        sorted
    }
}

/// Ascending task count.
pub fn by_count(a: &ViewOption, b: &ViewOption) -> Ordering {
    a.count.cmp(&b.count)
}

/// Ascending label, ignoring case.
pub fn by_name(a: &ViewOption, b: &ViewOption) -> Ordering {
    a.label.to_lowercase().cmp(&b.label.to_lowercase())
}
