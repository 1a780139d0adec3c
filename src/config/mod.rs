//! Configuration management module.
//!
//! The queue configuration document decides, per mode, how catalogs are
//! sorted and filtered, and lists the entries of the prioritized mode. It is
//! validated once at the boundary and used in its strict form everywhere
//! else. The local settings file carries what the engine needs from its
//! surroundings: where the document lives, excluded labels and project
//! metadata.

mod error;
mod loader;
mod settings;
mod validate;

pub use error::ConfigError;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_DOCUMENT_PATH};
pub use settings::Settings;
pub use validate::validate;

pub use crate::model::ModeName;

use log::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Direction applied on top of a sort comparator.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Settings for a single mode.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeConfig {
    /// Whether several options may be active at once. Display concern only.
    #[serde(default)]
    pub multi_select: bool,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
    #[serde(default)]
    pub hide_empty: bool,
    /// Item names or ids left out of the mode's catalog.
    #[serde(default)]
    pub excluded_items: Vec<String>,
}

static EMPTY_MODE_CONFIG: ModeConfig = ModeConfig {
    multi_select: false,
    sort_by: None,
    sort_direction: None,
    hide_empty: false,
    excluded_items: Vec::new(),
};

impl ModeConfig {
    fn new(multi_select: bool, hide_empty: bool) -> ModeConfig {
        ModeConfig {
            multi_select,
            sort_by: None,
            sort_direction: None,
            hide_empty,
            excluded_items: vec![],
        }
    }

    pub fn with_sort(mut self, sort_by: &str, direction: Option<SortDirection>) -> ModeConfig {
        self.sort_by = Some(sort_by.to_owned());
        self.sort_direction = direction;
        self
    }

    pub fn with_hide_empty(mut self, hide_empty: bool) -> ModeConfig {
        self.hide_empty = hide_empty;
        self
    }

    pub fn with_excluded(mut self, items: &[&str]) -> ModeConfig {
        self.excluded_items = items.iter().map(|item| (*item).to_owned()).collect();
        self
    }

    /// Whether an item is excluded, matching either its id or its name.
    ///
    pub fn excludes(&self, id: &str, name: &str) -> bool {
        self.excluded_items
            .iter()
            .any(|item| item == id || item == name)
    }
}

/// Kinds of reference a prioritized item can make.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrioritizedKind {
    Project,
    Priority,
    Preset,
    /// Every project whose metadata carries the priority tag in `value`.
    PriorityProjects,
}

impl PrioritizedKind {
    pub const KINDS: [&'static str; 4] = ["project", "priority", "preset", "priority-projects"];
}

/// One entry of the prioritized mode's ordered list.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizedItem {
    #[serde(rename = "type")]
    pub kind: PrioritizedKind,
    #[serde(deserialize_with = "string_or_integer")]
    pub value: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl PrioritizedItem {
    pub fn new(kind: PrioritizedKind, value: &str) -> PrioritizedItem {
        PrioritizedItem {
            kind,
            value: value.to_owned(),
            name: None,
            icon: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> PrioritizedItem {
        self.name = Some(name.to_owned());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> PrioritizedItem {
        self.icon = Some(icon.to_owned());
        self
    }
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Text(String),
        Integer(i64),
    }

    Ok(match Value::deserialize(deserializer)? {
        Value::Text(text) => text,
        Value::Integer(number) => number.to_string(),
    })
}

/// Strict form of the queue configuration document.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueueConfiguration {
    pub standard_modes: BTreeMap<ModeName, ModeConfig>,
    pub prioritized_items: Vec<PrioritizedItem>,
}

impl Default for QueueConfiguration {
    /// The compiled-in configuration used whenever no valid document is
    /// available.
    fn default() -> Self {
        let mut standard_modes = BTreeMap::new();
        standard_modes.insert(ModeName::Project, ModeConfig::new(false, false));
        standard_modes.insert(ModeName::Priority, ModeConfig::new(false, true));
        standard_modes.insert(
            ModeName::Label,
            ModeConfig::new(true, true).with_sort("count", Some(SortDirection::Desc)),
        );
        standard_modes.insert(ModeName::Date, ModeConfig::new(false, true));
        standard_modes.insert(ModeName::Deadline, ModeConfig::new(false, true));
        standard_modes.insert(ModeName::Preset, ModeConfig::new(false, false));
        standard_modes.insert(ModeName::All, ModeConfig::new(false, false));
        standard_modes.insert(ModeName::Filter, ModeConfig::new(false, false));
        standard_modes.insert(ModeName::Assignee, ModeConfig::new(false, false));
        standard_modes.insert(ModeName::Prioritized, ModeConfig::new(false, false));
        QueueConfiguration {
            standard_modes,
            prioritized_items: vec![],
        }
    }
}

impl QueueConfiguration {
    /// Settings for a mode.
    ///
    pub fn mode(&self, mode: ModeName) -> &ModeConfig {
        self.standard_modes.get(&mode).unwrap_or(&EMPTY_MODE_CONFIG)
    }

    pub fn with_mode(mut self, mode: ModeName, config: ModeConfig) -> QueueConfiguration {
        self.standard_modes.insert(mode, config);
        self
    }

    pub fn with_prioritized_items(mut self, items: Vec<PrioritizedItem>) -> QueueConfiguration {
        self.prioritized_items = items;
        self
    }

    /// Validate a loosely-typed document and convert it to the strict form.
    ///
    /// Modes the document does not mention keep their compiled-in settings.
    /// Any shape violation rejects the whole document.
    pub fn from_document(document: &serde_json::Value) -> Result<QueueConfiguration, ConfigError> {
        for warning in validate(document)? {
            warn!("{}", warning);
        }

        let mut config = QueueConfiguration::default();
        if let Some(modes) = document
            .get(validate::STANDARD_MODES)
            .and_then(|modes| modes.as_object())
        {
            for (key, value) in modes {
                let mode = match ModeName::parse(key) {
                    Some(mode) => mode,
                    None => continue,
                };
                let mode_config: ModeConfig = serde_json::from_value(without_nulls(value))?;
                config.standard_modes.insert(mode, mode_config);
            }
        }

        if let Some(items) = document
            .get(validate::PRIORITIZED_ITEMS)
            .filter(|items| !items.is_null())
        {
            config.prioritized_items = serde_json::from_value(items.clone())?;
        }

        debug!(
            "Accepted configuration document with {} prioritized items",
            config.prioritized_items.len()
        );
        Ok(config)
    }
}

/// Null fields are treated as absent, matching validation.
fn without_nulls(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(fields) => serde_json::Value::Object(
            fields
                .iter()
                .filter(|(_, field)| !field.is_null())
                .map(|(key, field)| (key.clone(), field.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_covers_every_mode() {
        let config = QueueConfiguration::default();
        for mode in ModeName::MODES {
            assert!(config.standard_modes.contains_key(&mode), "missing {}", mode);
        }
        assert!(config.prioritized_items.is_empty());
        assert_eq!(config.mode(ModeName::Label).sort_by.as_deref(), Some("count"));
    }

    #[test]
    fn test_mode_config_excludes_by_id_or_name() {
        let config = ModeConfig::default().with_excluded(&["Someday", "42"]);
        assert!(config.excludes("1", "Someday"));
        assert!(config.excludes("42", "Errands"));
        assert!(!config.excludes("7", "Errands"));
    }

    #[test]
    fn test_from_document_overrides_named_modes_only() {
        let document = json!({
            "standardModes": {
                "project": { "hideEmpty": true, "sortBy": "name", "sortDirection": "desc",
                             "excludedItems": ["Archive"] },
                "someFutureMode": { "hideEmpty": true }
            },
            "prioritizedItems": [
                { "type": "priority-projects", "value": 3 },
                { "type": "preset", "value": "no_due_date", "name": "Unscheduled", "icon": "inbox" }
            ]
        });

        let config = QueueConfiguration::from_document(&document).unwrap();
        let project = config.mode(ModeName::Project);
        assert!(project.hide_empty);
        assert_eq!(project.sort_by.as_deref(), Some("name"));
        assert_eq!(project.sort_direction, Some(SortDirection::Desc));
        assert_eq!(project.excluded_items, vec!["Archive".to_string()]);
        assert_eq!(
            config.mode(ModeName::Label),
            QueueConfiguration::default().mode(ModeName::Label)
        );
        assert_eq!(
            config.prioritized_items,
            vec![
                PrioritizedItem::new(PrioritizedKind::PriorityProjects, "3"),
                PrioritizedItem::new(PrioritizedKind::Preset, "no_due_date")
                    .with_name("Unscheduled")
                    .with_icon("inbox"),
            ]
        );
    }

    #[test]
    fn test_from_document_null_fields_keep_defaults() {
        let document = json!({
            "standardModes": { "date": { "hideEmpty": null, "excludedItems": null } },
            "prioritizedItems": null
        });
        let config = QueueConfiguration::from_document(&document).unwrap();
        assert_eq!(config.mode(ModeName::Date), &ModeConfig::default());
        assert!(config.prioritized_items.is_empty());
    }

    #[test]
    fn test_from_document_rejects_invalid_shape() {
        let document = json!({ "standardModes": { "date": { "sortDirection": "sideways" } } });
        assert!(matches!(
            QueueConfiguration::from_document(&document),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
