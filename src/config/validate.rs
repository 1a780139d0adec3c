//! Shape validation for the queue configuration document.
//!
//! Validation is all-or-nothing: the first violation rejects the document.
//! Unknown mode names are the only tolerated irregularity and come back as
//! warnings.

use super::{ConfigError, ModeName, PrioritizedKind};
use serde_json::{Map, Value};

pub(crate) const STANDARD_MODES: &str = "standardModes";
pub(crate) const PRIORITIZED_ITEMS: &str = "prioritizedItems";

const BOOLEAN_FIELDS: [&str; 2] = ["multiSelect", "hideEmpty"];
const SORT_DIRECTIONS: [&str; 2] = ["asc", "desc"];

/// Check the shape of a configuration document.
///
/// Returns the list of non-fatal warnings on success.
pub fn validate(document: &Value) -> Result<Vec<String>, ConfigError> {
    let root = document
        .as_object()
        .ok_or_else(|| ConfigError::invalid("$", "document must be an object"))?;

    let modes = root
        .get(STANDARD_MODES)
        .and_then(Value::as_object)
        .ok_or_else(|| ConfigError::invalid(STANDARD_MODES, "must be an object"))?;

    let mut warnings = vec![];
    for (name, mode_config) in modes {
        let path = format!("{}.{}", STANDARD_MODES, name);
        if ModeName::parse(name).is_none() {
            warnings.push(format!("Ignoring unknown mode '{}' in configuration", name));
        }
        validate_mode(&path, mode_config)?;
    }

    if let Some(items) = present(root, PRIORITIZED_ITEMS) {
        let items = items
            .as_array()
            .ok_or_else(|| ConfigError::invalid(PRIORITIZED_ITEMS, "must be an array"))?;
        for (index, item) in items.iter().enumerate() {
            validate_item(&format!("{}[{}]", PRIORITIZED_ITEMS, index), item)?;
        }
    }

    Ok(warnings)
}

fn validate_mode(path: &str, mode_config: &Value) -> Result<(), ConfigError> {
    let fields = mode_config
        .as_object()
        .ok_or_else(|| ConfigError::invalid(path, "mode settings must be an object"))?;

    for field in BOOLEAN_FIELDS {
        if let Some(value) = present(fields, field) {
            if !value.is_boolean() {
                return Err(ConfigError::invalid(
                    &format!("{}.{}", path, field),
                    "must be a boolean",
                ));
            }
        }
    }

    if let Some(value) = present(fields, "sortBy") {
        if !value.is_string() {
            return Err(ConfigError::invalid(
                &format!("{}.sortBy", path),
                "must be a string",
            ));
        }
    }

    if let Some(value) = present(fields, "sortDirection") {
        let valid = value
            .as_str()
            .map_or(false, |direction| SORT_DIRECTIONS.contains(&direction));
        if !valid {
            return Err(ConfigError::invalid(
                &format!("{}.sortDirection", path),
                "must be \"asc\" or \"desc\"",
            ));
        }
    }

    if let Some(value) = present(fields, "excludedItems") {
        let valid = value
            .as_array()
            .map_or(false, |items| items.iter().all(Value::is_string));
        if !valid {
            return Err(ConfigError::invalid(
                &format!("{}.excludedItems", path),
                "must be an array of strings",
            ));
        }
    }

    Ok(())
}

fn validate_item(path: &str, item: &Value) -> Result<(), ConfigError> {
    let fields = item
        .as_object()
        .ok_or_else(|| ConfigError::invalid(path, "item must be an object"))?;

    let kind_valid = fields
        .get("type")
        .and_then(Value::as_str)
        .map_or(false, |kind| PrioritizedKind::KINDS.contains(&kind));
    if !kind_valid {
        return Err(ConfigError::invalid(
            &format!("{}.type", path),
            "must be one of project, priority, preset, priority-projects",
        ));
    }

    let value_valid = match fields.get("value") {
        Some(Value::String(_)) => true,
        Some(Value::Number(number)) => number.is_i64(),
        _ => false,
    };
    if !value_valid {
        return Err(ConfigError::invalid(
            &format!("{}.value", path),
            "must be a string or an integer",
        ));
    }

    for field in ["name", "icon"] {
        if let Some(value) = present(fields, field) {
            if !value.is_string() {
                return Err(ConfigError::invalid(
                    &format!("{}.{}", path, field),
                    "must be a string",
                ));
            }
        }
    }

    Ok(())
}

/// A field that is present and not null.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}
