//! Parse phase: JSON text → raw document + typed read-only record views.

pub mod records;

pub use records::{ActivityRecord, LinkRecord};

use serde_json::Value;

use crate::error::ExtractError;

/// Deserialize flow export text into an untyped JSON document.
pub fn parse(json: &str) -> Result<Value, ExtractError> {
    serde_json::from_str::<Value>(json).map_err(|e| ExtractError::malformed(e.to_string()))
}

/// Walk `path` through nested objects.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(key))
}

/// Render a scalar as display text. Empty strings, null, arrays and objects
/// count as absent.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First key whose value renders as non-empty scalar text.
pub fn first_text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find_map(scalar_text)
}

/// Elements of an array, or the values of an object in document order.
pub fn collection_items(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) => Some(map.values().collect()),
        _ => None,
    }
}
