//! Read-only views over raw activity and link records.
//!
//! The views never copy or reshape the underlying JSON. Every accessor
//! tolerates the field-name drift seen across flow builder versions.

use serde_json::Value;

use super::{first_text, lookup};

const DISCRIMINATOR_KEYS: [&str; 2] = ["activityName", "type"];
const SOURCE_KEYS: [&str; 4] = ["sourceActivityId", "source", "sourceId", "from"];
const TARGET_KEYS: [&str; 4] = ["targetActivityId", "target", "targetId", "to"];
const LABEL_KEYS: [&str; 3] = ["conditionExpr", "label", "condition"];

/// One activity (node) entry of a flow export.
#[derive(Debug, Clone, Copy)]
pub struct ActivityRecord<'a> {
    raw: &'a Value,
}

impl<'a> ActivityRecord<'a> {
    pub fn new(raw: &'a Value) -> Self {
        ActivityRecord { raw }
    }

    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    /// String or numeric `id`; empty strings count as missing.
    pub fn id(&self) -> Option<String> {
        first_text(self.raw, &["id"])
    }

    pub fn name(&self) -> Option<&'a str> {
        self.raw
            .get("name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// `activityName`, falling back to `type`.
    pub fn type_name(&self) -> Option<&'a str> {
        DISCRIMINATOR_KEYS
            .iter()
            .filter_map(|key| self.raw.get(key).and_then(Value::as_str))
            .find(|s| !s.is_empty())
    }

    pub fn property(&self, key: &str) -> Option<&'a Value> {
        lookup(self.raw, &["properties", key]).filter(|v| !v.is_null())
    }
}

/// One link (edge) entry. Links nested inside an activity carry that
/// activity's id as their implicit source.
#[derive(Debug, Clone)]
pub struct LinkRecord<'a> {
    raw: &'a Value,
    owner: Option<String>,
}

impl<'a> LinkRecord<'a> {
    pub fn new(raw: &'a Value) -> Self {
        LinkRecord { raw, owner: None }
    }

    pub fn owned_by(raw: &'a Value, owner: Option<String>) -> Self {
        LinkRecord { raw, owner }
    }

    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    pub fn source(&self) -> Option<String> {
        first_text(self.raw, &SOURCE_KEYS).or_else(|| self.owner.clone())
    }

    /// A bare string entry (`"transitions": ["a2"]`) is its own target.
    pub fn target(&self) -> Option<String> {
        match self.raw {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => first_text(self.raw, &TARGET_KEYS),
        }
    }

    /// Condition expression, then `properties.value`, before normalization.
    pub fn raw_label(&self) -> Option<String> {
        first_text(self.raw, &LABEL_KEYS).or_else(|| {
            lookup(self.raw, &["properties", "value"]).and_then(super::scalar_text)
        })
    }

    /// Explicit `"type": "error"` marker.
    pub fn is_marked_error(&self) -> bool {
        self.raw
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| t.eq_ignore_ascii_case("error"))
    }
}
