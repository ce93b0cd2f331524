//! Per-type detail-row extractors. A row appears only when its source field exists.

use serde_json::Value;

use crate::graph::DetailRow;
use crate::options::ExtractOptions;
use crate::parse::{ActivityRecord, lookup, scalar_text};

pub const TRUNCATION_MARKER: &str = "...";
const MESSAGE_FALLBACK: &str = "Var";

pub fn none(_act: &ActivityRecord<'_>, _opts: &ExtractOptions) -> Vec<DetailRow> {
    Vec::new()
}

/// `Event=<properties.event>`
pub fn event(act: &ActivityRecord<'_>, _opts: &ExtractOptions) -> Vec<DetailRow> {
    act.property("event")
        .and_then(scalar_text)
        .map(|event| DetailRow::new("Event", event))
        .into_iter()
        .collect()
}

/// `Set=<first key of properties.updates>`. Later keys are not shown.
pub fn first_update(act: &ActivityRecord<'_>, _opts: &ExtractOptions) -> Vec<DetailRow> {
    act.property("updates")
        .and_then(Value::as_object)
        .and_then(|updates| updates.keys().next())
        .map(|key| DetailRow::new("Set", key.as_str()))
        .into_iter()
        .collect()
}

/// Case count, menu-link count and the raw expression, each when present.
pub fn branching(act: &ActivityRecord<'_>, _opts: &ExtractOptions) -> Vec<DetailRow> {
    let mut rows = Vec::new();
    if let Some(count) = act.property("cases").and_then(entry_count) {
        rows.push(DetailRow::new("Cases", count.to_string()));
    }
    if let Some(count) = act.property("menuLinks").and_then(entry_count) {
        rows.push(DetailRow::new("Options", count.to_string()));
    }
    if let Some(expression) = act.property("expression").and_then(scalar_text) {
        rows.push(DetailRow::new("Expr", expression));
    }
    rows
}

/// `Msg=<properties.prompts[0].value>`, truncated for the card.
pub fn message(act: &ActivityRecord<'_>, opts: &ExtractOptions) -> Vec<DetailRow> {
    let text = act
        .property("prompts")
        .and_then(|prompts| lookup_index(prompts, 0))
        .and_then(|prompt| lookup(prompt, &["value"]))
        .and_then(scalar_text)
        .unwrap_or_else(|| MESSAGE_FALLBACK.to_string());
    vec![DetailRow::new("Msg", truncate(&text, opts.message_preview_chars))]
}

fn entry_count(value: &Value) -> Option<usize> {
    match value {
        Value::Object(map) => Some(map.len()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn lookup_index(value: &Value, index: usize) -> Option<&Value> {
    value.as_array().and_then(|items| items.get(index))
}

/// Keep at most `max_chars` characters, appending the marker when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Welcome", 16), "Welcome");
        assert_eq!(truncate("exactly sixteen!", 16), "exactly sixteen!");
    }

    #[test]
    fn truncate_cuts_on_char_boundaries() {
        assert_eq!(truncate("Grüße aus München, bitte warten", 8), "Grüße au...");
    }
}
