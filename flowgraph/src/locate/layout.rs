//! Layout hints from the `diagram.widgets` sub-tree.

use std::collections::HashMap;

use serde_json::Value;

use crate::graph::Position;
use crate::parse::{first_text, lookup};

/// Coordinates keyed by activity id. A missing sub-tree yields an empty map.
///
/// Widgets are normally an object keyed by activity id; an array of widgets
/// carrying their own `id` is accepted too.
pub fn locate_layout(doc: &Value) -> HashMap<String, Position> {
    let Some(widgets) = lookup(doc, &["diagram", "widgets"]) else {
        return HashMap::new();
    };

    match widgets {
        Value::Object(map) => map
            .iter()
            .filter_map(|(id, widget)| widget_point(widget).map(|p| (id.clone(), p)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|widget| {
                let id = first_text(widget, &["id"])?;
                widget_point(widget).map(|p| (id, p))
            })
            .collect(),
        _ => HashMap::new(),
    }
}

fn widget_point(widget: &Value) -> Option<Position> {
    let point = widget.get("point")?;
    let coord = |axis: &str| point.get(axis).and_then(Value::as_f64).unwrap_or(0.0);
    Some(Position::new(coord("x"), coord("y")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_points_keyed_by_id() {
        let doc = json!({"diagram": {"widgets": {
            "a1": {"point": {"x": 10, "y": 20.5}},
            "a2": {"point": {"x": 3}},
            "a3": {"label": "no point"}
        }}});
        let layout = locate_layout(&doc);
        assert_eq!(layout.get("a1"), Some(&Position::new(10.0, 20.5)));
        assert_eq!(layout.get("a2"), Some(&Position::new(3.0, 0.0)));
        assert!(!layout.contains_key("a3"));
    }

    #[test]
    fn missing_diagram_is_empty() {
        assert!(locate_layout(&json!({"process": {}})).is_empty());
    }
}
