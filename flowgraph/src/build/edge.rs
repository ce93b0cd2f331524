//! EdgeBuilder: one link record → one canonical edge with a display label.

use crate::graph::GraphEdge;
use crate::parse::LinkRecord;

use super::Skip;

pub const ELSE_LABEL: &str = "Else";
const ERROR_MARKERS: [&str; 2] = ["error", "timeout"];

/// Materialize one link. Both endpoints must resolve; dangling references
/// to unknown nodes are passed through untouched.
pub fn build_edge(link: &LinkRecord<'_>) -> Result<GraphEdge, Skip> {
    let source = link.source().ok_or(Skip::MissingSource)?;
    let target = link.target().ok_or(Skip::MissingTarget)?;
    let raw_label = link.raw_label().unwrap_or_default();

    Ok(GraphEdge {
        source,
        target,
        is_error_path: link.is_marked_error() || is_error_label(&raw_label),
        label: normalize_label(&raw_label),
    })
}

/// `"true"` is an unconditional transition and shows no label; `"false"` is the else branch.
pub fn normalize_label(raw: &str) -> String {
    match raw {
        "true" => String::new(),
        "false" => ELSE_LABEL.to_string(),
        other => other.to_string(),
    }
}

/// Case-insensitive check on the label as written in the export.
pub fn is_error_label(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    ERROR_MARKERS.iter().any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_boolean_labels() {
        assert_eq!(normalize_label("true"), "");
        assert_eq!(normalize_label("false"), "Else");
        assert_eq!(normalize_label("True"), "True");
        assert_eq!(normalize_label("Option 1"), "Option 1");
    }

    #[test]
    fn error_markers_ignore_case() {
        assert!(is_error_label("ERROR_TIMEOUT"));
        assert!(is_error_label("TIMEOUT_1"));
        assert!(is_error_label("onError"));
        assert!(!is_error_label("Success"));
        assert!(!is_error_label(""));
    }
}
