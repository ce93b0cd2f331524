//! NodeBuilder: one activity record → one canonical node.

use std::collections::HashMap;

use crate::classify::Classification;
use crate::graph::{GraphNode, Position};
use crate::parse::ActivityRecord;

use super::Skip;

pub const UNKNOWN_TITLE: &str = "Unknown";

/// Materialize one activity. The whole raw record is kept as `raw_source`.
pub fn build_node(
    act: &ActivityRecord<'_>,
    classification: Classification,
    layout: &HashMap<String, Position>,
) -> Result<GraphNode, Skip> {
    let id = act.id().ok_or(Skip::MissingId)?;
    let position = layout.get(&id).copied().unwrap_or_default();

    Ok(GraphNode {
        title: act.name().unwrap_or(UNKNOWN_TITLE).to_string(),
        node_type: classification.node_type,
        category: classification.category,
        subtitle: classification.subtitle,
        detail_rows: classification.detail_rows,
        position,
        raw_source: act.raw().clone(),
        id,
    })
}
