//! Extraction pipeline: Parse → Locate → Classify/Build → GraphDocument.
//!
//! Stateless and re-entrant. Every call owns its output; nothing survives
//! between calls.

use std::collections::HashSet;

use serde_json::Value;

use crate::build::{Skip, build_edge, build_node};
use crate::classify::classify;
use crate::error::ExtractError;
use crate::graph::{GraphDocument, GraphEdge, GraphNode};
use crate::locate::{Located, locate};
use crate::options::ExtractOptions;
use crate::parse;

/// Extract with default options.
pub fn extract(doc: &Value) -> Result<GraphDocument, ExtractError> {
    extract_with(doc, &ExtractOptions::default())
}

/// Parse flow export text, then extract.
pub fn extract_str(json: &str, opts: &ExtractOptions) -> Result<GraphDocument, ExtractError> {
    let doc = parse::parse(json).inspect_err(|e| log::warn!("{}", e))?;
    extract_with(&doc, opts)
}

pub fn extract_with(doc: &Value, opts: &ExtractOptions) -> Result<GraphDocument, ExtractError> {
    // 1. Locate collections
    let located = locate(doc).inspect_err(|e| log::warn!("{}", e))?;

    // 2. Nodes, in source order
    let nodes = build_nodes(&located, opts);
    if nodes.is_empty() {
        let err = ExtractError::EmptyGraph;
        log::warn!(
            "{} ({} activities located via '{}')",
            err,
            located.activities.len(),
            located.activity_strategy
        );
        return Err(err);
    }

    // 3. Edges, in source order
    let edges = build_edges(&located);

    Ok(GraphDocument {
        name: flow_name(doc, opts),
        nodes,
        edges,
    })
}

fn build_nodes(located: &Located<'_>, opts: &ExtractOptions) -> Vec<GraphNode> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(located.activities.len());

    for (index, act) in located.activities.iter().enumerate() {
        let built = build_node(act, classify(act, opts), &located.layout).and_then(|node| {
            if seen.insert(node.id.clone()) {
                Ok(node)
            } else {
                Err(Skip::DuplicateId)
            }
        });
        match built {
            Ok(node) => nodes.push(node),
            Err(skip) => log::debug!(
                "skipping activity #{} from '{}': {}",
                index,
                located.activity_strategy,
                skip
            ),
        }
    }

    nodes
}

fn build_edges(located: &Located<'_>) -> Vec<GraphEdge> {
    let strategy = located.link_strategy.unwrap_or("-");
    located
        .links
        .iter()
        .enumerate()
        .filter_map(|(index, link)| match build_edge(link) {
            Ok(edge) => Some(edge),
            Err(skip) => {
                log::debug!("skipping link #{} from '{}': {}", index, strategy, skip);
                None
            }
        })
        .collect()
}

fn flow_name(doc: &Value, opts: &ExtractOptions) -> String {
    doc.get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .map_or_else(|| opts.default_name.clone(), str::to_string)
}
