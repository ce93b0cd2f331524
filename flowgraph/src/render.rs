//! Renderer handoff: layout-mode decision and cytoscape-style element list.
//!
//! No layout is computed here. The renderer receives raw positions plus a
//! hint on whether they are usable.

use serde::{Deserialize, Serialize};

use crate::graph::{GraphDocument, GraphEdge, GraphNode, Position};

pub const HIERARCHICAL_RANK_DIR: &str = "LR";
pub const HIERARCHICAL_NODE_SEP: u32 = 50;
pub const HIERARCHICAL_RANK_SEP: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all_fields = "camelCase")]
pub enum LayoutMode {
    /// Use node positions as given.
    #[serde(rename = "preset")]
    Preset,
    /// Positions are unusable; lay out automatically.
    #[serde(rename = "dagre")]
    Hierarchical {
        rank_dir: String,
        node_sep: u32,
        rank_sep: u32,
    },
}

impl LayoutMode {
    pub fn hierarchical() -> Self {
        LayoutMode::Hierarchical {
            rank_dir: HIERARCHICAL_RANK_DIR.into(),
            node_sep: HIERARCHICAL_NODE_SEP,
            rank_sep: HIERARCHICAL_RANK_SEP,
        }
    }
}

/// Preset when any node carries a non-zero position.
pub fn layout_mode(doc: &GraphDocument) -> LayoutMode {
    if doc.nodes.iter().any(|n| !n.position.is_origin()) {
        LayoutMode::Preset
    } else {
        LayoutMode::hierarchical()
    }
}

// =============================================================================
// ELEMENTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "group", rename_all = "camelCase")]
pub enum Element {
    Nodes { data: NodeData, position: Position },
    Edges { data: EdgeData },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeData {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub category: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub subtitle: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub is_error_path: bool,
}

/// Flat element list, all nodes first, then all edges.
pub fn to_elements(doc: &GraphDocument) -> Vec<Element> {
    let nodes = doc.nodes.iter().map(node_element);
    let edges = doc
        .edges
        .iter()
        .enumerate()
        .map(|(index, edge)| edge_element(index, edge));
    nodes.chain(edges).collect()
}

fn node_element(node: &GraphNode) -> Element {
    Element::Nodes {
        data: NodeData {
            id: node.id.clone(),
            label: node.caption(),
            node_type: node.node_type.clone(),
            category: node.category.as_str(),
            icon: node.category.icon(),
            color: node.category.color(),
            subtitle: node.subtitle.clone(),
            details: node.detail_rows.iter().map(ToString::to_string).collect(),
        },
        position: node.position,
    }
}

fn edge_element(index: usize, edge: &GraphEdge) -> Element {
    Element::Edges {
        data: EdgeData {
            id: format!("edge-{}", index),
            source: edge.source.clone(),
            target: edge.target.clone(),
            label: edge.label.clone(),
            is_error_path: edge.is_error_path,
        },
    }
}
