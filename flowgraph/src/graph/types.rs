//! Canonical graph model handed to the renderer and details panel.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// CATEGORY
// =============================================================================

/// Closed visual/semantic classification of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeCategory {
    Start,
    End,
    Decision,
    SetVariable,
    PlayOrQueueAction,
    Generic,
}

struct Presentation {
    tag: &'static str,
    icon: &'static str,
    color: &'static str,
    subtitle: &'static str,
}

const fn presentation(category: NodeCategory) -> Presentation {
    match category {
        NodeCategory::Start => Presentation {
            tag: "start",
            icon: "bi-telephone-inbound",
            color: "#198754",
            subtitle: "Start Flow",
        },
        NodeCategory::End => Presentation {
            tag: "end",
            icon: "bi-telephone-x",
            color: "#dc3545",
            subtitle: "End Flow",
        },
        NodeCategory::Decision => Presentation {
            tag: "decision",
            icon: "bi-signpost-split",
            color: "#ffc107",
            subtitle: "Decision",
        },
        NodeCategory::SetVariable => Presentation {
            tag: "setVariable",
            icon: "bi-calculator",
            color: "#6c757d",
            subtitle: "Calculation",
        },
        NodeCategory::PlayOrQueueAction => Presentation {
            tag: "playOrQueueAction",
            icon: "bi-megaphone",
            color: "#20c997",
            subtitle: "Action",
        },
        NodeCategory::Generic => Presentation {
            tag: "generic",
            icon: "bi-gear",
            color: "#0d6efd",
            subtitle: "Action",
        },
    }
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 6] = [
        NodeCategory::Start,
        NodeCategory::End,
        NodeCategory::Decision,
        NodeCategory::SetVariable,
        NodeCategory::PlayOrQueueAction,
        NodeCategory::Generic,
    ];

    /// Stable tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        presentation(self).tag
    }

    pub fn icon(self) -> &'static str {
        presentation(self).icon
    }

    pub fn color(self) -> &'static str {
        presentation(self).color
    }

    /// Subtitle a category shows unless its classification rule overrides it.
    pub fn default_subtitle(self) -> &'static str {
        presentation(self).subtitle
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// NODES & EDGES
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub key: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        DetailRow {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for DetailRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    /// Discriminator the node was classified under, after defaulting.
    pub node_type: String,
    pub category: NodeCategory,
    pub subtitle: String,
    pub detail_rows: Vec<DetailRow>,
    pub position: Position,
    /// The whole original activity record, untouched.
    pub raw_source: Value,
}

impl GraphNode {
    /// Short card label: prompts, menus and assignments get a verb prefix.
    pub fn caption(&self) -> String {
        match self.node_type.as_str() {
            "play-message" => format!("Play: {}", self.title),
            "ivr-menu" => format!("Menu: {}", self.title),
            "set-variable" => format!("Set: {}", self.title),
            _ => self.title.clone(),
        }
    }

    /// Pretty-printed original record for the details panel.
    pub fn raw_source_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw_source).unwrap_or_else(|_| self.raw_source.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub label: String,
    pub is_error_path: bool,
}

// =============================================================================
// DOCUMENT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub name: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: NodeCategory,
    pub count: usize,
}

/// Headline numbers for a flow-info banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub error_path_count: usize,
    pub dangling_edge_count: usize,
    /// Non-zero counts only, in category declaration order.
    pub categories: Vec<CategoryCount>,
}

impl GraphDocument {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges whose source or target names no node in this document.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(move |e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
    }

    pub fn summary(&self) -> FlowSummary {
        let categories = NodeCategory::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: self.nodes.iter().filter(|n| n.category == category).count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        FlowSummary {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            error_path_count: self.edges.iter().filter(|e| e.is_error_path).count(),
            dangling_edge_count: self.dangling_edges().count(),
            categories,
        }
    }
}
