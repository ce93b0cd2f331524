//! petgraph-based directed view over an extracted flow.
//!
//! Dangling edges are listed, never fatal: the extractor passes them through
//! and the renderer decides what to do with them.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{GraphDocument, GraphEdge};

pub struct FlowGraph<'a> {
    pub graph: DiGraph<&'a str, &'a GraphEdge>,
    pub node_indices: HashMap<&'a str, NodeIndex>,
    dangling: Vec<&'a GraphEdge>,
}

impl<'a> FlowGraph<'a> {
    pub fn build(doc: &'a GraphDocument) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut dangling = Vec::new();

        for node in &doc.nodes {
            let idx = graph.add_node(node.id.as_str());
            node_indices.insert(node.id.as_str(), idx);
        }

        for edge in &doc.edges {
            let source_idx = node_indices.get(edge.source.as_str());
            let target_idx = node_indices.get(edge.target.as_str());

            match (source_idx, target_idx) {
                (Some(&s), Some(&t)) => {
                    graph.add_edge(s, t, edge);
                }
                _ => {
                    log::debug!(
                        "edge '{}' -> '{}' references a node outside the flow",
                        edge.source,
                        edge.target
                    );
                    dangling.push(edge);
                }
            }
        }

        FlowGraph {
            graph,
            node_indices,
            dangling,
        }
    }

    /// Targets of a node's outgoing edges together with the edge, in insertion order.
    pub fn successors(&self, node_id: &str) -> Vec<(&'a str, &'a GraphEdge)> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), self.graph[e.target()], *e.weight()))
            .collect();
        // petgraph walks adjacency lists newest-first
        out.sort_by_key(|(edge_idx, _, _)| *edge_idx);
        out.into_iter().map(|(_, id, edge)| (id, edge)).collect()
    }

    pub fn predecessors(&self, node_id: &str) -> Vec<&'a str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n])
            .collect()
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.node_indices
            .get(node_id)
            .map_or(0, |&idx| self.graph.edges_directed(idx, Direction::Incoming).count())
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.node_indices
            .get(node_id)
            .map_or(0, |&idx| self.graph.edges_directed(idx, Direction::Outgoing).count())
    }

    /// Nodes without incoming edges, in document order.
    pub fn entry_nodes(&self) -> Vec<&'a str> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| self.graph[idx])
            .collect()
    }

    pub fn dangling_edges(&self) -> &[&'a GraphEdge] {
        &self.dangling
    }
}
