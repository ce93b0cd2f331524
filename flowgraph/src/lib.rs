pub mod build;
pub mod classify;
pub mod error;
pub mod extract;
pub mod graph;
pub mod locate;
pub mod options;
pub mod parse;
pub mod render;
pub mod wasm;

pub use error::{ExtractError, Phase};
pub use extract::{extract, extract_str, extract_with};
pub use graph::{DetailRow, FlowGraph, GraphDocument, GraphEdge, GraphNode, NodeCategory, Position};
pub use options::ExtractOptions;
