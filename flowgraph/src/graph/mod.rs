//! Canonical output: the graph document and a petgraph view over it.

pub mod types;
pub mod view;

pub use types::*;
pub use view::FlowGraph;
