//! Record builders: raw activity/link records → canonical nodes and edges.
//!
//! A builder either produces its output or reports why the record was
//! skipped. Skips are expected for partial exports and never fail extraction.

pub mod edge;
pub mod node;

pub use edge::build_edge;
pub use node::build_node;

/// Why a raw record contributed nothing to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    MissingId,
    DuplicateId,
    MissingSource,
    MissingTarget,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::MissingId => write!(f, "activity has no id"),
            Skip::DuplicateId => write!(f, "activity id already used"),
            Skip::MissingSource => write!(f, "link has no source id"),
            Skip::MissingTarget => write!(f, "link has no target id"),
        }
    }
}
