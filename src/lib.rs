//! graph-walk: a small unweighted graph with deterministic traversals.
//!
//! Vertices are text labels; edges are directed or undirected. Vertices and
//! neighbor sets enumerate in ascending label order, so breadth-first and
//! depth-first traversals always produce the same sequence for the same graph.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{AdjacencyMap, Graph, GraphBuilder};
pub use types::{
    normalize_label, EdgeKind, EdgeSpec, GraphError, GraphResult, Traversal,
    DIRECTED_SEPARATOR, UNDIRECTED_SEPARATOR,
};
