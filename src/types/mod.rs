//! All data types for the graph-walk library.

pub mod edge;
pub mod error;
pub mod label;

pub use edge::{EdgeKind, EdgeSpec, Traversal};
pub use error::{GraphError, GraphResult};
pub use label::normalize_label;

/// Separator for undirected edges in an edge spec (`A--B`).
pub const UNDIRECTED_SEPARATOR: &str = "--";

/// Separator for directed edges in an edge spec (`A->B`).
pub const DIRECTED_SEPARATOR: &str = "->";
