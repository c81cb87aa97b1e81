//! In-memory graph operations: the core data structure.

pub mod builder;
mod display;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use store::{AdjacencyMap, Graph};
pub use traversal::{bfs, bfs_levels, dfs};
