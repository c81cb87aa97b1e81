//! Fluent API for building Graph instances.

use crate::types::{EdgeKind, EdgeSpec};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Same leniency as [`Graph`]: blank labels are skipped silently.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a new builder for an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex.
    pub fn vertex(mut self, label: &str) -> Self {
        self.graph.add_vertex(label);
        self
    }

    /// Add an undirected edge.
    pub fn edge(mut self, a: &str, b: &str) -> Self {
        self.graph.add_edge(a, b, EdgeKind::Undirected);
        self
    }

    /// Add a directed edge.
    pub fn arc(mut self, from: &str, to: &str) -> Self {
        self.graph.add_edge(from, to, EdgeKind::Directed);
        self
    }

    /// Add a vertex or edge from a parsed spec.
    pub fn spec(mut self, spec: &EdgeSpec) -> Self {
        self.graph.apply(spec);
        self
    }

    /// Add every spec in order.
    pub fn specs<'a>(self, specs: impl IntoIterator<Item = &'a EdgeSpec>) -> Self {
        specs.into_iter().fold(self, |builder, spec| builder.spec(spec))
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph {
        self.graph
    }
}
