//! Core graph structure: labelled vertices with ordered adjacency sets.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{normalize_label, EdgeKind, EdgeSpec, Traversal};

use super::traversal;

/// Read-only view of the adjacency relation: vertex label -> ordered neighbor labels.
pub type AdjacencyMap = BTreeMap<String, BTreeSet<String>>;

/// An unweighted graph keyed by text labels.
///
/// Every label that appears in an adjacency set is also a key, and both the
/// keys and each adjacency set iterate in ascending byte order. Malformed input
/// (blank labels) is ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: AdjacencyMap,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (an undirected edge counts twice,
    /// a self-loop once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether the (trimmed) label names a vertex.
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.adjacency.contains_key(label.trim())
    }

    /// Add a vertex. Blank labels and existing vertices are a no-op.
    ///
    /// Returns `true` if a new vertex was created.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        match normalize_label(label) {
            Some(label) => self.insert_vertex(label),
            None => false,
        }
    }

    /// Add an edge, creating missing endpoints.
    ///
    /// Blank endpoints make the call a no-op. An undirected edge is mirrored
    /// onto `to` unless it is a self-loop. Returns `true` if the graph changed.
    pub fn add_edge(&mut self, from: &str, to: &str, kind: EdgeKind) -> bool {
        let (Some(from), Some(to)) = (normalize_label(from), normalize_label(to)) else {
            return false;
        };

        let mut changed = self.insert_vertex(from);
        changed |= self.insert_vertex(to);
        changed |= self.insert_arc(from, to);
        if kind.is_undirected() && from != to {
            changed |= self.insert_arc(to, from);
        }
        changed
    }

    /// Add an undirected edge.
    pub fn connect(&mut self, a: &str, b: &str) -> bool {
        self.add_edge(a, b, EdgeKind::Undirected)
    }

    /// Apply a parsed edge spec.
    pub fn apply(&mut self, spec: &EdgeSpec) -> bool {
        match spec {
            EdgeSpec::Vertex(label) => self.add_vertex(label),
            EdgeSpec::Edge { from, to, kind } => self.add_edge(from, to, *kind),
        }
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        log::debug!("clearing graph with {} vertices", self.adjacency.len());
        self.adjacency.clear();
    }

    /// All vertex labels in ascending order. Call again to restart.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of a vertex in ascending order (empty for unknown labels).
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = &str> + Clone + '_ {
        self.adjacency
            .get(label.trim())
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// The full adjacency relation, read-only.
    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    /// Breadth-first visitation order from `start`.
    pub fn bfs(&self, start: &str) -> Vec<String> {
        traversal::bfs(self, start)
    }

    /// Breadth-first visitation order paired with each vertex's distance from `start`.
    pub fn bfs_levels(&self, start: &str) -> Vec<(String, usize)> {
        traversal::bfs_levels(self, start)
    }

    /// Depth-first (pre-order) visitation order from `start`.
    pub fn dfs(&self, start: &str) -> Vec<String> {
        traversal::dfs(self, start)
    }

    /// Run the given traversal from `start`.
    pub fn traverse(&self, start: &str, traversal: Traversal) -> Vec<String> {
        match traversal {
            Traversal::Bfs => self.bfs(start),
            Traversal::Dfs => self.dfs(start),
        }
    }

    /// One `label: a, b` line per vertex, ascending. Empty graph gives `""`.
    pub fn format_adjacency(&self) -> String {
        self.to_string()
    }

    /// Look up the stored key for a label, so borrows share the graph's lifetime.
    pub(crate) fn resolve(&self, label: &str) -> Option<&str> {
        let label = normalize_label(label)?;
        self.adjacency
            .get_key_value(label)
            .map(|(key, _)| key.as_str())
    }

    fn insert_vertex(&mut self, label: &str) -> bool {
        if self.adjacency.contains_key(label) {
            return false;
        }
        log::debug!("vertex added: {label}");
        self.adjacency.insert(label.to_string(), BTreeSet::new());
        true
    }

    fn insert_arc(&mut self, from: &str, to: &str) -> bool {
        match self.adjacency.get_mut(from) {
            Some(neighbors) if !neighbors.contains(to) => {
                log::debug!("edge added: {from} -> {to}");
                neighbors.insert(to.to_string())
            }
            _ => false,
        }
    }
}
