//! Edge kinds, traversal kinds, and the textual edge spec.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::GraphError;
use super::label::normalize_label;
use super::{DIRECTED_SEPARATOR, UNDIRECTED_SEPARATOR};

/// Whether an inserted edge is mirrored onto its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Mirrored both ways: `a -> b` and `b -> a`.
    #[default]
    Undirected,
    /// One-way: `a -> b` only.
    Directed,
}

impl EdgeKind {
    /// Return a human-readable name for this edge kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }

    /// Parse an edge kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "undirected" | "u" | "both" => Some(Self::Undirected),
            "directed" | "d" | "arc" | "one-way" => Some(Self::Directed),
            _ => None,
        }
    }

    pub fn is_undirected(&self) -> bool {
        matches!(self, Self::Undirected)
    }
}

impl FromStr for EdgeKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GraphError::UnknownEdgeKind(s.to_string()))
    }
}

/// Which traversal to run from a start vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Breadth-first, level order.
    Bfs,
    /// Depth-first, pre-order.
    Dfs,
}

impl Traversal {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Parse a traversal from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Some(Self::Bfs),
            "dfs" | "depth" | "depth-first" => Some(Self::Dfs),
            _ => None,
        }
    }
}

impl FromStr for Traversal {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GraphError::UnknownTraversal(s.to_string()))
    }
}

/// A vertex or edge written as text: `A`, `A--B` (undirected) or `A->B` (directed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeSpec {
    /// A bare vertex with no edges.
    Vertex(String),
    /// An edge between two (trimmed, non-empty) labels.
    Edge {
        from: String,
        to: String,
        kind: EdgeKind,
    },
}

impl EdgeSpec {
    fn split(text: &str, separator: &str, kind: EdgeKind) -> Option<Result<Self, GraphError>> {
        let (from, to) = text.split_once(separator)?;
        // A dash touching the separator means a malformed `--->`-style run
        if from.ends_with('-') || to.starts_with('-') {
            return Some(Err(GraphError::InvalidEdgeSpec(text.to_string())));
        }
        let spec = match (normalize_label(from), normalize_label(to)) {
            (Some(from), Some(to)) => Ok(Self::Edge {
                from: from.to_string(),
                to: to.to_string(),
                kind,
            }),
            _ => Err(GraphError::InvalidEdgeSpec(text.to_string())),
        };
        Some(spec)
    }
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separators =
            s.matches(DIRECTED_SEPARATOR).count() + s.matches(UNDIRECTED_SEPARATOR).count();
        if separators > 1 {
            return Err(GraphError::InvalidEdgeSpec(s.to_string()));
        }
        if let Some(spec) = Self::split(s, DIRECTED_SEPARATOR, EdgeKind::Directed) {
            return spec;
        }
        if let Some(spec) = Self::split(s, UNDIRECTED_SEPARATOR, EdgeKind::Undirected) {
            return spec;
        }
        normalize_label(s)
            .map(|label| Self::Vertex(label.to_string()))
            .ok_or_else(|| GraphError::InvalidEdgeSpec(s.to_string()))
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex(label) => f.write_str(label),
            Self::Edge { from, to, kind } => {
                let sep = match kind {
                    EdgeKind::Undirected => UNDIRECTED_SEPARATOR,
                    EdgeKind::Directed => DIRECTED_SEPARATOR,
                };
                write!(f, "{from}{sep}{to}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_undirected_edge() {
        let spec: EdgeSpec = " A -- B ".parse().unwrap();
        assert_eq!(
            spec,
            EdgeSpec::Edge {
                from: "A".into(),
                to: "B".into(),
                kind: EdgeKind::Undirected,
            }
        );
        assert_eq!(spec.to_string(), "A--B");
    }

    #[test]
    fn parses_directed_edge() {
        let spec: EdgeSpec = "X->Y".parse().unwrap();
        assert!(matches!(
            spec,
            EdgeSpec::Edge { kind: EdgeKind::Directed, .. }
        ));
    }

    #[test]
    fn parses_bare_vertex() {
        assert_eq!("  solo ".parse::<EdgeSpec>().unwrap(), EdgeSpec::Vertex("solo".into()));
    }

    #[test]
    fn rejects_blank_sides() {
        assert!(matches!(
            "A--".parse::<EdgeSpec>(),
            Err(GraphError::InvalidEdgeSpec(_))
        ));
        assert!(matches!(
            " -> B".parse::<EdgeSpec>(),
            Err(GraphError::InvalidEdgeSpec(_))
        ));
        assert!("   ".parse::<EdgeSpec>().is_err());
    }

    #[test]
    fn rejects_chained_or_mixed_separators() {
        for raw in ["a--b->c", "a-->b", "a->b->c", "a--b--c", "a---b", "a->-b"] {
            assert!(
                matches!(raw.parse::<EdgeSpec>(), Err(GraphError::InvalidEdgeSpec(_))),
                "{raw} should be rejected"
            );
        }
        // Single dashes inside labels are fine
        let spec: EdgeSpec = "new-york -> san-jose".parse().unwrap();
        assert_eq!(
            spec,
            EdgeSpec::Edge {
                from: "new-york".into(),
                to: "san-jose".into(),
                kind: EdgeKind::Directed,
            }
        );
    }

    #[test]
    fn kind_and_traversal_names() {
        assert_eq!(EdgeKind::from_name("ARC"), Some(EdgeKind::Directed));
        assert_eq!(EdgeKind::default(), EdgeKind::Undirected);
        assert_eq!("dfs".parse::<Traversal>().unwrap(), Traversal::Dfs);
        assert!(matches!(
            "walk".parse::<Traversal>(),
            Err(GraphError::UnknownTraversal(_))
        ));
    }
}
