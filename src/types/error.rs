//! Error types for the graph-walk front-ends.
//!
//! The graph core itself is infallible; these errors only arise when text
//! from the command line or the REPL is parsed, or when output fails.

use thiserror::Error;

/// All errors that can occur outside the graph core.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge spec could not be parsed (e.g. `A--` or `->B`).
    #[error("Invalid edge spec: {0:?}")]
    InvalidEdgeSpec(String),

    /// Traversal name is neither `bfs` nor `dfs`.
    #[error("Unknown traversal: {0}")]
    UnknownTraversal(String),

    /// Edge kind name could not be parsed.
    #[error("Unknown edge kind: {0}")]
    UnknownEdgeKind(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Line editor failure in the interactive REPL.
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph-walk front-end operations.
pub type GraphResult<T> = Result<T, GraphError>;
