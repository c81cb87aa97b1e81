//! CLI command implementations.
//!
//! Each command receives an already-built graph and writes its result to the
//! supplied writer, as plain text or JSON.

use std::collections::BTreeMap;
use std::io::Write;

use crate::graph::{Graph, GraphBuilder};
use crate::types::{normalize_label, EdgeSpec, GraphResult, Traversal};

/// Parse raw `--edge` values; the first malformed one aborts the command.
pub fn parse_specs(raw: &[String]) -> GraphResult<Vec<EdgeSpec>> {
    raw.iter().map(|spec| spec.parse()).collect()
}

/// Build the graph for one invocation from `--vertex` labels and `--edge` specs.
pub fn build_graph(vertices: &[String], edges: &[EdgeSpec]) -> Graph {
    let builder = vertices
        .iter()
        .fold(GraphBuilder::new(), |builder, label| builder.vertex(label));
    let graph = builder.specs(edges).build();
    log::debug!(
        "built graph: {} vertices, {} adjacency entries",
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}

/// Print all vertex labels, one per line.
pub fn cmd_vertices(graph: &Graph, json: bool, out: &mut dyn Write) -> GraphResult<()> {
    if json {
        let labels: Vec<&str> = graph.vertices().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&labels)?)?;
    } else {
        for label in graph.vertices() {
            writeln!(out, "{label}")?;
        }
    }
    Ok(())
}

/// Print the adjacency listing.
pub fn cmd_show(graph: &Graph, json: bool, out: &mut dyn Write) -> GraphResult<()> {
    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": graph,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else if !graph.is_empty() {
        writeln!(out, "{}", graph.format_adjacency())?;
    }
    Ok(())
}

/// Run a traversal named on the command line (`bfs`, `dfs`, `breadth`, ...).
pub fn cmd_walk(
    graph: &Graph,
    traversal: &str,
    start: &str,
    json: bool,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let traversal: Traversal = traversal.parse()?;
    cmd_traverse(graph, start, traversal, json, out)
}

/// Run a traversal and print the visitation order.
///
/// An unknown start vertex prints an empty order rather than failing.
pub fn cmd_traverse(
    graph: &Graph,
    start: &str,
    traversal: Traversal,
    json: bool,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let order = graph.traverse(start, traversal);
    if order.is_empty() {
        log::warn!("start vertex {start:?} is not in the graph");
    }

    if json {
        let mut info = serde_json::json!({
            "traversal": traversal.name(),
            "start": normalize_label(start).unwrap_or_default(),
            "order": order,
        });
        if traversal == Traversal::Bfs {
            let depths: BTreeMap<String, usize> = graph.bfs_levels(start).into_iter().collect();
            info["depths"] = serde_json::json!(depths);
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "{}", order.join(" -> "))?;
    }
    Ok(())
}
