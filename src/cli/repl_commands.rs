//! Slash command dispatch for the gwalk REPL.

use std::io::Write;

use crate::cli::repl_complete::{suggest_command, COMMANDS};
use crate::graph::Graph;
use crate::types::{normalize_label, EdgeKind, GraphResult, Traversal};

/// Session state: the graph being edited.
#[derive(Debug, Default)]
pub struct ReplState {
    pub graph: Graph,
}

impl ReplState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Execute a slash command. Returns `true` if the REPL should exit.
///
/// The leading `/` is optional. Blank labels are reported to the user here,
/// before the graph is touched.
pub fn execute(input: &str, state: &mut ReplState, out: &mut dyn Write) -> GraphResult<bool> {
    let input = input.trim();
    let input = input.strip_prefix('/').unwrap_or(input);
    if input.is_empty() {
        cmd_help(out)?;
        return Ok(false);
    }

    let (cmd, args) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let args = args.trim();

    match cmd {
        "exit" | "quit" => return Ok(true),
        "help" | "h" | "?" => cmd_help(out)?,
        "node" | "vertex" => cmd_node(args, state, out)?,
        "edge" => cmd_edge(args, EdgeKind::Undirected, state, out)?,
        "arc" => cmd_edge(args, EdgeKind::Directed, state, out)?,
        "bfs" | "dfs" => cmd_traverse(args, cmd.parse()?, state, out)?,
        "show" => cmd_show(state, out)?,
        "vertices" | "nodes" => cmd_vertices(state, out)?,
        "clear" | "reset" => {
            state.graph.clear();
            writeln!(out, "  Graph cleared.")?;
        }
        _ => match suggest_command(cmd) {
            Some(suggestion) => {
                writeln!(out, "  Unknown command '/{cmd}'. Did you mean {suggestion}?")?
            }
            None => writeln!(out, "  Unknown command '/{cmd}'. Type /help for commands.")?,
        },
    }

    Ok(false)
}

fn cmd_help(out: &mut dyn Write) -> GraphResult<()> {
    writeln!(out)?;
    writeln!(out, "  Commands:")?;
    writeln!(out)?;
    for (cmd, desc) in COMMANDS {
        writeln!(out, "    {cmd:<12} {desc}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn cmd_node(args: &str, state: &mut ReplState, out: &mut dyn Write) -> GraphResult<()> {
    let Some(label) = normalize_label(args) else {
        writeln!(out, "  Enter a node name. Usage: /node <name>")?;
        return Ok(());
    };
    if state.graph.add_vertex(label) {
        writeln!(out, "  Added node {label}")?;
    } else {
        writeln!(out, "  Node {label} already exists")?;
    }
    Ok(())
}

/// Split `/edge` arguments into fields. With a comma present the fields are
/// comma-separated, so labels may contain spaces.
fn edge_fields(args: &str) -> Vec<&str> {
    if args.contains(',') {
        args.split(',').map(str::trim).collect()
    } else {
        args.split_whitespace().collect()
    }
}

fn cmd_edge(
    args: &str,
    default_kind: EdgeKind,
    state: &mut ReplState,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let name = if default_kind.is_undirected() { "edge" } else { "arc" };
    let (from, to, kind) = match edge_fields(args).as_slice() {
        &[from, to] => (from, to, default_kind),
        &[from, to, kind] => (from, to, kind.parse::<EdgeKind>()?),
        _ => ("", "", default_kind),
    };
    let (Some(from), Some(to)) = (normalize_label(from), normalize_label(to)) else {
        writeln!(
            out,
            "  Enter both node names. Usage: /{name} <from> <to> [kind] or /{name} <from>, <to>[, kind]"
        )?;
        return Ok(());
    };

    let arrow = if kind.is_undirected() { "--" } else { "->" };
    if state.graph.add_edge(from, to, kind) {
        writeln!(out, "  Added {} edge {from} {arrow} {to}", kind.name())?;
    } else {
        writeln!(out, "  Edge {from} {arrow} {to} already exists")?;
    }
    Ok(())
}

fn cmd_traverse(
    args: &str,
    traversal: Traversal,
    state: &ReplState,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let Some(start) = normalize_label(args) else {
        writeln!(out, "  Enter a start node. Usage: /{} <start>", traversal.name())?;
        return Ok(());
    };
    if !state.graph.contains_vertex(start) {
        writeln!(out, "  Node {start} not found")?;
        return Ok(());
    }
    let order = state.graph.traverse(start, traversal);
    writeln!(
        out,
        "  {} from {start}: {}",
        traversal.name().to_uppercase(),
        order.join(" -> ")
    )?;
    Ok(())
}

fn cmd_show(state: &ReplState, out: &mut dyn Write) -> GraphResult<()> {
    if state.graph.is_empty() {
        writeln!(out, "  (empty graph)")?;
        return Ok(());
    }
    for line in state.graph.format_adjacency().lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn cmd_vertices(state: &ReplState, out: &mut dyn Write) -> GraphResult<()> {
    let labels: Vec<&str> = state.graph.vertices().collect();
    writeln!(out, "  {} node(s): {}", labels.len(), labels.join(", "))?;
    Ok(())
}
