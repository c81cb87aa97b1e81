//! CLI entry point for the `gwalk` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use graph_walk::cli::{commands, repl};
use graph_walk::{Graph, GraphError, Traversal};

#[derive(Parser)]
#[command(
    name = "gwalk",
    version,
    about = "gwalk: build a small graph and run BFS/DFS over it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Omit to start the interactive REPL
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Graph description shared by every one-shot command.
#[derive(Args)]
struct GraphArgs {
    /// Edge spec: A--B (undirected), A->B (directed) or a bare label
    #[arg(long = "edge", value_name = "SPEC")]
    edges: Vec<String>,

    /// Vertex label to add even without edges
    #[arg(long = "vertex", value_name = "LABEL")]
    vertices: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List vertex labels in ascending order
    Vertices {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Print the adjacency list
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Start vertex label
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first traversal from a start vertex
    Dfs {
        /// Start vertex label
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Run a traversal chosen by name: bfs or dfs
    Walk {
        /// Traversal name: bfs, dfs, breadth, depth
        traversal: String,
        /// Start vertex label
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

impl GraphArgs {
    fn build(&self) -> Result<Graph, GraphError> {
        let edges = commands::parse_specs(&self.edges)?;
        Ok(commands::build_graph(&self.vertices, &edges))
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), GraphError> {
    let json = cli.format == "json";
    let mut stdout = std::io::stdout();

    match cli.command {
        None => repl::run(),
        Some(Commands::Vertices { graph }) => {
            let graph = graph.build()?;
            commands::cmd_vertices(&graph, json, &mut stdout)
        }
        Some(Commands::Show { graph }) => {
            let graph = graph.build()?;
            commands::cmd_show(&graph, json, &mut stdout)
        }
        Some(Commands::Bfs { start, graph }) => {
            let graph = graph.build()?;
            commands::cmd_traverse(&graph, &start, Traversal::Bfs, json, &mut stdout)
        }
        Some(Commands::Dfs { start, graph }) => {
            let graph = graph.build()?;
            commands::cmd_traverse(&graph, &start, Traversal::Dfs, json, &mut stdout)
        }
        Some(Commands::Walk {
            traversal,
            start,
            graph,
        }) => {
            let graph = graph.build()?;
            commands::cmd_walk(&graph, &traversal, &start, json, &mut stdout)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidEdgeSpec(_) | GraphError::UnknownTraversal(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
