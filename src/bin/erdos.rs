//! CLI entry point for the `erdos` command-line tool.

use std::process;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use erdos::algorithms::{AllPairsAlgorithm, MinSpanTreeAlgorithm, SingleSourceAlgorithm};
use erdos::cli::commands::{self, GraphInput};

#[derive(Parser)]
#[command(
    name = "erdos",
    about = "Erdos CLI: run classical graph algorithms on graphs given as edge specs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Report timing on stderr
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The input graph, shared by every subcommand.
#[derive(Args)]
struct GraphArgs {
    /// Edge specs: A>B:w (directed), A-B:w (undirected) or A (lone vertex)
    #[arg(required = true)]
    edges: Vec<String>,
    /// Accept parallel edges
    #[arg(long)]
    multi_edges: bool,
    /// Accept self-loops
    #[arg(long)]
    self_loops: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first search from a source vertex
    Bfs {
        /// Source vertex name
        #[arg(long)]
        source: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first search with edge classification
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Topological order of a directed acyclic graph
    Topo {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Strongly connected components of a directed graph
    Scc {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Single-source shortest paths
    Sssp {
        /// Source vertex name
        #[arg(long)]
        source: String,
        /// Algorithm: bellman-ford, dag or dijkstra
        #[arg(long, default_value = "dijkstra")]
        algorithm: SingleSourceAlgorithm,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// All-pairs shortest paths
    Apsp {
        /// Algorithm: floyd-warshall or johnson
        #[arg(long, default_value = "floyd-warshall")]
        algorithm: AllPairsAlgorithm,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Minimum spanning tree (forest) of an undirected graph
    Mst {
        /// Algorithm: kruskal or prim
        #[arg(long, default_value = "kruskal")]
        algorithm: MinSpanTreeAlgorithm,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

impl Commands {
    fn graph_args(&self) -> &GraphArgs {
        match self {
            Self::Bfs { graph, .. }
            | Self::Dfs { graph }
            | Self::Topo { graph }
            | Self::Scc { graph }
            | Self::Sssp { graph, .. }
            | Self::Apsp { graph, .. }
            | Self::Mst { graph, .. } => graph,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid format: {}", other);
            process::exit(3);
        }
    };

    let started = Instant::now();
    let args = cli.command.graph_args();
    let input = match GraphInput::from_specs(&args.edges, args.multi_edges, args.self_loops) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };
    if cli.verbose {
        eprintln!(
            "Built graph: {} vertices, {} edges, {} rejected specs in {:?}",
            input.graph().vertex_count(),
            input.graph().edge_count(),
            input.rejected(),
            started.elapsed()
        );
    }

    let started = Instant::now();
    let result = match &cli.command {
        Commands::Bfs { source, .. } => commands::cmd_bfs(&input, source, json),
        Commands::Dfs { .. } => commands::cmd_dfs(&input, json),
        Commands::Topo { .. } => commands::cmd_topo(&input, json),
        Commands::Scc { .. } => commands::cmd_scc(&input, json),
        Commands::Sssp {
            source, algorithm, ..
        } => commands::cmd_sssp(&input, source, *algorithm, json),
        Commands::Apsp { algorithm, .. } => commands::cmd_apsp(&input, *algorithm, json),
        Commands::Mst { algorithm, .. } => commands::cmd_mst(&input, *algorithm, json),
    };
    if cli.verbose {
        eprintln!("Algorithm finished in {:?}", started.elapsed());
    }

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
