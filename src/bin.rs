use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use libgraph::{
    dot::DotOptions,
    graph::{Graph, VertexIndex},
};

fn main() {
    let cli = Cli::parse();

    // libgraph info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("libgraph", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "libgraph-cli",
    version,
    about = "Load a graph description, traverse it and export it to DOT."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

/// Options shared across all subcommands.
#[derive(Args, Debug)]
struct GlobalOptions {
    /// Graph description to load.
    #[arg(short, long, value_name = "FILE")]
    graph: PathBuf,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct StartOptions {
    /// Start vertex, by index or by label.
    #[arg(short, long, value_name = "VERTEX", default_value = "0")]
    start: String,
}

#[derive(Args, Debug)]
struct DotOutput {
    /// Export as an undirected graph.
    #[arg(long)]
    undirected: bool,
    /// Write edge weights as edge labels.
    #[arg(long)]
    weights: bool,
    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every vertex with its outgoing edges.
    Print,
    /// Breadth-first visiting order.
    Bfs(StartOptions),
    /// Depth-first visiting order over the whole graph, and the number of trees.
    Dfs {
        #[command(flatten)]
        start: StartOptions,
        /// Use the call-stack formulation.
        #[arg(long)]
        recursive: bool,
    },
    /// Depth-first visiting order of the start component, stack based.
    DfsIter(StartOptions),
    /// Topological order of the vertices reachable from the start vertex.
    Toposort(StartOptions),
    /// Depth-first spanning tree from the start vertex, as DOT.
    SpanningTree {
        #[command(flatten)]
        start: StartOptions,
        #[command(flatten)]
        dot: DotOutput,
    },
    /// Export the whole graph as DOT.
    Dot(DotOutput),
}

fn run(cli: &Cli) -> Result<()> {
    let graph = Graph::from_file(&cli.global.graph)
        .with_context(|| format!("failed to load {}", cli.global.graph.display()))?;
    log::info!(
        "{}: {} vertices, {} edges, {} self loops",
        cli.global.graph.display(),
        graph.n_vertices(),
        graph.n_edges(),
        graph.count_self_loops()
    );

    match &cli.command {
        Command::Print => print!("{graph}"),
        Command::Bfs(start) => {
            let order = graph.bfs_order(resolve_start(&graph, start)?)?;
            println!("{}", names(&graph, &order));
        }
        Command::Dfs { start, recursive } => {
            let start = resolve_start(&graph, start)?;
            let mut order = Vec::new();
            let visit = |v: libgraph::graph::VertexRef<'_>| order.push(v.index());
            let trees = if *recursive {
                graph.dfs_recursive(start, visit)?
            } else {
                graph.dfs(start, visit)?
            };
            println!("{}", names(&graph, &order));
            println!("trees: {trees}");
        }
        Command::DfsIter(start) => {
            let order = graph.dfs_iter_order(resolve_start(&graph, start)?)?;
            println!("{}", names(&graph, &order));
        }
        Command::Toposort(start) => {
            let order = graph.topological_order(resolve_start(&graph, start)?)?;
            println!("{}", order.display(&graph));
        }
        Command::SpanningTree { start, dot } => {
            let tree = graph.spanning_tree(resolve_start(&graph, start)?)?;
            export(&tree, dot)?;
        }
        Command::Dot(dot) => export(&graph, dot)?,
    }
    Ok(())
}

fn resolve_start(graph: &Graph, options: &StartOptions) -> Result<VertexIndex> {
    match options.start.parse::<usize>() {
        Ok(index) => Ok(index.into()),
        Err(_) => graph
            .index_of_label(&options.start)
            .with_context(|| format!("unknown start vertex {:?}", options.start)),
    }
}

fn names(graph: &Graph, order: &[VertexIndex]) -> String {
    order.iter().map(|&v| graph.vertex_name(v)).join(" ")
}

fn export(graph: &Graph, dot: &DotOutput) -> Result<()> {
    let options = if dot.undirected {
        DotOptions::undirected()
    } else {
        DotOptions::directed()
    };
    let options = if dot.weights {
        options.with_weights()
    } else {
        options
    };

    match &dot.output {
        Some(path) => write_dot(graph, path, options),
        None => {
            print!("{}", graph.to_dot_string(options));
            Ok(())
        }
    }
}

fn write_dot(graph: &Graph, path: &Path, options: DotOptions) -> Result<()> {
    graph
        .to_dot_file(path, options)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
