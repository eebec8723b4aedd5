use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::info;
use ordered_float::OrderedFloat;

use yens_ksp::batch::{BatchConfig, BatchRunner};
use yens_ksp::graph::ScoreLattice;
use yens_ksp::protocol;
use yens_ksp::{BuildOptions, DirectedGraph, YenKsp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `v0 v1 ... c=<cost>` per path, empty line after each query
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Ranks the K shortest loopless paths for a batch of queries read from stdin.
///
/// Graph mode: stdin is `k|source target|source target...`.
/// Lattice mode: stdin is `k|row scores|row scores...`.
#[derive(Debug, Parser)]
#[command(name = "yens", version, about)]
struct Cli {
    /// Edge list file, one `from to weight` per line
    #[arg(short, long, required_unless_present = "lattice", conflicts_with = "lattice")]
    graph: Option<PathBuf>,

    /// Read a score matrix from stdin and rank its lattice paths
    #[arg(long)]
    lattice: bool,

    /// Declared number of vertices; enables strict graph validation
    #[arg(long)]
    vertex_count: Option<usize>,

    /// Run queries in parallel
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel runs (implies --parallel)
    #[arg(long)]
    threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match &cli.graph {
        Some(graph_path) => run_graph_mode(&cli, graph_path, &input, &mut out)?,
        None => run_lattice_mode(&cli, &input, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn run_graph_mode<O: Write>(
    cli: &Cli,
    graph_path: &Path,
    input: &str,
    out: &mut O,
) -> yens_ksp::Result<()> {
    let edges: Vec<_> = protocol::parse_edge_list(&fs::read_to_string(graph_path)?)?
        .into_iter()
        .map(|(from, to, weight)| (from, to, OrderedFloat(weight)))
        .collect();

    let options = match cli.vertex_count {
        Some(vertex_count) => BuildOptions::strict(vertex_count),
        None => BuildOptions::default(),
    };
    let graph = DirectedGraph::build(&edges, options)?;

    let queries = protocol::parse_request(input)?;
    info!("running {} queries from {}", queries.len(), graph_path.display());

    let mut config = BatchConfig::new().with_parallel(cli.parallel);
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    let results = BatchRunner::new(config).run(&graph, &queries)?;

    match cli.format {
        OutputFormat::Text => protocol::write_text(out, &results),
        OutputFormat::Json => protocol::write_json(out, &queries, &results),
    }
}

fn run_lattice_mode<O: Write>(cli: &Cli, input: &str, out: &mut O) -> yens_ksp::Result<()> {
    let request = protocol::parse_lattice_request(input)?;
    let scores: Vec<Vec<OrderedFloat<f64>>> = request
        .scores
        .iter()
        .map(|row| row.iter().copied().map(OrderedFloat).collect())
        .collect();

    let lattice = ScoreLattice::build(&scores)?;
    info!(
        "lattice with {} rows and {} columns, k = {}",
        lattice.vocab_size(),
        lattice.sequence_length(),
        request.k
    );

    let paths = YenKsp::new().k_shortest_paths(lattice.graph(), lattice.source(), lattice.target(), request.k)?;

    match cli.format {
        OutputFormat::Text => protocol::write_lattice_text(out, &lattice, &paths),
        OutputFormat::Json => protocol::write_lattice_json(out, &lattice, &paths),
    }
}
