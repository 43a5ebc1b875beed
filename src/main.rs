use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use maxmatch::{GraphLoader, GraphWriter, Matcher, MatcherConfig};

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

fn parse_args() -> PathBuf {
    let mut args = env::args_os().skip(1);
    let first = args.next();
    let extra = args.next();

    match first {
        Some(arg) if extra.is_none() && arg != "--help" && arg != "-h" => PathBuf::from(arg),
        _ => {
            eprintln!("Usage: maxmatch <input DIMACS file>");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let path = parse_args();

    let load_start = Instant::now();
    let graph = GraphLoader::from_path(&path)
        .with_context(|| format!("load DIMACS graph from {:?}", path))?;
    info!(
        "Loaded graph with {} nodes and {} edges in {:?}",
        graph.num_nodes(),
        graph.num_edges(),
        load_start.elapsed()
    );

    let matching_start = Instant::now();
    let mut matcher = Matcher::new(MatcherConfig::default());
    let matching = matcher.compute_matching(&graph);
    info!(
        "Maximum matching has cardinality {} ({:?})",
        matching.cardinality(),
        matching_start.elapsed()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    GraphWriter::write_matching(&matching, &mut out)?;
    out.flush().context("flush matching to stdout")?;

    Ok(())
}
