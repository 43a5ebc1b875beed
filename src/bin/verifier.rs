use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{ensure, Context, Result};
use log::info;

use maxmatch::verify;
use maxmatch::{GraphLoader, Matching};

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

fn parse_args() -> (PathBuf, PathBuf) {
    let mut args = env::args_os().skip(1);
    match (args.next(), args.next(), args.next()) {
        (Some(graph), Some(matching), None) => (PathBuf::from(graph), PathBuf::from(matching)),
        _ => {
            eprintln!("Usage: verifier <input graph> <matching>");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let (graph_path, matching_path) = parse_args();

    let graph = GraphLoader::from_path(&graph_path)
        .with_context(|| format!("load graph from {:?}", graph_path))?;
    info!(
        "Loaded graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    let claimed = GraphLoader::from_path(&matching_path)
        .with_context(|| format!("load matching from {:?}", matching_path))?;
    info!(
        "Loaded matching with {} nodes and {} edges",
        claimed.num_nodes(),
        claimed.num_edges()
    );

    let matching = Matching {
        num_nodes: claimed.num_nodes(),
        edges: claimed.edges().to_vec(),
    };

    verify::check_matching(&graph, &matching).context("the matching is not valid")?;
    println!("The matching is valid.");

    let reference = verify::reference_cardinality(&graph);
    println!(
        "Reference cardinality is {}, ours is {}",
        reference,
        matching.cardinality()
    );
    ensure!(
        matching.cardinality() == reference,
        "the matching is not maximum: {} != {}",
        matching.cardinality(),
        reference
    );
    println!("The matching is maximum.");

    Ok(())
}
