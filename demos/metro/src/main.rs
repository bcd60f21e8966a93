//! metro — command-line front end for the subway workspace.
//!
//! Loads a network CSV (or the built-in southern-Seoul sample), prints a
//! summary, and answers shortest-path queries.
//!
//! ```text
//! metro --from Gyodae --to Dogok
//! metro --network lines.csv --from A --to B
//! metro            # all-pairs table for the loaded network
//! RUST_LOG=subway_path=trace metro --from Gyodae --to Yangjae
//! ```

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use subway_core::StationId;
use subway_network::{Network, load_network_csv, load_network_reader};
use subway_path::ShortestPathEngine;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

const SAMPLE_NETWORK: &str = include_str!("network.csv");

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths across a subway network")]
struct Args {
    /// Network CSV (`line,color,up_station,down_station,distance`).
    /// Defaults to the built-in sample.
    #[arg(long)]
    network: Option<PathBuf>,

    /// Origin station name.
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination station name.
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("metro={level},subway_network={level},subway_path={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // 1. Load the network.
    let net = match &args.network {
        Some(path) => load_network_csv(path)
            .with_context(|| format!("loading network from {}", path.display()))?,
        None => load_network_reader(Cursor::new(SAMPLE_NETWORK)).context("loading built-in network")?,
    };
    print_summary(&net);

    // 2. Answer the query, or every pair if none was given.
    match (&args.from, &args.to) {
        (Some(from), Some(to)) => single_query(&net, from, to),
        _ => all_pairs(&net),
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

fn single_query(net: &Network, from: &str, to: &str) -> Result<()> {
    let origin      = lookup(net, from)?;
    let destination = lookup(net, to)?;

    let started = Instant::now();
    let route = net.shortest_path(origin, destination)?;
    info!(elapsed_us = started.elapsed().as_micros() as u64, "route found");

    println!();
    println!("{from} → {to}: distance {}", route.distance);
    println!("  {}", route.station_names().join(" → "));
    Ok(())
}

fn all_pairs(net: &Network) -> Result<()> {
    let stations: Vec<_> = net.stations().collect();
    let queries: Vec<(StationId, StationId)> = stations
        .iter()
        .flat_map(|a| stations.iter().map(move |b| (a.id(), b.id())))
        .filter(|(a, b)| a < b)
        .collect();

    let lines: Vec<_> = net.lines().collect();
    let started = Instant::now();
    let results = ShortestPathEngine::new().calculate_shortest_paths(&lines, &queries);
    info!(
        queries = queries.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "all-pairs table computed"
    );

    println!();
    for ((origin, destination), result) in queries.iter().zip(results) {
        let from = net.station(*origin)?.name();
        let to   = net.station(*destination)?.name();
        match result {
            Ok(path) => println!("{from:>26} → {to:<26} {:>4}  ({} stops)", path.distance, path.hops()),
            Err(e)   => println!("{from:>26} → {to:<26}    -  ({e})"),
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn lookup(net: &Network, name: &str) -> Result<StationId> {
    match net.station_by_name(name) {
        Some(s) => Ok(s.id()),
        None => bail!("unknown station {name:?}"),
    }
}

fn print_summary(net: &Network) {
    println!("=== metro ===");
    println!("Stations: {}  |  Lines: {}", net.stations().count(), net.line_count());
    for line in net.lines() {
        let names: Vec<&str> = line
            .stations()
            .into_iter()
            .filter_map(|id| net.station(id).ok().map(|s| s.name()))
            .collect();
        println!(
            "  {:<14} {:<7} {} segments, length {:>3}: {}",
            line.name(),
            line.color(),
            line.segments().len(),
            line.chain().total_distance(),
            names.join(" – ")
        );
    }
}
