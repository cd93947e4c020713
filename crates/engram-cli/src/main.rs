//! Associative-memory demonstration harness.
//!
//! Trains the network on a 10x10 digit glyph, corrupts it with random cell
//! flips, recalls, and prints the trained, noisy, and recalled grids.
//!
//! Usage:
//!     cargo run -p engram-cli
//!     cargo run -p engram-cli -- --noise 4 --seed 7
//!     cargo run -p engram-cli -- --encoding binary --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn, Level};

use engram_core::{Config, Encoding, EngramError, Network, Pattern, RecallOutcome};

/// The digit-zero memory from the original demonstration.
const DIGIT_ZERO: &str = "\
    #####.####\n\
    #....#...#\n\
    #....#...#\n\
    #....#...#\n\
    #####.####\n\
    .....#...#\n\
    .....#...#\n\
    #....#...#\n\
    #....#...#\n\
    #####.####";

/// Cell value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EncodingArg {
    /// Cells in {-1, +1} (classical).
    Bipolar,
    /// Cells in {0, 1}.
    Binary,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Bipolar => Encoding::Bipolar,
            EncodingArg::Binary => Encoding::Binary,
        }
    }
}

/// Associative-memory recall demo.
#[derive(Parser, Debug)]
#[command(name = "engram")]
#[command(about = "Train a digit glyph, corrupt it, and recall the original")]
struct Args {
    /// Optional TOML config file; otherwise config/ + ENGRAM__ env vars.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cells to flip when corrupting the stored glyph.
    #[arg(long, default_value = "3")]
    noise: usize,

    /// Random seed for reproducible corruption.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Cell encoding override.
    #[arg(long, value_enum)]
    encoding: Option<EncodingArg>,

    /// Relaxation sweep cap override.
    #[arg(long)]
    max_sweeps: Option<usize>,

    /// Emit the recall report as JSON instead of printing grids.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading configuration")?,
    };
    if let Some(encoding) = args.encoding {
        config.network.encoding = encoding.into();
    }
    if let Some(max_sweeps) = args.max_sweeps {
        config.network.max_sweeps = max_sweeps;
    }
    config.validate().context("validating configuration")?;

    let level = config
        .logging
        .level
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let encoding = config.network.encoding;
    let stored = Pattern::parse(DIGIT_ZERO, encoding).context("parsing the digit glyph")?;

    let mut network = Network::with_config(stored.size(), config.network.clone())
        .context("constructing the network")?;
    network.train(&stored).context("training")?;
    info!(size = network.size(), %encoding, "network trained on digit zero");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let noisy = corrupt(&stored, encoding, args.noise, &mut rng);

    match network.recall_outcome(&noisy) {
        Ok(outcome) => report(&args, &stored, &noisy, &outcome),
        Err(EngramError::NonConvergence { sweeps, last }) => {
            warn!(sweeps, "recall did not settle; showing the best-effort state");
            print_grids(&stored, &noisy, &last);
            println!(
                "did not converge within {sweeps} sweeps; {} cells still differ",
                last.hamming(&stored)
            );
        }
        Err(err) => return Err(err).context("recall"),
    }

    Ok(())
}

/// Flip `count` distinct random cells of `pattern`.
fn corrupt(pattern: &Pattern, encoding: Encoding, count: usize, rng: &mut StdRng) -> Pattern {
    let size = pattern.size();
    let mut noisy = pattern.clone();
    let mut flipped = Vec::with_capacity(count);
    while flipped.len() < count.min(size * size) {
        let cell = (rng.gen_range(0..size), rng.gen_range(0..size));
        if !flipped.contains(&cell) {
            noisy.set(cell.0, cell.1, encoding.invert(noisy.get(cell.0, cell.1)));
            flipped.push(cell);
        }
    }
    noisy
}

fn report(args: &Args, stored: &Pattern, noisy: &Pattern, outcome: &RecallOutcome) {
    let corrected = noisy.hamming(&outcome.pattern);
    let residual = outcome.pattern.hamming(stored);

    if args.json {
        let report = serde_json::json!({
            "noise_cells": args.noise,
            "seed": args.seed,
            "corrected_cells": corrected,
            "residual_errors": residual,
            "outcome": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
        return;
    }

    print_grids(stored, noisy, &outcome.pattern);
    println!(
        "settled in {} sweeps, energy {}, corrected {} cells, {} residual errors",
        outcome.sweeps, outcome.energy, corrected, residual
    );
}

fn print_grids(stored: &Pattern, noisy: &Pattern, recalled: &Pattern) {
    println!("stored:");
    println!("{stored}");
    println!();
    println!("noisy input:");
    println!("{noisy}");
    println!();
    println!("recalled:");
    println!("{recalled}");
    println!();
}
