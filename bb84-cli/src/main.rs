//! Command-line front-end for the BB84 simulation engine.
//!
//! Runs the protocol once, writes the per-party text artifacts, and prints
//! a run summary (or its JSON rendering). All simulation semantics live in
//! `bb84-sim`; this binary only parses parameters and serializes results.

mod artifacts;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bb84_sim::prelude::*;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bb84")]
#[command(
    about = "Simulate BB84 key distribution over an honest or eavesdropped channel",
    long_about = None
)]
struct Args {
    /// Number of photons to transmit
    #[arg(long, default_value_t = 1000)]
    bits: usize,

    /// Seed for a reproducible run (omit for OS randomness)
    #[arg(long)]
    seed: Option<u64>,

    /// Bit-flip probability on the honest channel, in [0, 1]
    #[arg(long, default_value_t = 0.0)]
    noise: f64,

    /// Fraction of the raw key to reveal for error estimation, in (0, 1]
    #[arg(long, default_value_t = 0.05, conflicts_with = "sample_count")]
    sample_fraction: f64,

    /// Reveal a fixed number of raw-key positions instead of a fraction
    #[arg(long)]
    sample_count: Option<usize>,

    /// Route the transmission through an intercept-resend eavesdropper
    #[arg(long)]
    eve: bool,

    /// Directory for the generated text artifacts
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    let sample = match args.sample_count {
        Some(count) => SampleSpec::Count(count),
        None => SampleSpec::Fraction(args.sample_fraction),
    };
    let config = SimConfig {
        n_bits: args.bits,
        seed: args.seed,
        noise_flip_prob: args.noise,
        sample,
        eavesdropper: args.eve,
    };

    info!(
        bits = config.n_bits,
        eavesdropper = config.eavesdropper,
        seed = ?config.seed,
        "starting run"
    );
    let outcome = run_simulation(&config)?;
    info!(
        sifted = outcome.summary.sifted_len,
        qber = outcome.summary.qber,
        "run finished"
    );

    let written = artifacts::write_all(&args.out_dir, &outcome)
        .with_context(|| format!("writing artifacts under {}", args.out_dir.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    } else {
        println!("Generated files:");
        for path in &written {
            println!(" - {}", path.display());
        }
        println!();
        println!("{}", report::render(&outcome.summary, config.eavesdropper));
    }
    Ok(())
}
