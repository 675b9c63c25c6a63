//! Weighted CLI - Command Line Front End for Weighted Sampling
//!
//! This is the operational entry point for the `sampler_core` library.
//!
//! # Commands
//!
//! - `weighted bench` - Time all three samplers on values `1..=size`
//! - `weighted histogram --values a,b,c --weights 1,2,3` - Draw from one sampler
//!   and compare observed frequencies with the weights
//! - `weighted check` - Verify that fixed seeds replay identical draws
//!
//! Settings are read from `weighted.toml` (or `--config`) and overridden by
//! flags. Set `RUST_LOG=info` to see progress logging.

use clap::{Parser, Subcommand};
use sampler_core::SamplerKind;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::histogram::{parse_list, HistogramRequest};
use config::CliConfig;

/// Weighted random sampling CLI
#[derive(Parser)]
#[command(name = "weighted")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./weighted.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time draws from every sampler on values 1..=size weighted by value
    Bench {
        /// Number of distinct values
        #[arg(short, long, default_value = "10")]
        size: u32,

        /// Draws per sampler
        #[arg(short, long)]
        draws: Option<usize>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Draw from one sampler and tabulate observed frequencies
    Histogram {
        /// Sampler kind (alias, expansion, binary)
        #[arg(short, long, default_value = "alias")]
        kind: SamplerKind,

        /// Comma-separated value labels
        #[arg(long)]
        values: String,

        /// Comma-separated weights, one per value
        #[arg(short, long)]
        weights: String,

        /// Number of draws
        #[arg(short, long)]
        draws: Option<usize>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Parallel workers
        #[arg(long)]
        workers: Option<usize>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Verify that fixed seeds replay identical draws
    Check {
        /// Seed used for the replay checks
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Log filter: `--verbose` forces `info`, otherwise `RUST_LOG` decides.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(log_filter(cli.verbose))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let file = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Bench { size, draws, seed } => {
            let config = file.sampler_config(seed)?;
            commands::bench::run(size, file.draws(draws)?, &config)
        }
        Commands::Histogram {
            kind,
            values,
            weights,
            draws,
            seed,
            workers,
            format,
        } => {
            let config = file.sampler_config(seed)?;
            let request = HistogramRequest {
                kind,
                values: parse_list(&values, "value")?,
                weights: parse_list(&weights, "weight")?,
                draws: file.draws(draws)?,
                workers: workers.unwrap_or(file.sampling.workers),
            };
            commands::histogram::run(&request, &config, &format)
        }
        Commands::Check { seed } => commands::check::run(seed),
    }
}
