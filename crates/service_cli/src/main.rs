//! bsgreeks - Black-Scholes prices and Greeks from the command line
//!
//! Thin driver over `pricer_analytic`: builds contracts from flags, the
//! configuration file, or a CSV file, and prints the results.
//!
//! # Commands
//!
//! - `bsgreeks price [--spot S] [--strike K] ...` - Price a single contract
//! - `bsgreeks batch --input <file>` - Evaluate every contract in a CSV file
//!
//! # Configuration
//!
//! Settings are resolved from CLI flags, then `BSGREEKS_*` environment
//! variables, then the TOML config file (`bsgreeks.toml` by default), then
//! built-in defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_analytic::OptionType;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::{build_config, CliArgs};

/// Black-Scholes option pricing CLI
#[derive(Parser)]
#[command(name = "bsgreeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European option contract
    #[command(allow_negative_numbers = true)]
    Price {
        /// Spot price of the underlying
        #[arg(short, long)]
        spot: Option<f64>,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: Option<f64>,

        /// Annualised risk-free rate (e.g. 0.05)
        #[arg(short, long)]
        rate: Option<f64>,

        /// Annualised volatility (e.g. 0.2)
        #[arg(short = 'o', long)]
        volatility: Option<f64>,

        /// Time to expiration in years
        #[arg(short, long)]
        term: Option<f64>,

        /// Only report this option type (call or put)
        #[arg(short = 'y', long)]
        option_type: Option<OptionType>,
    },

    /// Evaluate every contract in a CSV file (spot,strike,rate,volatility,term)
    Batch {
        /// Path to the contracts CSV file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level.as_filter_str());

    info!("bsgreeks v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Price {
            spot,
            strike,
            rate,
            volatility,
            term,
            option_type,
        } => commands::price::run(
            &config,
            &PriceArgs {
                spot,
                strike,
                rate,
                volatility,
                term,
                option_type,
            },
        ),
        Commands::Batch { input } => commands::batch::run(&config, &input),
    }
}
