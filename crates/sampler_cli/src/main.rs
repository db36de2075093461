//! Sampler CLI - draw samples from the command line
//!
//! # Commands
//!
//! - `sampler gaussian [--mean M] [--stddev S] [--params "M,S"]`
//! - `sampler spacing [--average A]`
//! - `sampler rayleigh [--sigma S]`
//! - `sampler choice <ITEM>...`
//!
//! Samples go to stdout one per line; logs go to stderr.
//!
//! # Configuration
//!
//! Defaults come from an optional TOML file (`--config`), then the
//! `SAMPLER_SEED` / `SAMPLER_LOG_LEVEL` environment variables, then flags.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sampler_core::{LogLevel, SamplerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod commands;
mod error;

pub use error::{CliError, Result};

/// Scalar sampler CLI
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the uniform source (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of samples to draw
    #[arg(short = 'n', long, global = true, default_value_t = 10)]
    count: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normal(mean, stddev²) samples via polar Box–Muller
    Gaussian {
        /// Distribution mean
        #[arg(long, allow_negative_numbers = true)]
        mean: Option<f64>,

        /// Standard deviation (> 0)
        #[arg(long)]
        stddev: Option<f64>,

        /// Mean and stddev as "MEAN,STDDEV"
        #[arg(long, conflicts_with_all = ["mean", "stddev"], allow_hyphen_values = true)]
        params: Option<String>,
    },

    /// GUE nearest-neighbour spacings
    Spacing {
        /// Average spacing (> 0)
        #[arg(long)]
        average: Option<f64>,
    },

    /// Rayleigh samples
    Rayleigh {
        /// Scale parameter (> 0)
        #[arg(long)]
        sigma: Option<f64>,
    },

    /// Uniform choice among items
    Choice {
        /// Items, separate words or comma-separated
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
    },
}

/// Resolves configuration: file, then environment, then flags.
fn load_config(cli: &Cli) -> Result<SamplerConfig> {
    resolve_config(cli, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with variables taken from `lookup`.
fn resolve_config<F>(cli: &Cli, lookup: F) -> Result<SamplerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match &cli.config {
        Some(path) => SamplerConfig::from_file(path)?,
        None => SamplerConfig::default(),
    };
    let mut config = config.with_overrides_from(lookup)?;

    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.verbose && config.log_level != LogLevel::Trace {
        config.log_level = LogLevel::Debug;
    }
    Ok(config)
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(config.log_level);

    let mut rng = config.build_rng();
    info!(seed = rng.seed(), count = cli.count, "Sampler starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Gaussian {
            mean,
            stddev,
            params,
        } => {
            let args = commands::gaussian::GaussianArgs {
                mean,
                stddev,
                params,
            };
            commands::gaussian::run(&config, &args, &mut rng, cli.count, &mut out)?
        }
        Commands::Spacing { average } => {
            commands::spacing::run(&config, average, &mut rng, cli.count, &mut out)?
        }
        Commands::Rayleigh { sigma } => {
            commands::rayleigh::run(&config, sigma, &mut rng, cli.count, &mut out)?
        }
        Commands::Choice { items } => commands::choice::run(&items, &mut rng, cli.count, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
