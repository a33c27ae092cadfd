//! Quadratic CLI - Command Line Front End for the Equation Solver
//!
//! Solves `a·x² + b·x + c = target` over the complex numbers, exactly where
//! the inputs allow it.
//!
//! # Commands
//!
//! - `quadratic solve <A> <B> <C> [--target T]` - Solve one equation
//! - `quadratic batch <FILE>` - Solve a JSON array of equations
//! - `quadratic demo` - Solve the sample equation `2x + 5 = 7`
//! - `quadratic check` - Show configuration and run a self-test
//!
//! Literals accept integers (`-3`), fractions (`3/2`), floats (`1.5`) and
//! complex values (`2+3i`, `-i`, `1j`).
//!
//! # Architecture
//!
//! As the service layer, this crate only parses arguments, loads
//! configuration and installs logging; all solving lives in `quadratic_core`.

use std::path::Path;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Quadratic equation solver CLI
#[derive(Parser)]
#[command(name = "quadratic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "quadratic.toml")]
    config: String,

    /// Output format (text, json); overrides the configuration
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a·x² + b·x + c = target
    Solve {
        /// Quadratic coefficient
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Linear coefficient
        #[arg(allow_hyphen_values = true)]
        b: String,

        /// Constant term
        #[arg(allow_hyphen_values = true)]
        c: String,

        /// Right-hand side (default from configuration, normally 7)
        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<String>,
    },

    /// Solve every request in a JSON array (`-` reads stdin)
    Batch {
        /// Path to the JSON file
        input: String,
    },

    /// Solve the sample equation 2x + 5 = 7
    Demo,

    /// Check configuration and run a solver self-test
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        config.log_level
    };

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(Path::new(&cli.config))?;
    if let Some(format) = &cli.format {
        config.format = OutputFormat::from_str(format)?;
    }

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!(config = %cli.config, "Verbose mode enabled");
    }

    match cli.command {
        Commands::Solve { a, b, c, target } => {
            let target = target.unwrap_or_else(|| config.default_target.clone());
            commands::solve::run(&a, &b, &c, &target, config.format)
        }
        Commands::Batch { input } => {
            let target = config.default_target_scalar()?;
            commands::batch::run(&input, &target, config.format)
        }
        Commands::Demo => commands::demo::run(config.format),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
