//! # tradelane CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tradelane_cli::check::{run_check, CheckArgs};
use tradelane_cli::countries::{run_countries, CountriesArgs};
use tradelane_cli::validate::{run_validate, ValidateArgs};
use tradelane_cli::{load_engine, load_registry};

/// Tradelane compliance engine CLI
///
/// Cross-border compliance and landed-cost checks for freight quotes.
#[derive(Parser, Debug)]
#[command(name = "tradelane", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Regulation pack to use instead of the built-in snapshot.
    #[arg(long, global = true)]
    regpack: Option<PathBuf>,

    /// Engine configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a compliance and landed-cost check for one shipment.
    Check(CheckArgs),

    /// List the countries in the regulation registry.
    Countries(CountriesArgs),

    /// Validate a regulation pack file.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tradelane CLI starting");

    let result = match cli.command {
        Commands::Check(args) => load_engine(cli.regpack.as_deref(), cli.config.as_deref())
            .and_then(|engine| run_check(&args, &engine)),
        Commands::Countries(args) => {
            load_registry(cli.regpack.as_deref()).and_then(|registry| run_countries(&args, &registry))
        }
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
