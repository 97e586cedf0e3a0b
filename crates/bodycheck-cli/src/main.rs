//! # bodycheck CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bodycheck_cli::check::{run_check, CheckArgs};
use bodycheck_cli::load_options;
use bodycheck_cli::selftest::{run_selftest, SelftestArgs};

/// bodycheck — request body shape validation.
///
/// Checks JSON or YAML request bodies against declarative field schemas:
/// per-field type tags, type unions, required/optional fields and nested
/// object schemas.
#[derive(Parser, Debug)]
#[command(name = "bodycheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a validation options file (JSON or YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a request body against a schema.
    Check(CheckArgs),

    /// Run the reference fixtures and report pass/fail per fixture.
    Selftest(SelftestArgs),
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
        .init();

    tracing::debug!("bodycheck CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let options = match load_options(cli.config.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, options),
        Commands::Selftest(args) => Ok(run_selftest(&args, options)),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
