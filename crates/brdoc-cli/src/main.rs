//! # brdoc CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::config::CliConfig;
use brdoc_cli::generate::{run_generate, GenerateArgs};
use brdoc_cli::kinds::{run_kinds, KindsArgs};
use brdoc_cli::validate::{run_validate, ValidateArgs};

/// Generate and validate Brazilian document numbers.
///
/// Supports CPF, CNPJ, RG, PIS/PASEP, RENAVAM, voter titles, civil
/// certificate numbers and the state registrations of all 27 units.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported document kinds.
    Kinds(KindsArgs),

    /// Generate random valid document numbers.
    Generate(GenerateArgs),

    /// Validate document numbers.
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

    tracing::debug!("brdoc CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| {
        let mut stdout = std::io::stdout().lock();
        match &cli.command {
            Commands::Kinds(args) => run_kinds(args, &config, &mut stdout),
            Commands::Generate(args) => {
                run_generate(args, &config, &mut rand::thread_rng(), &mut stdout)
            }
            Commands::Validate(args) => {
                run_validate(args, &config, std::io::stdin().lock(), &mut stdout)
            }
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
