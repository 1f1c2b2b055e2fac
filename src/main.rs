//! Generate multi-tenor synthetic fixtures from a base result.
//!
//! Usage:
//!   generate-multi-tenor <BASE_RESULT> [TENOR_DAYS]... [--output-dir DIR]
//!
//! Example:
//!   generate-multi-tenor output/btc_2025-01-03_7d_result.json 14 30

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;
use volsurf_fixtures::{FixtureError, FixtureGenerator, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "generate-multi-tenor", version)]
#[command(about = "Generate synthetic fixtures at new tenors from a base SVI result")]
struct Args {
    /// Base result JSON with forward, strikes and svi_params
    base_result: PathBuf,

    /// Target tenors in calendar days [default: 14 30]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    tenor_days: Vec<u32>,

    /// Directory for generated fixtures (defaults to the base file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("volsurf_fixtures=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut config = GeneratorConfig::with_tenors(args.tenor_days);
    if let Some(dir) = args.output_dir {
        config = config.output_dir(dir);
    }

    let generator = match FixtureGenerator::from_path(&args.base_result, config) {
        Ok(generator) => generator,
        Err(FixtureError::BaseNotFound { path }) => {
            anyhow::bail!("Base file not found: {}", path.display())
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to load base result {}", args.base_result.display())
            });
        }
    };

    let name = args
        .base_result
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("Generating multi-tenor fixtures from {name}");
    println!("   Tenors: {:?} days", generator.tenor_days());
    println!();

    for &days in generator.tenor_days() {
        let written = generator
            .write(days)
            .with_context(|| format!("failed to generate {days}d fixture"))?;
        println!("Generated: {}", written.path.display());
    }

    println!();
    println!("Done.");
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
