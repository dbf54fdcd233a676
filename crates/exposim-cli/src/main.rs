mod progress;
mod settings;
mod summary;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exposim_core::batch::run_batch_reported;
use exposim_core::io::ImageRsCodec;
use tracing_subscriber::EnvFilter;

use progress::BarReporter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EffectArg {
    /// Simulate underexposure
    Dark,
    /// Simulate overexposure
    Overexpose,
}

#[derive(Parser, Debug)]
#[command(name = "exposim", about = "Batch-simulate under- and overexposed images")]
#[command(version)]
struct Cli {
    /// Folder containing the input images
    input_dir: PathBuf,

    /// Folder for the processed images (created if missing)
    output_dir: PathBuf,

    /// Effect to apply
    #[arg(long, value_enum, required_unless_present = "config")]
    effect: Option<EffectArg>,

    /// Effect strength, clamped to 0.1-1.0 [default: 0.5]
    #[arg(long, allow_negative_numbers = true)]
    strength: Option<f32>,

    /// Gamma correction applied after the effect (must be > 0)
    #[arg(long)]
    gamma: Option<f32>,

    /// Process images on all CPU cores
    #[arg(long)]
    parallel: bool,

    /// Effect settings file (TOML); command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let file_settings = match cli.config {
        Some(ref path) => settings::load_settings(path)?,
        None => Default::default(),
    };
    let config = settings::build_config(&cli, &file_settings)?;

    summary::print_batch_summary(&config);

    let reporter = Arc::new(BarReporter::new()?);
    let result = run_batch_reported(&config, &ImageRsCodec, reporter)
        .with_context(|| format!("Failed to process {}", config.input_dir.display()))?;

    summary::print_batch_result(&result);

    Ok(())
}
