// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use synapse_analysis::config::{
    check_config, load_config, Config, DetectionMethod, Overrides, RuntimeBuilder,
};
use synapse_analysis::output::write_events_csv;
use synapse_analysis::stack::load_tiff_stack;

/// Detect insertion events in TIRF stack.
#[derive(Parser, Debug)]
#[command(name = "detect-insertions", version, long_about = None)]
struct Args {
    /// Path to input TIFF stack
    input: PathBuf,

    /// Output CSV path [default: events.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Threshold (standard deviations) [default: 5.0]
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Minimum pixel distance between events [default: 3]
    #[arg(long = "min-distance", alias = "min_distance")]
    min_distance: Option<usize>,

    /// Detection method [default: frame_difference]
    #[arg(short, long, value_enum)]
    method: Option<DetectionMethod>,

    /// Worker threads for parallel_frame_difference
    #[arg(long)]
    threads: Option<usize>,

    /// YAML or TOML config file; command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            method: self.method,
            threshold: self.threshold,
            min_distance: self.min_distance,
            threads: self.threads,
            output: self.output.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if !args.input.exists() {
        eprintln!("Input file not found: {}", args.input.display());
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Could not load config '{}'", path.display()))?,
        None => Config::default(),
    };
    config.apply_overrides(args.overrides());
    check_config(&config)?;

    let (detector, params) = RuntimeBuilder::from_config(&config);
    let output_path = config.output.get_path();

    println!("Loading stack from {}...", args.input.display());
    let stack = load_tiff_stack(&args.input)
        .with_context(|| format!("Could not load stack '{}'", args.input.display()))?;
    println!("Stack shape: {}", stack);

    println!("Detecting insertion events ({})...", detector.name());
    let result = detector.detect(&stack, &params);
    println!("Detected {} events.", result.events.len());

    let saved = write_events_csv(&result.events, &output_path)
        .with_context(|| format!("Could not write events to '{}'", output_path.display()))?;
    println!("Saved {} events to {}", saved, output_path.display());

    tracing::debug!(
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Run finished"
    );
    Ok(())
}
