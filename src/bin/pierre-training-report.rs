// ABOUTME: Pierre training report CLI - prints one report line per sensor package
// ABOUTME: Thin driver over the library pipeline; bad packages are logged and skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Render the three reference packages
//! pierre-training-report
//!
//! # Render custom packages
//! pierre-training-report --package RUN:15000,1,75 --package WLK:9000,1,75,180
//!
//! # JSON output with debug logging on stderr
//! pierre-training-report --format json --verbose
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use pierre_training_report::{
    config::ReportConfig, formatters::OutputFormat, logging::LoggingConfig,
    packages::SensorPackage, pipeline::render_batch,
};

#[derive(Parser)]
#[command(
    name = "pierre-training-report",
    about = "Pierre Training Report CLI",
    long_about = "Turns activity sensor packages into distance, speed, and calorie reports."
)]
struct Cli {
    /// Sensor package as CODE:v1,v2,... (repeatable; SWM, RUN, or WLK)
    #[arg(long = "package", short = 'p')]
    packages: Vec<SensorPackage>,

    /// Output format override (text or json)
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = *ReportConfig::global();
    if let Some(format) = cli.format {
        config = config.with_output_format(format);
    }

    let outcome = render_batch(&cli.packages, config.output_format);
    for line in &outcome.lines {
        println!("{line}");
    }

    if outcome.all_failed() {
        bail!(
            "none of the {} sensor packages could be rendered",
            outcome.total
        );
    }

    Ok(())
}
