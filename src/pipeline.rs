// ABOUTME: Per-package rendering pipeline from sensor data to a report line
// ABOUTME: Dispatches, builds the training report, and formats it without any I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_training_core::Workout;
use tracing::{debug, info, warn};

use crate::dispatcher::read_package;
use crate::errors::AppResult;
use crate::formatters::{format_report, OutputFormat};
use crate::packages::{SensorPackage, REFERENCE_PACKAGES};

/// Lines rendered from a batch, with the number of packages attempted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Rendered report lines in input order; failed packages are left out
    pub lines: Vec<String>,
    /// Number of packages attempted
    pub total: usize,
}

impl BatchOutcome {
    /// Whether packages were attempted and none rendered
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.lines.is_empty()
    }
}

/// Render one sensor package as a report line
///
/// # Errors
///
/// Returns an error if the package cannot be dispatched or the report
/// cannot be serialized
pub fn render_package(code: &str, data: &[f64], format: OutputFormat) -> AppResult<String> {
    let training = read_package(code, data)?;
    let report = training.show_training_info();
    let line = format_report(&report, format)?;
    debug!(workout = code, format = %format, "Rendered training report");
    Ok(line)
}

/// Render every package in order, keeping failures in place
///
/// A failed package is logged and reported in its slot; it never stops the
/// remaining packages from being rendered.
#[must_use]
pub fn render_packages<'a, I, D>(packages: I, format: OutputFormat) -> Vec<AppResult<String>>
where
    I: IntoIterator<Item = (&'a str, D)>,
    D: AsRef<[f64]>,
{
    packages
        .into_iter()
        .map(|(code, data)| {
            render_package(code, data.as_ref(), format).inspect_err(|e| {
                warn!(
                    workout = code,
                    error.code = e.code.as_str(),
                    "Skipping sensor package: {e}"
                );
            })
        })
        .collect()
}

/// Render the given packages, or the reference packages when none are given
#[must_use]
pub fn render_batch(packages: &[SensorPackage], format: OutputFormat) -> BatchOutcome {
    let results = if packages.is_empty() {
        info!("No packages given, rendering reference packages");
        render_packages(REFERENCE_PACKAGES, format)
    } else {
        render_packages(packages.iter().map(SensorPackage::as_pair), format)
    };

    let total = results.len();
    let lines: Vec<String> = results.into_iter().flatten().collect();
    info!(
        rendered = lines.len(),
        total, "Finished rendering training reports"
    );

    BatchOutcome { lines, total }
}
