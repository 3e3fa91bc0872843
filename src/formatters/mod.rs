// ABOUTME: Output format abstraction for rendering training reports
// ABOUTME: Supports the fixed single-line text report (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Turns a `TrainingReport` into exactly one line of output.
//!
//! ## Supported Formats
//!
//! - **Text**: Default, the fixed report template with three decimals per number
//! - **JSON**: One compact JSON object per report, numbers rounded to three decimals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pierre_training_report::formatters::{format_report, OutputFormat};
//! use pierre_training_report::pierre_training_core::{Running, Workout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = Running::new(15000.0, 1.0, 75.0)?.show_training_info();
//! let line = format_report(&report, OutputFormat::Text)?;
//! println!("{line}");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use pierre_training_core::TrainingReport;
use serde::Serialize;

use crate::config::ConfigError;
use crate::errors::AppResult;

/// Fraction digits kept for every numeric field
pub const REPORT_PRECISION: i32 = 3;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed human-readable report line (default)
    #[default]
    Text,
    /// Compact JSON object
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    /// Parse format from string parameter (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "output format",
                value: s.to_owned(),
                expected: "text, json",
            }),
        }
    }
}

/// JSON shape of a report, rounded like the text template
#[derive(Debug, Serialize)]
struct RoundedReport<'a> {
    training_type: &'a str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

fn round_to_precision(value: f64) -> f64 {
    let scale = 10_f64.powi(REPORT_PRECISION);
    (value * scale).round() / scale
}

impl<'a> From<&'a TrainingReport> for RoundedReport<'a> {
    fn from(report: &'a TrainingReport) -> Self {
        Self {
            training_type: report.training_type(),
            duration: round_to_precision(report.duration()),
            distance: round_to_precision(report.distance()),
            speed: round_to_precision(report.speed()),
            calories: round_to_precision(report.calories()),
        }
    }
}

/// Render a training report as a single line
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn format_report(report: &TrainingReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(report.message()),
        OutputFormat::Json => Ok(serde_json::to_string(&RoundedReport::from(report))?),
    }
}
