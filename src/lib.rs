// ABOUTME: Main library entry point for Pierre training reports
// ABOUTME: Turns activity sensor packages into distance, speed, and calorie report lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Report
//!
//! Converts raw activity-sensor packages (an activity-type code plus a flat
//! list of measurements) into normalized training reports with distance,
//! mean speed, and spent calories.
//!
//! ## Architecture
//!
//! - **pierre-training-core**: Coefficients, workout variants, and the report value
//! - **Dispatcher**: Maps `SWM`/`RUN`/`WLK` codes to workouts
//! - **Formatters**: Renders a report as the fixed text line or JSON
//! - **Packages**: `CODE:v1,v2,...` parsing and the reference packages
//! - **Pipeline**: Dispatcher + formatter per package, failures kept per package
//! - **Config/Logging**: Environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_training_report::formatters::OutputFormat;
//! use pierre_training_report::pipeline::render_package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let line = render_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], OutputFormat::Text)?;
//! assert!(line.ends_with("Потрачено ккал: 336.000."));
//! # Ok(())
//! # }
//! ```

/// Report rendering configuration
pub mod config;

/// Sensor package routing and workout construction
pub mod dispatcher;

/// Unified error handling with stable error codes
pub mod errors;

/// Report output formats
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Command-line sensor packages and the reference set
pub mod packages;

/// Per-package rendering pipeline
pub mod pipeline;

pub use pierre_training_core;
