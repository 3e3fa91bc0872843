// ABOUTME: Configuration module for report rendering settings
// ABOUTME: Loads environment overrides once and exposes them as a read-only singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Pierre Training Report
//!
//! Configuration is environment-only. Command-line flags in the binary take
//! precedence over anything loaded here.

/// Report rendering configuration
pub mod report;

pub use report::{ConfigError, ReportConfig, REPORT_FORMAT_ENV};
