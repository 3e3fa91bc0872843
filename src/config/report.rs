// ABOUTME: Report rendering configuration loaded from environment variables
// ABOUTME: Selects the output format with a validated, process-wide default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::warn;

use crate::formatters::OutputFormat;

/// Environment variable selecting the output format (`text` or `json`)
pub const REPORT_FORMAT_ENV: &str = "PIERRE_REPORT_FORMAT";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed
    #[error("Invalid value '{value}' for {key}: expected one of {expected}")]
    InvalidValue {
        /// Setting that failed to parse
        key: &'static str,
        /// Raw value received
        value: String,
        /// Accepted values
        expected: &'static str,
    },
}

/// Settings for rendering training reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// How each report is rendered
    pub output_format: OutputFormat,
}

/// Global configuration singleton
static REPORT_CONFIG: OnceLock<ReportConfig> = OnceLock::new();

impl ReportConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        REPORT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load report config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unrecognized value
    pub fn load() -> Result<Self, ConfigError> {
        Self::default().apply_env_overrides()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var(REPORT_FORMAT_ENV) {
            self.output_format = val.parse()?;
        }
        Ok(self)
    }

    /// Replace the output format, e.g. from a command-line flag
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}
