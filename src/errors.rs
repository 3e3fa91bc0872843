// ABOUTME: Unified error handling for the training report pipeline
// ABOUTME: Maps training, configuration, and serialization failures onto stable error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure the pipeline can report is an `AppError` carrying a stable
//! `ErrorCode`. Callers decide per package whether to skip or stop; nothing
//! here is collapsed into a default numeric value.

use std::error::Error;
use std::fmt;

use pierre_training_core::TrainingError;

use crate::config::ConfigError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Sensor package errors (3000-3999)
    /// Activity-type code outside the recognized set
    UnknownActivityType = 3000,
    /// Measurement count does not match the workout
    InvalidMeasurementData = 3001,
    /// Divisor measurement is zero, negative, or not finite
    DegenerateInput = 3002,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Report could not be serialized
    SerializationError = 9003,
}

impl ErrorCode {
    /// Stable machine-readable name, used as a structured log field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownActivityType => "UNKNOWN_ACTIVITY_TYPE",
            Self::InvalidMeasurementData => "INVALID_MEASUREMENT_DATA",
            Self::DegenerateInput => "DEGENERATE_INPUT",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownActivityType => "The activity type code is not recognized",
            Self::InvalidMeasurementData => "The sensor package has the wrong number of measurements",
            Self::DegenerateInput => "A measurement used as a divisor is not positive",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Report serialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, thiserror::Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<TrainingError> for AppError {
    fn from(error: TrainingError) -> Self {
        let code = match &error {
            TrainingError::UnknownActivityType { .. } => ErrorCode::UnknownActivityType,
            TrainingError::InvalidMeasurementData { .. } => ErrorCode::InvalidMeasurementData,
            TrainingError::DegenerateInput { .. } => ErrorCode::DegenerateInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_training_core::WorkoutType;

    #[test]
    fn test_training_errors_keep_their_code() {
        let error = AppError::from(TrainingError::unknown_activity_type("XYZ"));
        assert_eq!(error.code, ErrorCode::UnknownActivityType);
        assert!(error.message.contains("XYZ"));

        let error = AppError::from(TrainingError::invalid_measurement_data(
            WorkoutType::Running,
            3,
            2,
        ));
        assert_eq!(error.code, ErrorCode::InvalidMeasurementData);
        assert_eq!(error.code.as_str(), "INVALID_MEASUREMENT_DATA");
    }

    #[test]
    fn test_source_is_chained() {
        let error = AppError::from(TrainingError::degenerate_input("height_cm", 0.0));
        assert!(error.source().is_some());
    }
}
