// ABOUTME: Training error types for workout dispatch and construction
// ABOUTME: Defines TrainingError with structured context for each rejected sensor package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::WorkoutType;

/// Errors raised while turning a sensor package into a workout
///
/// Every variant is recoverable from the caller's point of view: the
/// package is rejected and the next one can be processed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    /// The activity-type code is not one of the recognized codes
    #[error("Unknown activity type '{code}'. Valid codes: SWM, RUN, WLK")]
    UnknownActivityType {
        /// Code received from the sensor package
        code: String,
    },

    /// The number of measurements does not match what the workout expects
    #[error("Invalid measurement data for {workout_type}: expected {expected} values, got {actual}")]
    InvalidMeasurementData {
        /// Workout the measurements were routed to
        workout_type: WorkoutType,
        /// Number of measurements the workout needs
        expected: usize,
        /// Number of measurements received
        actual: usize,
    },

    /// A measurement used as a divisor is zero, negative, or not finite
    #[error("Degenerate input: {field} must be a positive finite number, got {value}")]
    DegenerateInput {
        /// Name of the offending measurement
        field: &'static str,
        /// Value received
        value: f64,
    },
}

impl TrainingError {
    /// Create an "unknown activity type" error
    #[must_use]
    pub fn unknown_activity_type(code: impl Into<String>) -> Self {
        Self::UnknownActivityType { code: code.into() }
    }

    /// Create an "invalid measurement data" error
    #[must_use]
    pub const fn invalid_measurement_data(
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::InvalidMeasurementData {
            workout_type,
            expected,
            actual,
        }
    }

    /// Create a "degenerate input" error
    #[must_use]
    pub const fn degenerate_input(field: &'static str, value: f64) -> Self {
        Self::DegenerateInput { field, value }
    }
}

/// Reject divisors that would produce `NaN` or infinity
///
/// # Errors
///
/// Returns `TrainingError::DegenerateInput` if `value` is not a positive finite number
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, TrainingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::degenerate_input(field, value))
    }
}
