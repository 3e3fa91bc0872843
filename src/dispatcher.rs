// ABOUTME: Routes a sensor package to the matching workout variant and constructs it
// ABOUTME: Rejects unknown activity codes and measurement lists of the wrong length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sensor Package Dispatcher
//!
//! A sensor package is an activity-type code plus a flat list of numbers.
//! Each workout type names its measurements in a fixed order (see
//! [`WorkoutType::measurement_fields`]); the dispatcher picks the variant and
//! pulls out exactly those fields. No range checks beyond the workout
//! constructors' divisor checks happen here.

use pierre_training_core::{
    Running, SportsWalking, Swimming, Training, TrainingError, WorkoutType,
};
use tracing::debug;

/// Build a workout from an activity-type code and its measurements
///
/// # Errors
///
/// - `TrainingError::UnknownActivityType` if `code` is not `SWM`, `RUN`, or `WLK`
/// - `TrainingError::InvalidMeasurementData` if `data` has the wrong length
/// - `TrainingError::DegenerateInput` if a divisor measurement is not positive
pub fn read_package(code: &str, data: &[f64]) -> Result<Training, TrainingError> {
    let workout_type: WorkoutType = code.parse()?;
    debug!(
        workout = workout_type.code(),
        measurements = data.len(),
        "Dispatching sensor package"
    );
    build_workout(workout_type, data)
}

/// Build a workout of a known type from its measurements
///
/// # Errors
///
/// - `TrainingError::InvalidMeasurementData` if `data` has the wrong length
/// - `TrainingError::DegenerateInput` if a divisor measurement is not positive
pub fn build_workout(workout_type: WorkoutType, data: &[f64]) -> Result<Training, TrainingError> {
    let arity_error = || {
        TrainingError::invalid_measurement_data(
            workout_type,
            workout_type.measurement_count(),
            data.len(),
        )
    };

    let training: Training = match workout_type {
        WorkoutType::Swimming => {
            let &[action, duration_hours, weight_kg, length_pool_m, count_pool] = data else {
                return Err(arity_error());
            };
            Swimming::new(action, duration_hours, weight_kg, length_pool_m, count_pool)?.into()
        }
        WorkoutType::Running => {
            let &[action, duration_hours, weight_kg] = data else {
                return Err(arity_error());
            };
            Running::new(action, duration_hours, weight_kg)?.into()
        }
        WorkoutType::SportsWalking => {
            let &[action, duration_hours, weight_kg, height_cm] = data else {
                return Err(arity_error());
            };
            SportsWalking::new(action, duration_hours, weight_kg, height_cm)?.into()
        }
    };

    Ok(training)
}
