// ABOUTME: Running workout with a linear-in-speed calorie model
// ABOUTME: Uses the default step-count distance and speed formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{TrainingBase, Workout, WorkoutType};
use crate::constants::coefficients::running::{SPEED_MULTIPLIER, SPEED_SHIFT};
use crate::constants::units::{MIN_IN_H, M_IN_KM};
use crate::errors::TrainingError;

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    /// Create a running workout from steps, hours, and kilograms
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::DegenerateInput` if `duration_hours` is not positive
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            base: TrainingBase::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Workout for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn spent_calories(&self) -> f64 {
        SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), -SPEED_SHIFT) * self.base.weight_kg()
            / M_IN_KM
            * self.base.duration_hours()
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_metrics() {
        let running = Running::new(15000.0, 1.0, 75.0).unwrap();

        assert!((running.distance_km() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed_kmh() - 9.75).abs() < 1e-9);
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((running.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_running_calories_scale_with_duration() {
        // Same speed over twice the time burns twice the calories
        let short = Running::new(10000.0, 1.0, 70.0).unwrap();
        let long = Running::new(20000.0, 2.0, 70.0).unwrap();

        assert!((long.spent_calories() / short.spent_calories() - 2.0).abs() < 1e-9);
    }
}
