// ABOUTME: Pool swimming workout with pool-geometry speed and stroke-based distance
// ABOUTME: Calories depend on speed and weight only, with no per-minute scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{TrainingBase, Workout, WorkoutType};
use crate::constants::coefficients::swimming::{SPEED_SHIFT, WEIGHT_MULTIPLIER};
use crate::constants::step_length;
use crate::constants::units::M_IN_KM;
use crate::errors::TrainingError;

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool_m: f64,
    count_pool: f64,
}

impl Swimming {
    /// Create a swimming workout from strokes, hours, kilograms, pool length, and laps
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::DegenerateInput` if `duration_hours` is not positive
    pub fn new(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            base: TrainingBase::new(action, duration_hours, weight_kg)?,
            length_pool_m,
            count_pool,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    /// Completed laps
    #[must_use]
    pub const fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Workout for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn len_step_m(&self) -> f64 {
        step_length::SWIMMING_M
    }

    // Speed comes from pool geometry, not from the stroke count.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool_m * self.count_pool / M_IN_KM / self.base.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.base.weight_kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swimming_reference_package() {
        let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();

        assert!((swimming.distance_km() - 0.9936).abs() < 1e-9);
        assert!((swimming.mean_speed_kmh() - 1.0).abs() < 1e-9);
        assert!((swimming.spent_calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_ignores_stroke_count() {
        let few_strokes = Swimming::new(10.0, 0.5, 70.0, 50.0, 20.0).unwrap();
        let many_strokes = Swimming::new(5000.0, 0.5, 70.0, 50.0, 20.0).unwrap();

        assert!((few_strokes.mean_speed_kmh() - 2.0).abs() < 1e-9);
        assert!((few_strokes.mean_speed_kmh() - many_strokes.mean_speed_kmh()).abs() < 1e-12);
        assert!(few_strokes.distance_km() < many_strokes.distance_km());
    }

    #[test]
    fn test_zero_laps_is_allowed() {
        let swimming = Swimming::new(0.0, 1.0, 80.0, 25.0, 0.0).unwrap();
        assert!(swimming.mean_speed_kmh().abs() < 1e-12);
        // (0 + 1.1) * 2 * 80
        assert!((swimming.spent_calories() - 176.0).abs() < 1e-9);
    }
}
