// ABOUTME: Sports walking workout with a height-dependent calorie model
// ABOUTME: The speed/height term is floor-divided, matching the calibrated formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{TrainingBase, Workout, WorkoutType};
use crate::constants::coefficients::walking::{
    SPEED_EXPONENT, SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER,
};
use crate::constants::units::MIN_IN_H;
use crate::errors::{ensure_positive, TrainingError};

/// Sports walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking workout from steps, hours, kilograms, and centimeters
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::DegenerateInput` if `duration_hours` or
    /// `height_cm` is not positive
    pub fn new(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            base: TrainingBase::new(action, duration_hours, weight_kg)?,
            height_cm: ensure_positive("height_cm", height_cm)?,
        })
    }

    /// Participant height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// `speed^2 // height`: floor division, not a plain quotient
fn speed_height_term(mean_speed_kmh: f64, height_cm: f64) -> f64 {
    mean_speed_kmh.powi(SPEED_EXPONENT).div_euclid(height_cm)
}

impl Workout for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.base.weight_kg();
        let speed_term = speed_height_term(self.mean_speed_kmh(), self.height_cm);

        WEIGHT_MULTIPLIER.mul_add(weight, speed_term * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.base.duration_hours()
            * MIN_IN_H
    }
}
