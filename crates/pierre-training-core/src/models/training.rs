// ABOUTME: Shared workout contract and the closed set of workout variants
// ABOUTME: Distance/speed bookkeeping lives here, calorie formulas live in each variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

use super::{Running, SportsWalking, Swimming, TrainingReport, WorkoutType};
use crate::constants::{step_length, units::M_IN_KM};
use crate::errors::{ensure_positive, TrainingError};

/// Measurements every workout carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    action: f64,
    duration_hours: f64,
    weight_kg: f64,
}

impl TrainingBase {
    /// Create the shared workout state
    ///
    /// `action` is the raw unit count reported by the sensor: steps for
    /// running and walking, strokes for swimming.
    ///
    /// Only the divisor is checked. `action` and `weight_kg` are taken as
    /// given, so a NaN or infinite value there flows through to the report
    /// (e.g. `Дистанция: NaN км`).
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::DegenerateInput` if `duration_hours` is not a
    /// positive finite number, since every speed formula divides by it
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            action,
            duration_hours: ensure_positive("duration_hours", duration_hours)?,
            weight_kg,
        })
    }

    /// Raw unit count (steps or strokes)
    #[must_use]
    pub const fn action(&self) -> f64 {
        self.action
    }

    /// Session length in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Participant weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Metrics every workout can compute
///
/// `spent_calories` has no default: each variant must bring its own
/// formula. Distance and speed default to the step-count model and may be
/// overridden.
pub trait Workout {
    /// Shared measurements
    fn base(&self) -> &TrainingBase;

    /// Which variant this is
    fn workout_type(&self) -> WorkoutType;

    /// Spent calories in kcal
    fn spent_calories(&self) -> f64;

    /// Meters covered by one sensor unit
    fn len_step_m(&self) -> f64 {
        step_length::DEFAULT_M
    }

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        self.base().action() * self.len_step_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours()
    }

    /// Collect every metric into a report
    fn show_training_info(&self) -> TrainingReport {
        let workout_type = self.workout_type();
        let report = TrainingReport::new(
            workout_type.display_name(),
            self.base().duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        );
        debug!(
            workout = workout_type.code(),
            distance_km = report.distance(),
            calories = report.calories(),
            "Training report built"
        );
        report
    }
}

/// One of the supported workouts
#[derive(Debug, Clone, PartialEq)]
pub enum Training {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    Swimming(Swimming),
}

impl Training {
    fn as_workout(&self) -> &dyn Workout {
        match self {
            Self::Running(running) => running,
            Self::SportsWalking(walking) => walking,
            Self::Swimming(swimming) => swimming,
        }
    }
}

impl Workout for Training {
    fn base(&self) -> &TrainingBase {
        self.as_workout().base()
    }

    fn workout_type(&self) -> WorkoutType {
        self.as_workout().workout_type()
    }

    fn spent_calories(&self) -> f64 {
        self.as_workout().spent_calories()
    }

    fn len_step_m(&self) -> f64 {
        self.as_workout().len_step_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_workout().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_workout().mean_speed_kmh()
    }
}

impl From<Running> for Training {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for Training {
    fn from(walking: SportsWalking) -> Self {
        Self::SportsWalking(walking)
    }
}

impl From<Swimming> for Training {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_is_rejected() {
        assert_eq!(
            TrainingBase::new(1000.0, 0.0, 70.0),
            Err(TrainingError::degenerate_input("duration_hours", 0.0))
        );
    }

    #[test]
    fn test_non_finite_duration_is_rejected() {
        assert!(TrainingBase::new(1000.0, f64::NAN, 70.0).is_err());
        assert!(TrainingBase::new(1000.0, f64::INFINITY, 70.0).is_err());
        assert!(TrainingBase::new(1000.0, -1.0, 70.0).is_err());
    }

    #[test]
    fn test_non_finite_action_and_weight_pass_through() {
        let base = TrainingBase::new(f64::NAN, 1.0, f64::INFINITY).unwrap();
        assert!(base.action().is_nan());
        assert!(base.weight_kg().is_infinite());

        let running = Running::new(f64::NAN, 1.0, 75.0).unwrap();
        assert!(running.show_training_info().distance().is_nan());
    }

    #[test]
    fn test_enum_delegates_speed_override() {
        let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
        let training = Training::from(swimming.clone());

        assert!((training.mean_speed_kmh() - swimming.mean_speed_kmh()).abs() < 1e-12);
        assert!((training.len_step_m() - step_length::SWIMMING_M).abs() < 1e-12);
        assert_eq!(training.show_training_info(), swimming.show_training_info());
    }
}
