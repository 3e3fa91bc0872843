// ABOUTME: Training report value object produced by a completed workout
// ABOUTME: Carries name, duration, distance, speed, and calories and renders the report line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;

/// Computed metrics of one workout, ready for formatting
///
/// All numeric fields come from the same immutable workout, so they are
/// always consistent with each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    training_type: &'static str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl TrainingReport {
    /// Create a report from already computed metrics
    #[must_use]
    pub const fn new(
        training_type: &'static str,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Workout name shown in the report
    #[must_use]
    pub const fn training_type(&self) -> &'static str {
        self.training_type
    }

    /// Session length in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Spent calories in kcal
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Single-line report with every number rounded to three decimals
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_uses_fixed_template() {
        let report = TrainingReport::new("Running", 1.0, 9.75, 9.75, 699.75);
        assert_eq!(
            report.message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_message_rounds_each_field_independently() {
        let report = TrainingReport::new("Swimming", 0.5, 0.993_6, 2.000_4, 12.345_67);
        let message = report.message();
        assert!(message.contains("Длительность: 0.500 ч."));
        assert!(message.contains("Дистанция: 0.994 км"));
        assert!(message.contains("Ср. скорость: 2.000 км/ч"));
        assert!(message.ends_with("Потрачено ккал: 12.346."));
    }
}
