// ABOUTME: Activity-type code enumeration for sensor packages
// ABOUTME: Maps SWM/RUN/WLK codes to workout variants with their measurement layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrainingError;

/// Workout variant selected by a sensor package's activity-type code
///
/// The set is closed: every code a sensor can send maps to exactly one
/// variant, and unknown codes are rejected instead of falling back to a
/// default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    /// Pool swimming, code `SWM`
    #[serde(rename = "SWM")]
    Swimming,
    /// Running, code `RUN`
    #[serde(rename = "RUN")]
    Running,
    /// Sports walking, code `WLK`
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutType {
    /// Every recognized workout type, in code-table order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Activity-type code sent by the sensor
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Name printed in the training report
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Measurement names in the order the sensor sends them
    #[must_use]
    pub const fn measurement_fields(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &[
                "action",
                "duration_hours",
                "weight_kg",
                "length_pool_m",
                "count_pool",
            ],
            Self::Running => &["action", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action", "duration_hours", "weight_kg", "height_cm"],
        }
    }

    /// Number of measurements a package of this type must carry
    #[must_use]
    pub const fn measurement_count(self) -> usize {
        self.measurement_fields().len()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|workout_type| workout_type.code() == s)
            .ok_or_else(|| TrainingError::unknown_activity_type(s))
    }
}
