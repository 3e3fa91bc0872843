// ABOUTME: Workout models for turning sensor packages into training reports
// ABOUTME: Re-exports the workout contract, the three variants, codes, and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training report value object
pub mod report;
/// Running workout
pub mod running;
/// Swimming workout
pub mod swimming;
/// Shared workout contract and the `Training` enum
pub mod training;
/// Sports walking workout
pub mod walking;
/// Activity-type codes
pub mod workout_type;

pub use report::TrainingReport;
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Training, TrainingBase, Workout};
pub use walking::SportsWalking;
pub use workout_type::WorkoutType;
