// ABOUTME: Core training model for Pierre activity sensor reports
// ABOUTME: Foundation crate with calorie coefficients, workout variants, and report values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Core
//!
//! Foundation crate turning raw activity-sensor packages into training metrics.
//! Everything here is pure arithmetic over immutable values; no I/O happens
//! in this crate.
//!
//! ## Modules
//!
//! - **constants**: Unit conversions and per-workout calorie coefficients
//! - **errors**: `TrainingError` raised while building workouts from sensor data
//! - **models**: `WorkoutType`, the `Workout` trait, the three workout variants,
//!   and the `TrainingReport` value they produce

/// Unit conversions and empirical calorie coefficients
pub mod constants;

/// Errors raised while constructing workouts
pub mod errors;

/// Workout variants, activity codes, and training reports
pub mod models;

pub use errors::TrainingError;
pub use models::{
    Running, SportsWalking, Swimming, Training, TrainingBase, TrainingReport, Workout,
    WorkoutType,
};
