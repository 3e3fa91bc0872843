// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions and per-workout calorie coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data, no behavior. Each workout variant owns its own coefficient
//! module so that no formula can accidentally borrow another one's numbers.

/// Empirical calorie coefficients per workout variant
pub mod coefficients;

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const M_IN_KM: f64 = 1000.0;
    /// Minutes in one hour
    pub const MIN_IN_H: f64 = 60.0;
}

/// Distance covered by one sensor unit (a step or a stroke)
pub mod step_length {
    /// Default step length for running and walking (meters)
    pub const DEFAULT_M: f64 = 0.65;
    /// Stroke length for swimming (meters)
    pub const SWIMMING_M: f64 = 1.38;
}
