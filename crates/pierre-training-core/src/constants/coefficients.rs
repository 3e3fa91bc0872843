// ABOUTME: Empirical calorie coefficients for running, walking, and swimming
// ABOUTME: Each submodule is used only by the matching workout's calorie formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Running: `(18 * speed - 20) * weight / 1000 * minutes`
pub mod running {
    /// Speed multiplier
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Speed offset subtracted after scaling
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking: `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * minutes`
pub mod walking {
    /// Weight multiplier for the base term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight multiplier for the speed/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// Exponent applied to mean speed
    pub const SPEED_EXPONENT: i32 = 2;
}

/// Swimming: `(speed + 1.1) * 2 * weight`
pub mod swimming {
    /// Speed offset
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
