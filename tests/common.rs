// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and the reference sensor packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `pierre_training_report`

use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Reference swimming package: strokes, hours, kg, pool length (m), laps
pub const SWIMMING_PACKAGE: [f64; 5] = [720.0, 1.0, 80.0, 25.0, 40.0];
/// Reference running package: steps, hours, kg
pub const RUNNING_PACKAGE: [f64; 3] = [15000.0, 1.0, 75.0];
/// Reference walking package: steps, hours, kg, height (cm)
pub const WALKING_PACKAGE: [f64; 4] = [9000.0, 1.0, 75.0, 180.0];

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
