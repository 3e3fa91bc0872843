// ABOUTME: Tests for command-line package parsing and batch rendering
// ABOUTME: Covers malformed packages, the reference fallback, and the all-failed decision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_training_report::{
    formatters::OutputFormat,
    packages::{PackageParseError, SensorPackage},
    pipeline::render_batch,
};

mod common;

fn parse(raw: &str) -> Result<SensorPackage, PackageParseError> {
    raw.parse()
}

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn test_package_parses_code_and_measurements() {
    let package = parse("RUN:15000,1,75").unwrap();

    assert_eq!(package.code, "RUN");
    assert_eq!(package.data, [15000.0, 1.0, 75.0]);
}

#[test]
fn test_package_without_separator_is_rejected() {
    let error = parse("RUN15000").unwrap_err();

    assert_eq!(
        error,
        PackageParseError::MissingSeparator {
            raw: "RUN15000".to_owned()
        }
    );
    assert!(error.to_string().contains("CODE:v1,v2,..."));
}

#[test]
fn test_non_numeric_measurement_is_rejected() {
    let error = parse("RUN:1,x,3").unwrap_err();

    assert!(matches!(
        &error,
        PackageParseError::InvalidMeasurement { value, .. } if value == "x"
    ));
}

#[test]
fn test_empty_slot_is_rejected() {
    // Four slots typed, one blank: never silently shortened to three
    let error = parse("RUN:15000,,1,75").unwrap_err();

    assert_eq!(
        error,
        PackageParseError::EmptyMeasurement {
            raw: "RUN:15000,,1,75".to_owned(),
            position: 2
        }
    );
    assert!(parse("RUN:").is_err());
}

#[test]
fn test_unknown_code_is_left_to_the_dispatcher() {
    let package = parse("XYZ:1,2,3").unwrap();
    assert_eq!(package.code, "XYZ");
}

// ============================================================================
// BATCHES
// ============================================================================

#[test]
fn test_no_packages_renders_reference_set() {
    common::init_test_logging();

    let outcome = render_batch(&[], OutputFormat::Text);

    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.lines.len(), 3);
    assert!(outcome.lines[0].ends_with("Потрачено ккал: 336.000."));
    assert!(outcome.lines[1].ends_with("Потрачено ккал: 699.750."));
    assert!(outcome.lines[2].ends_with("Потрачено ккал: 157.500."));
    assert!(!outcome.all_failed());
}

#[test]
fn test_batch_with_some_failures_is_not_a_total_failure() {
    common::init_test_logging();

    let packages = [parse("RUN:15000,1,75").unwrap(), parse("XYZ:1,2,3").unwrap()];
    let outcome = render_batch(&packages, OutputFormat::Text);

    assert_eq!(outcome.total, 2);
    assert_eq!(outcome.lines.len(), 1);
    assert!(outcome.lines[0].contains("Running"));
    assert!(!outcome.all_failed());
}

#[test]
fn test_batch_where_every_package_fails() {
    common::init_test_logging();

    let packages = [
        parse("XYZ:1,2,3").unwrap(),
        parse("RUN:15000,1").unwrap(),
        parse("WLK:9000,1,75,0").unwrap(),
    ];
    let outcome = render_batch(&packages, OutputFormat::Json);

    assert_eq!(outcome.total, 3);
    assert!(outcome.lines.is_empty());
    assert!(outcome.all_failed());
}
