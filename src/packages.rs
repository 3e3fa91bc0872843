// ABOUTME: Command-line sensor packages in CODE:v1,v2,... form and the reference set
// ABOUTME: Parsing splits and reads numbers only; code and arity are left to the dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sensor Packages
//!
//! A package on the command line is written `CODE:v1,v2,...`. Every slot
//! between commas must hold a number, so a package always reaches the
//! dispatcher with exactly as many measurements as were typed.

use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

/// Packages rendered when none are given
pub const REFERENCE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Malformed `CODE:v1,v2,...` text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageParseError {
    /// No `:` between the code and the measurements
    #[error("expected CODE:v1,v2,... but got '{raw}'")]
    MissingSeparator {
        /// Text as given
        raw: String,
    },

    /// A slot between commas is blank
    #[error("empty measurement at position {position} in '{raw}'")]
    EmptyMeasurement {
        /// Text as given
        raw: String,
        /// 1-based slot index
        position: usize,
    },

    /// A slot does not hold a number
    #[error("invalid measurement '{value}': {source}")]
    InvalidMeasurement {
        /// Offending slot, trimmed
        value: String,
        /// Float parse failure
        #[source]
        source: ParseFloatError,
    },
}

/// One sensor package given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPackage {
    /// Activity-type code as typed
    pub code: String,
    /// Measurements in the order the workout type lists them
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Borrow as the `(code, data)` pair the pipeline consumes
    #[must_use]
    pub fn as_pair(&self) -> (&str, &[f64]) {
        (self.code.as_str(), self.data.as_slice())
    }
}

impl FromStr for SensorPackage {
    type Err = PackageParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (code, values) =
            raw.split_once(':')
                .ok_or_else(|| PackageParseError::MissingSeparator {
                    raw: raw.to_owned(),
                })?;

        let data = values
            .split(',')
            .enumerate()
            .map(|(index, value)| {
                let value = value.trim();
                if value.is_empty() {
                    return Err(PackageParseError::EmptyMeasurement {
                        raw: raw.to_owned(),
                        position: index + 1,
                    });
                }
                value
                    .parse::<f64>()
                    .map_err(|source| PackageParseError::InvalidMeasurement {
                        value: value.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            code: code.trim().to_owned(),
            data,
        })
    }
}
