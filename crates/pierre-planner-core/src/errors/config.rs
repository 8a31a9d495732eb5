// ABOUTME: Configuration error types for planner engine validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and weight problems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Bounds are inverted or otherwise inconsistent (e.g., min above max)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights are negative or non-finite
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::InvalidRange(_) | ConfigError::Parse(_) | ConfigError::InvalidWeights(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string())
    }
}
