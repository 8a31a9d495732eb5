// ABOUTME: Accessory retention score weights and superset shared-rest timing
// ABOUTME: Empirically tuned values kept as named, overridable configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_planner_core::constants::{retention, timing};
use pierre_planner_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Weights of the accessory retention score (higher score = keep)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionWeights {
    /// Uncovered muscle coverage
    pub coverage: f64,
    /// Normalized stimulus-to-fatigue ratio
    pub sfr: f64,
    /// Normalized lengthened-position score
    pub length_position: f64,
    /// Duplicate primary-muscle coverage penalty
    pub redundancy: f64,
    /// Fatigue cost above the scale midpoint penalty
    pub fatigue: f64,
    /// Contribution of a secondary muscle to coverage
    pub secondary_muscle_weight: f64,
}

impl Default for RetentionWeights {
    fn default() -> Self {
        Self {
            coverage: retention::COVERAGE_WEIGHT,
            sfr: retention::SFR_WEIGHT,
            length_position: retention::LENGTH_POSITION_WEIGHT,
            redundancy: retention::REDUNDANCY_WEIGHT,
            fatigue: retention::FATIGUE_WEIGHT,
            secondary_muscle_weight: retention::SECONDARY_MUSCLE_WEIGHT,
        }
    }
}

impl RetentionWeights {
    /// Validate that every weight is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.coverage,
            self.sfr,
            self.length_position,
            self.redundancy,
            self.fatigue,
            self.secondary_muscle_weight,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "retention weights must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Shared-rest timing for superset pairs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupersetTiming {
    /// Fraction of the longer standalone rest taken once per round
    pub rest_multiplier: f64,
    /// Floor on the shared rest
    pub min_shared_rest_seconds: u32,
}

impl Default for SupersetTiming {
    fn default() -> Self {
        Self {
            rest_multiplier: timing::DEFAULT_SUPERSET_REST_MULTIPLIER,
            min_shared_rest_seconds: timing::DEFAULT_SUPERSET_MIN_REST_SECONDS,
        }
    }
}

impl SupersetTiming {
    /// Shared rest per round for two members with the given standalone rests
    #[must_use]
    pub fn shared_rest_seconds(&self, rest_a: u32, rest_b: u32) -> u32 {
        let longest = f64::from(rest_a.max(rest_b));
        // Safe: multiplier is validated to (0, 1], so the product stays within u32
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let compressed = (self.rest_multiplier * longest).round() as u32;
        compressed.max(self.min_shared_rest_seconds)
    }

    /// Validate the multiplier range
    ///
    /// # Errors
    ///
    /// Returns an error if the multiplier is outside (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rest_multiplier > 0.0 && self.rest_multiplier <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "superset rest multiplier must be in (0, 1]",
            ));
        }
        Ok(())
    }
}
