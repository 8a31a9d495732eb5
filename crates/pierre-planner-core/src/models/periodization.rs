// ABOUTME: Periodization snapshot consumed by the prescription calculator
// ABOUTME: Computed externally by the mesocycle state machine; opaque to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Modifiers for the current mesocycle phase and week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationModifiers {
    /// Added to every prescribed RPE
    #[serde(default)]
    pub rpe_offset: f64,
    /// Multiplies the working set count
    #[serde(default = "unit_multiplier")]
    pub set_multiplier: f64,
    /// Multiplies the top-set load for main-lift back-off sets
    #[serde(default = "unit_multiplier")]
    pub backoff_multiplier: f64,
    /// Deload week
    #[serde(default)]
    pub is_deload: bool,
}

const fn unit_multiplier() -> f64 {
    1.0
}

impl Default for PeriodizationModifiers {
    fn default() -> Self {
        Self {
            rpe_offset: 0.0,
            set_multiplier: 1.0,
            backoff_multiplier: 1.0,
            is_deload: false,
        }
    }
}

impl PeriodizationModifiers {
    /// Standard deload snapshot: fewer sets, lower RPE
    #[must_use]
    pub const fn deload() -> Self {
        Self {
            rpe_offset: -1.0,
            set_multiplier: 0.6,
            backoff_multiplier: 1.0,
            is_deload: true,
        }
    }
}
