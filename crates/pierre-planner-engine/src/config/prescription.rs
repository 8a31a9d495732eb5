// ABOUTME: Prescription policy, slot counts, and session timing configuration
// ABOUTME: Includes the revised fat-loss set policy switch as an explicit value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_planner_core::constants::{load, rpe, slots, timing};
use pierre_planner_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Accessory and warmup slot counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Accessories the slotter always tries to reach
    pub min_accessories: usize,
    /// Accessories the slotter never exceeds
    pub max_accessories: usize,
    /// Warmup items per session
    pub warmup_items: usize,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            min_accessories: slots::DEFAULT_MIN_ACCESSORIES,
            max_accessories: slots::DEFAULT_MAX_ACCESSORIES,
            warmup_items: slots::DEFAULT_WARMUP_ITEMS,
        }
    }
}

impl SlotConfig {
    /// Validate slot bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum exceeds the maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_accessories > self.max_accessories {
            return Err(ConfigError::InvalidRange(
                "min_accessories must not exceed max_accessories",
            ));
        }
        Ok(())
    }
}

/// Duration estimation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Rest between warmup sets
    pub warmup_rest_seconds: u32,
    /// Ramp-up sets counted before each main lift
    pub main_lift_warmup_sets: u32,
    /// Fallback work seconds per rep when the exercise has no estimate
    pub seconds_per_rep: u32,
    /// Lower clamp on fallback work seconds
    pub min_work_seconds: u32,
    /// Upper clamp on fallback work seconds
    pub max_work_seconds: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            warmup_rest_seconds: timing::DEFAULT_WARMUP_REST_SECONDS,
            main_lift_warmup_sets: timing::DEFAULT_MAIN_LIFT_WARMUP_SETS,
            seconds_per_rep: timing::DEFAULT_SECONDS_PER_REP,
            min_work_seconds: timing::DEFAULT_MIN_WORK_SECONDS,
            max_work_seconds: timing::DEFAULT_MAX_WORK_SECONDS,
        }
    }
}

impl TimingConfig {
    /// Validate the work-seconds clamp
    ///
    /// # Errors
    ///
    /// Returns an error if the clamp bounds are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_work_seconds > self.max_work_seconds {
            return Err(ConfigError::InvalidRange(
                "min_work_seconds must not exceed max_work_seconds",
            ));
        }
        Ok(())
    }
}

/// Set, RPE, and load policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionConfig {
    /// Highest RPE allowed while the deload flag is set
    pub deload_rpe_cap: f64,
    /// RPE drop from the top set to back-off sets
    pub backoff_rpe_drop: f64,
    /// Lower base set counts for fat-loss goals
    pub revised_fat_loss_set_policy: bool,
    /// Load increase when every set reached the top of the range
    pub load_increment_percent: f64,
    /// Load factor applied during deload
    pub deload_load_factor: f64,
}

impl Default for PrescriptionConfig {
    fn default() -> Self {
        Self {
            deload_rpe_cap: rpe::DEFAULT_DELOAD_CAP,
            backoff_rpe_drop: rpe::DEFAULT_BACKOFF_DROP,
            revised_fat_loss_set_policy: false,
            load_increment_percent: load::DEFAULT_INCREMENT_PERCENT,
            deload_load_factor: load::DEFAULT_DELOAD_FACTOR,
        }
    }
}

impl PrescriptionConfig {
    /// Validate RPE and load parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the deload cap is outside the RPE scale or load
    /// factors are not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(rpe::FLOOR..=rpe::CEILING).contains(&self.deload_rpe_cap) {
            return Err(ConfigError::ValueOutOfRange(
                "deload_rpe_cap must be within the RPE scale",
            ));
        }
        if !(0.0..=2.0).contains(&self.backoff_rpe_drop) {
            return Err(ConfigError::ValueOutOfRange("backoff_rpe_drop must be 0-2"));
        }
        if !(self.load_increment_percent >= 0.0 && self.load_increment_percent <= 20.0) {
            return Err(ConfigError::ValueOutOfRange(
                "load_increment_percent must be 0-20",
            ));
        }
        if !(self.deload_load_factor > 0.0 && self.deload_load_factor <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "deload_load_factor must be in (0, 1]",
            ));
        }
        Ok(())
    }
}
