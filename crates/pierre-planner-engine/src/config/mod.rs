// ABOUTME: Engine configuration container with defaults, environment overrides, and validation
// ABOUTME: Holds tunable slot counts, retention weights, superset timing, and prescription policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Every empirically tuned constant the product team may want to adjust lives
//! here as a named value with a documented default.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export PLANNER_MAX_ACCESSORIES=4
//!    export PLANNER_SUPERSET_REST_MULTIPLIER=0.5
//!    export PLANNER_REVISED_FAT_LOSS_SETS=true
//!    ```
//!
//! 2. Default values (if env vars not set)
//!
//! # Examples
//!
//! ```rust
//! use pierre_planner_engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.slots.min_accessories, 3);
//! assert!(config.validate().is_ok());
//! ```

/// Prescription policy, slot counts, and timing estimates
pub mod prescription;
/// Accessory retention scoring and superset timing
pub mod scoring;

pub use prescription::{PrescriptionConfig, SlotConfig, TimingConfig};
pub use scoring::{RetentionWeights, SupersetTiming};

use pierre_planner_core::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main engine configuration container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Accessory and warmup slot counts
    #[serde(default)]
    pub slots: SlotConfig,
    /// Accessory retention score weights
    #[serde(default)]
    pub retention: RetentionWeights,
    /// Superset shared-rest timing
    #[serde(default)]
    pub superset: SupersetTiming,
    /// Session duration estimation
    #[serde(default)]
    pub timing: TimingConfig,
    /// Set/RPE/load policy
    #[serde(default)]
    pub prescription: PrescriptionConfig,
}

impl EngineConfig {
    /// Load configuration from `PLANNER_*` environment variables on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            slots: SlotConfig {
                min_accessories: env_or("PLANNER_MIN_ACCESSORIES", defaults.slots.min_accessories)?,
                max_accessories: env_or("PLANNER_MAX_ACCESSORIES", defaults.slots.max_accessories)?,
                warmup_items: env_or("PLANNER_WARMUP_ITEMS", defaults.slots.warmup_items)?,
            },
            retention: RetentionWeights {
                coverage: env_or("PLANNER_RETENTION_COVERAGE", defaults.retention.coverage)?,
                sfr: env_or("PLANNER_RETENTION_SFR", defaults.retention.sfr)?,
                length_position: env_or(
                    "PLANNER_RETENTION_LENGTH_POSITION",
                    defaults.retention.length_position,
                )?,
                redundancy: env_or("PLANNER_RETENTION_REDUNDANCY", defaults.retention.redundancy)?,
                fatigue: env_or("PLANNER_RETENTION_FATIGUE", defaults.retention.fatigue)?,
                secondary_muscle_weight: env_or(
                    "PLANNER_RETENTION_SECONDARY_WEIGHT",
                    defaults.retention.secondary_muscle_weight,
                )?,
            },
            superset: SupersetTiming {
                rest_multiplier: env_or(
                    "PLANNER_SUPERSET_REST_MULTIPLIER",
                    defaults.superset.rest_multiplier,
                )?,
                min_shared_rest_seconds: env_or(
                    "PLANNER_SUPERSET_MIN_REST_SECONDS",
                    defaults.superset.min_shared_rest_seconds,
                )?,
            },
            timing: TimingConfig {
                warmup_rest_seconds: env_or(
                    "PLANNER_WARMUP_REST_SECONDS",
                    defaults.timing.warmup_rest_seconds,
                )?,
                main_lift_warmup_sets: env_or(
                    "PLANNER_MAIN_LIFT_WARMUP_SETS",
                    defaults.timing.main_lift_warmup_sets,
                )?,
                ..defaults.timing
            },
            prescription: PrescriptionConfig {
                deload_rpe_cap: env_or("PLANNER_DELOAD_RPE_CAP", defaults.prescription.deload_rpe_cap)?,
                revised_fat_loss_set_policy: env_or(
                    "PLANNER_REVISED_FAT_LOSS_SETS",
                    defaults.prescription.revised_fat_loss_set_policy,
                )?,
                ..defaults.prescription
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if bounds are inverted, weights are negative or
    /// non-finite, or multipliers fall outside their usable ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slots.validate()?;
        self.retention.validate()?;
        self.superset.validate()?;
        self.timing.validate()?;
        self.prescription.validate()
    }
}

/// Read an environment variable, falling back to `default` when unset
fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::Parse(format!("{key}: {}", e.to_string()))),
        Err(_) => Ok(default),
    }
}
