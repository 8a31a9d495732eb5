// ABOUTME: Session generation error types surfaced to planner callers
// ABOUTME: Only genuinely unusable inputs become errors; thin pools degrade gracefully instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planner Error Types
//!
//! The engine prefers degraded plans over failures. These variants cover the
//! few inputs it cannot work with at all.

use super::{AppError, ConfigError, ErrorCode};
use crate::models::DayTag;
use thiserror::Error;

/// Errors returned by session generation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// The catalog passed to the engine had no entries
    #[error("exercise catalog is empty")]
    EmptyCatalog,

    /// Nothing survived filtering and every fallback for this day
    #[error("no eligible exercises for {day_tag} day after all fallbacks")]
    NoEligibleExercises {
        /// Day-tag the session was resolved to
        day_tag: DayTag,
    },

    /// A requested movement pattern name is not part of the vocabulary
    #[error("unknown movement pattern: {0}")]
    UnknownPattern(String),

    /// Request values outside their documented ranges
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Engine configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<PlannerError> for AppError {
    fn from(error: PlannerError) -> Self {
        if let PlannerError::Config(config) = error {
            return config.into();
        }
        let code = match &error {
            PlannerError::EmptyCatalog => ErrorCode::CatalogEmpty,
            PlannerError::NoEligibleExercises { .. } => ErrorCode::NoEligibleExercises,
            PlannerError::UnknownPattern(_) | PlannerError::InvalidInput(_) => {
                ErrorCode::InvalidInput
            }
            PlannerError::Config(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string())
    }
}
