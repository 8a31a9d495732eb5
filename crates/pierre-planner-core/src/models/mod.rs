// ABOUTME: Core data models for the session planner
// ABOUTME: Catalog entries, athlete context, history, periodization input, and plan output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every input type is an immutable snapshot for the duration of one generation
//! call. Collections use ordered maps and sets so serialized output is stable.

/// Athlete context: constraints, fatigue, goals, and preferences
pub mod athlete;
/// Exercise catalog vocabulary and entries
pub mod exercise;
/// Completed and attempted past sessions
pub mod history;
/// Periodization snapshot supplied by the mesocycle state machine
pub mod periodization;
/// Generated workout plan
pub mod plan;

pub use athlete::{
    Constraints, FatigueState, Goals, Injury, PrimaryGoal, SecondaryGoal, SplitType, TrainingAge,
    UserPreferences,
};
pub use exercise::{
    BodyPart, Equipment, ExerciseCatalogEntry, JointStress, MovementPattern, RepRange, SplitTag,
};
pub use history::{HistoryExercise, HistorySet, WorkoutHistoryEntry};
pub use periodization::PeriodizationModifiers;
pub use plan::{DayTag, ExerciseRole, PlannedExercise, PlannedSet, SetKind, WorkoutPlan};

/// Normalize a free-text name for comparison
///
/// Lowercases, treats `_` and `-` as spaces, and collapses runs of whitespace so
/// `"  Romanian_Deadlift "` and `"romanian deadlift"` compare equal.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
