// ABOUTME: Workout plan output model with warmup, main lifts, and accessories
// ABOUTME: Each exercise carries its ordered set prescriptions and the metadata timing needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::{ExerciseCatalogEntry, RepRange};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The single label resolved for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayTag {
    /// Push day
    Push,
    /// Pull day
    Pull,
    /// Leg day
    Legs,
    /// Upper-body day
    Upper,
    /// Lower-body day
    Lower,
    /// Full-body day
    FullBody,
}

impl DayTag {
    /// Canonical snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Legs => "legs",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::FullBody => "full_body",
        }
    }

    /// Whether the session is lower-body dominant
    #[must_use]
    pub const fn is_leg_day(&self) -> bool {
        matches!(self, Self::Legs | Self::Lower)
    }
}

impl fmt::Display for DayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an exercise sits in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseRole {
    /// Mobility/prehab warmup item
    Warmup,
    /// Primary compound lift
    MainLift,
    /// Secondary volume work
    Accessory,
}

/// Kind of prescribed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    /// Warmup-list set
    Warmup,
    /// Heaviest main-lift set
    Top,
    /// Main-lift set following the top set
    BackOff,
    /// Accessory set, or any main-lift set during a deload
    Working,
}

/// One prescribed set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedSet {
    /// 1-based position within the exercise
    pub set_number: u32,
    /// Set kind
    pub kind: SetKind,
    /// Target reps
    pub target_reps: u32,
    /// Rep range for double progression
    pub rep_range: Option<RepRange>,
    /// Target RPE
    pub target_rpe: f64,
    /// Rest after the set
    pub rest_seconds: u32,
    /// Suggested load
    pub target_load: Option<f64>,
}

/// An exercise placed in the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Catalog identifier
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Role in the session
    pub role: ExerciseRole,
    /// Superset group shared with exactly one partner
    pub superset_group: Option<u32>,
    /// Primary movers
    pub primary_muscles: Vec<String>,
    /// Secondary movers
    pub secondary_muscles: Vec<String>,
    /// Fatigue cost (1-5)
    pub fatigue_cost: u8,
    /// Stimulus-to-fatigue ratio (1-5)
    pub stimulus_fit: u8,
    /// Lengthened-position score (1-5)
    pub length_position: u8,
    /// Multi-joint exercise
    pub compound: bool,
    /// Measured seconds per working set
    pub seconds_per_set: Option<u32>,
    /// Ordered set prescriptions
    pub sets: Vec<PlannedSet>,
}

impl PlannedExercise {
    /// Start a planned exercise from its catalog entry, with no sets yet
    #[must_use]
    pub fn from_catalog(entry: &ExerciseCatalogEntry, role: ExerciseRole) -> Self {
        Self {
            exercise_id: entry.id.clone(),
            name: entry.name.clone(),
            role,
            superset_group: None,
            primary_muscles: entry.primary_muscles.clone(),
            secondary_muscles: entry.secondary_muscles.clone(),
            fatigue_cost: entry.fatigue_cost,
            stimulus_fit: entry.stimulus_fit,
            length_position: entry.length_position,
            compound: entry.compound,
            seconds_per_set: entry.seconds_per_set,
            sets: Vec::new(),
        }
    }

    /// Whether the exercise is a main lift
    #[must_use]
    pub fn is_main_lift(&self) -> bool {
        self.role == ExerciseRole::MainLift
    }

    /// Longest rest prescribed for any set
    #[must_use]
    pub fn standalone_rest_seconds(&self) -> u32 {
        self.sets.iter().map(|set| set.rest_seconds).max().unwrap_or(0)
    }
}

/// The generated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Identifier derived from the generation seed
    pub plan_id: Uuid,
    /// Seed the plan was generated with
    pub seed: u64,
    /// Resolved day-tag
    pub day_tag: DayTag,
    /// Warmup items
    pub warmup: Vec<PlannedExercise>,
    /// Main lifts
    pub main_lifts: Vec<PlannedExercise>,
    /// Accessories
    pub accessories: Vec<PlannedExercise>,
    /// Estimated session length
    pub estimated_minutes: u32,
    /// Free-text notes and warnings
    pub notes: Vec<String>,
}

impl WorkoutPlan {
    /// Every planned exercise in session order
    pub fn exercises(&self) -> impl Iterator<Item = &PlannedExercise> {
        self.warmup
            .iter()
            .chain(self.main_lifts.iter())
            .chain(self.accessories.iter())
    }
}
