// ABOUTME: Athlete context models: equipment constraints, fatigue, goals, and preferences
// ABOUTME: Plain structured records supplied by the user/context loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::{BodyPart, Equipment, ExerciseCatalogEntry};
use super::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Weekly split structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    /// Push / pull / legs rotation
    #[default]
    Strict3Day,
    /// Upper / lower rotation
    UpperLower,
    /// Every session trains the whole body
    FullBody,
    /// Caller-defined pattern sets
    Custom,
}

/// Equipment and split constraints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Constraints {
    /// Equipment the athlete has access to
    pub available_equipment: BTreeSet<Equipment>,
    /// Split structure
    #[serde(default)]
    pub split_type: SplitType,
}

/// An injury reported by the athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    /// Affected body part
    pub body_part: BodyPart,
    /// Severity (0-3)
    pub severity: u8,
    /// Whether the injury still limits training
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

/// Current readiness and discomfort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatigueState {
    /// Self-reported readiness (1-5)
    pub readiness: u8,
    /// The previous planned session was missed
    #[serde(default)]
    pub missed_last_session: bool,
    /// Pain severity per body part (0-3)
    #[serde(default)]
    pub pain_flags: BTreeMap<BodyPart, u8>,
    /// Reported injuries
    #[serde(default)]
    pub injuries: Vec<Injury>,
}

impl Default for FatigueState {
    fn default() -> Self {
        Self {
            readiness: 3,
            missed_last_session: false,
            pain_flags: BTreeMap::new(),
            injuries: Vec::new(),
        }
    }
}

impl FatigueState {
    /// Pain severity for a body part (0 when not flagged)
    #[must_use]
    pub fn pain(&self, part: BodyPart) -> u8 {
        self.pain_flags.get(&part).copied().unwrap_or(0)
    }

    /// Highest severity among active injuries
    #[must_use]
    pub fn max_active_injury_severity(&self) -> u8 {
        self.injuries
            .iter()
            .filter(|injury| injury.active)
            .map(|injury| injury.severity)
            .max()
            .unwrap_or(0)
    }
}

/// Primary training objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    /// Muscle growth
    #[default]
    Hypertrophy,
    /// Maximal strength
    Strength,
    /// Body-fat reduction
    FatLoss,
    /// Athletic performance
    Athleticism,
    /// General health and fitness
    GeneralHealth,
}

/// Secondary training objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryGoal {
    /// Conditioning work
    Conditioning,
    /// Strength emphasis
    Strength,
    /// Injury prevention
    InjuryPrevention,
    /// No secondary goal
    #[default]
    None,
}

/// Training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingAge {
    /// Under a year of structured training
    Beginner,
    /// One to three years
    #[default]
    Intermediate,
    /// Three or more years
    Advanced,
}

/// Goals and experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Goals {
    /// Primary objective
    pub primary: PrimaryGoal,
    /// Secondary objective
    #[serde(default)]
    pub secondary: SecondaryGoal,
    /// Training experience
    #[serde(default)]
    pub training_age: TrainingAge,
}

/// Exercise preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Favorite exercise identifiers
    #[serde(default)]
    pub favorite_ids: BTreeSet<String>,
    /// Favorite exercise names
    #[serde(default)]
    pub favorite_names: Vec<String>,
    /// Avoided exercise identifiers
    #[serde(default)]
    pub avoided_ids: BTreeSet<String>,
    /// Avoided exercise names
    #[serde(default)]
    pub avoided_names: Vec<String>,
    /// Reps to RPE override table
    #[serde(default)]
    pub rpe_by_reps: Option<BTreeMap<u32, f64>>,
    /// Append core and conditioning work
    #[serde(default)]
    pub optional_conditioning: bool,
    /// Pair compatible accessories into supersets
    #[serde(default)]
    pub allow_supersets: bool,
}

impl UserPreferences {
    /// Whether the exercise matches a favorite id or name
    #[must_use]
    pub fn is_favorite(&self, exercise: &ExerciseCatalogEntry) -> bool {
        self.favorite_ids.contains(&exercise.id)
            || name_matches(&self.favorite_names, &exercise.name)
    }

    /// Whether the exercise matches an avoided id or name
    #[must_use]
    pub fn is_avoided(&self, exercise: &ExerciseCatalogEntry) -> bool {
        self.avoided_ids.contains(&exercise.id)
            || name_matches(&self.avoided_names, &exercise.name)
    }
}

fn name_matches(names: &[String], candidate: &str) -> bool {
    let candidate = normalize_name(candidate);
    names.iter().any(|name| normalize_name(name) == candidate)
}
