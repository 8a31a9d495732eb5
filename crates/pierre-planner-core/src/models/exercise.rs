// ABOUTME: Exercise catalog vocabulary (patterns, split tags, equipment, body parts) and entries
// ABOUTME: Reference data supplied pre-validated by the catalog loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Movement-pattern tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Bench press, push-up, dips
    HorizontalPush,
    /// Overhead press, landmine press
    VerticalPush,
    /// Rows
    HorizontalPull,
    /// Pull-ups, pulldowns
    VerticalPull,
    /// Squat variations
    Squat,
    /// Hip hinge: deadlifts, RDLs, good mornings
    Hinge,
    /// Split squats, lunges, step-ups
    Lunge,
    /// Loaded carries
    Carry,
    /// Single-joint work
    Isolation,
    /// Trunk stability and flexion work
    Core,
    /// Conditioning intervals and finishers
    Conditioning,
    /// Mobility and prehab drills
    Mobility,
}

impl MovementPattern {
    /// Every pattern, in declaration order
    pub const ALL: [Self; 12] = [
        Self::HorizontalPush,
        Self::VerticalPush,
        Self::HorizontalPull,
        Self::VerticalPull,
        Self::Squat,
        Self::Hinge,
        Self::Lunge,
        Self::Carry,
        Self::Isolation,
        Self::Core,
        Self::Conditioning,
        Self::Mobility,
    ];

    /// Canonical snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HorizontalPush => "horizontal_push",
            Self::VerticalPush => "vertical_push",
            Self::HorizontalPull => "horizontal_pull",
            Self::VerticalPull => "vertical_pull",
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::Lunge => "lunge",
            Self::Carry => "carry",
            Self::Isolation => "isolation",
            Self::Core => "core",
            Self::Conditioning => "conditioning",
            Self::Mobility => "mobility",
        }
    }

    /// Parse a canonical snake-case name
    #[must_use]
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pattern| pattern.as_str() == name)
    }

    /// Whether this is a pushing pattern
    #[must_use]
    pub const fn is_push(&self) -> bool {
        matches!(self, Self::HorizontalPush | Self::VerticalPush)
    }

    /// Whether this is a pulling pattern
    #[must_use]
    pub const fn is_pull(&self) -> bool {
        matches!(self, Self::HorizontalPull | Self::VerticalPull)
    }

    /// Whether this is a lower-body pattern
    #[must_use]
    pub const fn is_lower_body(&self) -> bool {
        matches!(self, Self::Squat | Self::Hinge | Self::Lunge)
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split tags describing which session types an exercise belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitTag {
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
    /// Core work
    Core,
    /// Conditioning work
    Conditioning,
    /// Mobility drills
    Mobility,
    /// Prehab drills
    Prehab,
}

/// Joint stress classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointStress {
    /// Low joint stress
    Low,
    /// Medium joint stress
    Medium,
    /// High joint stress
    High,
}

/// Equipment vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Olympic barbell and plates
    Barbell,
    /// Dumbbells
    Dumbbell,
    /// Kettlebells
    Kettlebell,
    /// Cable stack
    Cable,
    /// Selectorized or plate-loaded machines
    Machine,
    /// No equipment
    Bodyweight,
    /// Resistance bands
    Bands,
    /// Pull-up bar
    PullUpBar,
    /// Flat/adjustable bench
    Bench,
    /// Trap/hex bar
    TrapBar,
    /// Sled
    Sled,
    /// Landmine attachment
    Landmine,
}

/// Body parts referenced by pain flags, injuries, and contraindications
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Neck
    Neck,
    /// Shoulder
    Shoulder,
    /// Elbow
    Elbow,
    /// Wrist
    Wrist,
    /// Lower back
    LowBack,
    /// Hip
    Hip,
    /// Knee
    Knee,
    /// Ankle
    Ankle,
}

/// Inclusive rep range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepRange {
    /// Lowest rep target
    pub min: u32,
    /// Highest rep target
    pub max: u32,
}

impl RepRange {
    /// Create a range, swapping bounds if given in the wrong order
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Distance between the bounds
    #[must_use]
    pub const fn span(&self) -> u32 {
        self.max - self.min
    }

    /// Whether `reps` lies within the range
    #[must_use]
    pub const fn contains(&self, reps: u32) -> bool {
        reps >= self.min && reps <= self.max
    }

    /// Whether `other` lies entirely inside this range
    #[must_use]
    pub const fn contains_range(&self, other: &Self) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    /// Overlap of two ranges, if any
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(Self { min, max })
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One exercise from the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCatalogEntry {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Movement patterns trained
    pub movement_patterns: BTreeSet<MovementPattern>,
    /// Session types this exercise belongs to
    pub split_tags: BTreeSet<SplitTag>,
    /// Joint stress classification
    pub joint_stress: JointStress,
    /// Equipment the exercise needs; empty means bodyweight
    #[serde(default)]
    pub equipment: BTreeSet<Equipment>,
    /// Primary movers
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    /// Secondary movers
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    /// Systemic fatigue cost (1-5)
    pub fatigue_cost: u8,
    /// Stimulus-to-fatigue ratio (1-5)
    pub stimulus_fit: u8,
    /// Lengthened-position loading score (1-5)
    pub length_position: u8,
    /// May anchor a session as a main lift
    #[serde(default)]
    pub main_lift_eligible: bool,
    /// Multi-joint exercise
    #[serde(default)]
    pub compound: bool,
    /// Rep range the exercise is suited to
    #[serde(default)]
    pub rep_range: Option<RepRange>,
    /// Measured seconds per working set
    #[serde(default)]
    pub seconds_per_set: Option<u32>,
    /// Per-muscle recovery window overrides in hours
    #[serde(default)]
    pub recovery_overrides: BTreeMap<String, f64>,
    /// Body parts for which this exercise is blocked
    #[serde(default)]
    pub contraindications: BTreeMap<BodyPart, bool>,
}

impl ExerciseCatalogEntry {
    /// Whether the exercise trains `pattern`
    #[must_use]
    pub fn has_pattern(&self, pattern: MovementPattern) -> bool {
        self.movement_patterns.contains(&pattern)
    }

    /// Whether the exercise trains any of `patterns`
    #[must_use]
    pub fn has_any_pattern(&self, patterns: &[MovementPattern]) -> bool {
        patterns.iter().any(|pattern| self.has_pattern(*pattern))
    }

    /// Whether the exercise carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: SplitTag) -> bool {
        self.split_tags.contains(&tag)
    }

    /// Tagged as both a push and a pull exercise (catalog data error)
    #[must_use]
    pub fn is_dual_push_pull(&self) -> bool {
        self.has_tag(SplitTag::Push) && self.has_tag(SplitTag::Pull)
    }

    /// Whether the contraindication map blocks `part`
    #[must_use]
    pub fn is_contraindicated(&self, part: BodyPart) -> bool {
        self.contraindications.get(&part).copied().unwrap_or(false)
    }

    /// Mobility or prehab drill suitable for the warmup list
    #[must_use]
    pub fn is_warmup_drill(&self) -> bool {
        self.has_tag(SplitTag::Mobility)
            || self.has_tag(SplitTag::Prehab)
            || self.has_pattern(MovementPattern::Mobility)
    }

    /// Core-tagged exercise
    #[must_use]
    pub fn is_core(&self) -> bool {
        self.has_tag(SplitTag::Core) || self.has_pattern(MovementPattern::Core)
    }

    /// Conditioning-tagged exercise
    #[must_use]
    pub fn is_conditioning(&self) -> bool {
        self.has_tag(SplitTag::Conditioning) || self.has_pattern(MovementPattern::Conditioning)
    }

    /// Exercise belongs only to the warmup/core/conditioning add-on pools
    #[must_use]
    pub fn is_add_on_only(&self) -> bool {
        const TRAINING_TAGS: [SplitTag; 6] = [
            SplitTag::Push,
            SplitTag::Pull,
            SplitTag::Legs,
            SplitTag::Upper,
            SplitTag::Lower,
            SplitTag::FullBody,
        ];
        !TRAINING_TAGS.iter().any(|tag| self.has_tag(*tag))
    }

    /// Normalized primary muscle names
    #[must_use]
    pub fn normalized_primary_muscles(&self) -> Vec<String> {
        self.primary_muscles.iter().map(|m| normalize_name(m)).collect()
    }

    /// Normalized secondary muscle names
    #[must_use]
    pub fn normalized_secondary_muscles(&self) -> Vec<String> {
        self.secondary_muscles
            .iter()
            .map(|m| normalize_name(m))
            .collect()
    }

    /// Recovery override for a normalized muscle name, matched case-insensitively
    #[must_use]
    pub fn recovery_override(&self, muscle: &str) -> Option<f64> {
        self.recovery_overrides
            .iter()
            .find(|(name, _)| normalize_name(name) == muscle)
            .map(|(_, hours)| *hours)
    }
}
