// ABOUTME: Benchmark fixtures generating synthetic exercise catalogs and training history
// ABOUTME: Deterministic index-driven data so measurements are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for catalogs and history.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_session_planner::models::{
    Constraints, Equipment, ExerciseCatalogEntry, FatigueState, Goals, HistoryExercise,
    HistorySet, JointStress, MovementPattern, PeriodizationModifiers, RepRange, SplitTag,
    UserPreferences, WorkoutHistoryEntry,
};
use pierre_session_planner::GenerationRequest;
use std::collections::{BTreeMap, BTreeSet};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small gym catalog (40 exercises)
    Small,
    /// Full library (400 exercises)
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 40,
            Self::Large => 400,
        }
    }
}

const PATTERNS: [(MovementPattern, SplitTag, &str); 9] = [
    (MovementPattern::HorizontalPush, SplitTag::Push, "chest"),
    (MovementPattern::VerticalPush, SplitTag::Push, "front delts"),
    (MovementPattern::HorizontalPull, SplitTag::Pull, "upper back"),
    (MovementPattern::VerticalPull, SplitTag::Pull, "lats"),
    (MovementPattern::Squat, SplitTag::Legs, "quads"),
    (MovementPattern::Hinge, SplitTag::Legs, "hamstrings"),
    (MovementPattern::Lunge, SplitTag::Legs, "glutes"),
    (MovementPattern::Isolation, SplitTag::Push, "triceps"),
    (MovementPattern::Mobility, SplitTag::Mobility, "upper back"),
];

const EQUIPMENT: [Equipment; 4] = [
    Equipment::Barbell,
    Equipment::Dumbbell,
    Equipment::Cable,
    Equipment::Machine,
];

/// Fixed reference time
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::cast_possible_truncation)]
fn catalog_entry(index: usize) -> ExerciseCatalogEntry {
    let (pattern, tag, muscle) = PATTERNS[index % PATTERNS.len()];
    let compound = !matches!(pattern, MovementPattern::Isolation | MovementPattern::Mobility);
    let score = |salt: usize| (1 + (index * salt) % 5) as u8;
    let min_reps = 5 + (index % 4) as u32 * 2;

    ExerciseCatalogEntry {
        id: format!("bench_exercise_{index}"),
        name: format!("Benchmark Exercise {index}"),
        movement_patterns: BTreeSet::from([pattern]),
        split_tags: BTreeSet::from([tag]),
        joint_stress: match index % 3 {
            0 => JointStress::Low,
            1 => JointStress::Medium,
            _ => JointStress::High,
        },
        equipment: BTreeSet::from([EQUIPMENT[index % EQUIPMENT.len()]]),
        primary_muscles: vec![muscle.to_owned()],
        secondary_muscles: Vec::new(),
        fatigue_cost: score(7),
        stimulus_fit: score(11),
        length_position: score(13),
        main_lift_eligible: compound && index % 2 == 0,
        compound,
        rep_range: Some(RepRange::new(min_reps, min_reps + 6)),
        seconds_per_set: None,
        recovery_overrides: BTreeMap::new(),
        contraindications: BTreeMap::new(),
    }
}

/// Generate a catalog of the given size
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<ExerciseCatalogEntry> {
    (0..size.count()).map(catalog_entry).collect()
}

/// Completed sessions every other day touching a rotating slice of the catalog
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn generate_history(catalog: &[ExerciseCatalogEntry], sessions: usize) -> Vec<WorkoutHistoryEntry> {
    (0..sessions)
        .map(|session| WorkoutHistoryEntry {
            completed: session % 7 != 6,
            performed_at: bench_now() - Duration::days((session * 2 + 1) as i64),
            exercises: catalog
                .iter()
                .skip(session % catalog.len().max(1))
                .take(5)
                .map(|entry| HistoryExercise {
                    exercise_id: entry.id.clone(),
                    muscles: Vec::new(),
                    sets: vec![
                        HistorySet {
                            reps: 8,
                            load: Some(40.0 + (session % 5) as f64 * 2.5),
                        };
                        3
                    ],
                })
                .collect(),
        })
        .collect()
}

/// Push-day request over the given catalog and history
#[must_use]
pub fn generation_request(
    catalog: Vec<ExerciseCatalogEntry>,
    history: Vec<WorkoutHistoryEntry>,
    seed: u64,
) -> GenerationRequest {
    GenerationRequest {
        catalog,
        constraints: Constraints {
            available_equipment: EQUIPMENT.into_iter().collect(),
            ..Constraints::default()
        },
        fatigue: FatigueState::default(),
        goals: Goals::default(),
        preferences: UserPreferences::default(),
        history,
        periodization: PeriodizationModifiers::default(),
        target_patterns: vec!["push".to_owned()],
        time_budget_minutes: Some(45),
        seed,
        now: bench_now(),
    }
}
