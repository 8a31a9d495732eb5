// ABOUTME: Fixture exercise catalog and history builders for planner integration tests
// ABOUTME: Covers push, pull, and leg days plus mobility, core, and conditioning add-ons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_session_planner::models::{
    BodyPart, Constraints, Equipment, ExerciseCatalogEntry, FatigueState, Goals, HistoryExercise,
    HistorySet, JointStress, MovementPattern, PeriodizationModifiers, RepRange, SplitTag,
    UserPreferences, WorkoutHistoryEntry,
};
use pierre_session_planner::GenerationRequest;
use std::collections::{BTreeMap, BTreeSet};

/// Fixed reference time so recency and recovery never depend on the clock
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).single().unwrap()
}

/// Builder for catalog entries with sensible mid-scale defaults
#[derive(Debug, Clone)]
pub struct ExerciseBuilder {
    entry: ExerciseCatalogEntry,
}

impl ExerciseBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            entry: ExerciseCatalogEntry {
                id: id.to_owned(),
                name: name.to_owned(),
                movement_patterns: BTreeSet::new(),
                split_tags: BTreeSet::new(),
                joint_stress: JointStress::Low,
                equipment: BTreeSet::new(),
                primary_muscles: Vec::new(),
                secondary_muscles: Vec::new(),
                fatigue_cost: 3,
                stimulus_fit: 3,
                length_position: 3,
                main_lift_eligible: false,
                compound: false,
                rep_range: None,
                seconds_per_set: None,
                recovery_overrides: BTreeMap::new(),
                contraindications: BTreeMap::new(),
            },
        }
    }

    pub fn patterns(mut self, patterns: &[MovementPattern]) -> Self {
        self.entry.movement_patterns = patterns.iter().copied().collect();
        self
    }

    pub fn tags(mut self, tags: &[SplitTag]) -> Self {
        self.entry.split_tags = tags.iter().copied().collect();
        self
    }

    pub fn equipment(mut self, equipment: &[Equipment]) -> Self {
        self.entry.equipment = equipment.iter().copied().collect();
        self
    }

    pub fn muscles(mut self, primary: &[&str], secondary: &[&str]) -> Self {
        self.entry.primary_muscles = primary.iter().map(|m| (*m).to_owned()).collect();
        self.entry.secondary_muscles = secondary.iter().map(|m| (*m).to_owned()).collect();
        self
    }

    pub fn stress(mut self, joint_stress: JointStress) -> Self {
        self.entry.joint_stress = joint_stress;
        self
    }

    pub fn scores(mut self, fatigue_cost: u8, stimulus_fit: u8, length_position: u8) -> Self {
        self.entry.fatigue_cost = fatigue_cost;
        self.entry.stimulus_fit = stimulus_fit;
        self.entry.length_position = length_position;
        self
    }

    pub fn main_lift(mut self) -> Self {
        self.entry.main_lift_eligible = true;
        self.entry.compound = true;
        self
    }

    pub fn compound(mut self) -> Self {
        self.entry.compound = true;
        self
    }

    pub fn reps(mut self, min: u32, max: u32) -> Self {
        self.entry.rep_range = Some(RepRange::new(min, max));
        self
    }

    pub fn contraindicated(mut self, part: BodyPart) -> Self {
        self.entry.contraindications.insert(part, true);
        self
    }

    pub fn build(self) -> ExerciseCatalogEntry {
        self.entry
    }
}

fn push_exercises() -> Vec<ExerciseCatalogEntry> {
    use MovementPattern::{HorizontalPush, Isolation, VerticalPush};
    vec![
        ExerciseBuilder::new("bench_press", "Bench Press")
            .patterns(&[HorizontalPush])
            .tags(&[SplitTag::Push, SplitTag::Upper])
            .equipment(&[Equipment::Barbell])
            .muscles(&["chest"], &["triceps", "front delts"])
            .stress(JointStress::Medium)
            .scores(4, 4, 3)
            .main_lift()
            .reps(5, 8)
            .build(),
        ExerciseBuilder::new("overhead_press", "Overhead Press")
            .patterns(&[VerticalPush])
            .tags(&[SplitTag::Push, SplitTag::Upper])
            .equipment(&[Equipment::Barbell])
            .muscles(&["front delts"], &["triceps"])
            .stress(JointStress::Medium)
            .scores(3, 3, 3)
            .main_lift()
            .reps(5, 8)
            .contraindicated(BodyPart::Shoulder)
            .build(),
        ExerciseBuilder::new("incline_db_press", "Incline Dumbbell Press")
            .patterns(&[HorizontalPush])
            .tags(&[SplitTag::Push, SplitTag::Upper])
            .equipment(&[Equipment::Dumbbell])
            .muscles(&["chest"], &["front delts"])
            .scores(3, 4, 4)
            .compound()
            .reps(8, 12)
            .build(),
        ExerciseBuilder::new("cable_fly", "Cable Fly")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Push, SplitTag::Upper])
            .equipment(&[Equipment::Cable])
            .muscles(&["chest"], &[])
            .scores(2, 4, 5)
            .reps(10, 20)
            .build(),
        ExerciseBuilder::new("lateral_raise", "Lateral Raise")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Push, SplitTag::Upper])
            .equipment(&[Equipment::Dumbbell])
            .muscles(&["side delts"], &[])
            .scores(1, 5, 3)
            .reps(12, 20)
            .build(),
        ExerciseBuilder::new("triceps_pushdown", "Triceps Pushdown")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Push, SplitTag::Upper])
            .equipment(&[Equipment::Cable])
            .muscles(&["triceps"], &[])
            .scores(1, 4, 2)
            .reps(10, 15)
            .build(),
        ExerciseBuilder::new("dip", "Dip")
            .patterns(&[HorizontalPush])
            .tags(&[SplitTag::Push])
            .muscles(&["chest", "triceps"], &[])
            .stress(JointStress::High)
            .scores(4, 3, 4)
            .compound()
            .reps(6, 12)
            .contraindicated(BodyPart::Shoulder)
            .build(),
    ]
}

fn pull_exercises() -> Vec<ExerciseCatalogEntry> {
    use MovementPattern::{HorizontalPull, Isolation, VerticalPull};
    vec![
        ExerciseBuilder::new("pull_up", "Pull Up")
            .patterns(&[VerticalPull])
            .tags(&[SplitTag::Pull, SplitTag::Upper])
            .equipment(&[Equipment::PullUpBar])
            .muscles(&["lats"], &["biceps"])
            .stress(JointStress::Medium)
            .scores(4, 4, 4)
            .main_lift()
            .reps(5, 10)
            .build(),
        ExerciseBuilder::new("barbell_row", "Barbell Row")
            .patterns(&[HorizontalPull])
            .tags(&[SplitTag::Pull, SplitTag::Upper])
            .equipment(&[Equipment::Barbell])
            .muscles(&["upper back", "lats"], &["biceps", "lower back"])
            .stress(JointStress::Medium)
            .scores(4, 3, 3)
            .main_lift()
            .reps(6, 10)
            .contraindicated(BodyPart::LowBack)
            .build(),
        ExerciseBuilder::new("chest_supported_row", "Chest Supported Row")
            .patterns(&[HorizontalPull])
            .tags(&[SplitTag::Pull, SplitTag::Upper])
            .equipment(&[Equipment::Dumbbell, Equipment::Bench])
            .muscles(&["upper back"], &["rear delts", "biceps"])
            .scores(3, 4, 3)
            .main_lift()
            .reps(8, 12)
            .build(),
        ExerciseBuilder::new("lat_pulldown", "Lat Pulldown")
            .patterns(&[VerticalPull])
            .tags(&[SplitTag::Pull, SplitTag::Upper])
            .equipment(&[Equipment::Cable])
            .muscles(&["lats"], &["biceps"])
            .scores(2, 4, 4)
            .compound()
            .reps(8, 12)
            .build(),
        ExerciseBuilder::new("face_pull", "Face Pull")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Pull, SplitTag::Upper])
            .equipment(&[Equipment::Cable])
            .muscles(&["rear delts"], &["traps"])
            .scores(1, 4, 3)
            .reps(12, 20)
            .build(),
        ExerciseBuilder::new("db_curl", "Dumbbell Curl")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Pull, SplitTag::Upper])
            .equipment(&[Equipment::Dumbbell])
            .muscles(&["biceps"], &["forearms"])
            .scores(1, 4, 3)
            .reps(8, 15)
            .build(),
        ExerciseBuilder::new("shrug", "Dumbbell Shrug")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Pull])
            .equipment(&[Equipment::Dumbbell])
            .muscles(&["traps"], &[])
            .scores(2, 3, 2)
            .reps(10, 15)
            .build(),
    ]
}

fn leg_exercises() -> Vec<ExerciseCatalogEntry> {
    use MovementPattern::{Hinge, Isolation, Lunge, Squat};
    vec![
        ExerciseBuilder::new("back_squat", "Back Squat")
            .patterns(&[Squat])
            .tags(&[SplitTag::Legs, SplitTag::Lower])
            .equipment(&[Equipment::Barbell])
            .muscles(&["quads", "glutes"], &["adductors"])
            .stress(JointStress::High)
            .scores(5, 4, 4)
            .main_lift()
            .reps(4, 8)
            .contraindicated(BodyPart::Knee)
            .build(),
        ExerciseBuilder::new("romanian_deadlift", "Romanian Deadlift")
            .patterns(&[Hinge])
            .tags(&[SplitTag::Legs, SplitTag::Lower])
            .equipment(&[Equipment::Barbell])
            .muscles(&["hamstrings", "glutes"], &["lower back"])
            .stress(JointStress::Medium)
            .scores(4, 4, 5)
            .main_lift()
            .reps(6, 10)
            .build(),
        ExerciseBuilder::new("goblet_squat", "Goblet Squat")
            .patterns(&[Squat])
            .tags(&[SplitTag::Legs, SplitTag::Lower])
            .equipment(&[Equipment::Dumbbell, Equipment::Kettlebell])
            .muscles(&["quads"], &["glutes"])
            .scores(3, 3, 4)
            .main_lift()
            .reps(8, 12)
            .build(),
        ExerciseBuilder::new("walking_lunge", "Walking Lunge")
            .patterns(&[Lunge])
            .tags(&[SplitTag::Legs, SplitTag::Lower])
            .equipment(&[Equipment::Dumbbell])
            .muscles(&["quads", "glutes"], &[])
            .scores(3, 4, 4)
            .compound()
            .reps(8, 12)
            .build(),
        ExerciseBuilder::new("leg_curl", "Seated Leg Curl")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Legs, SplitTag::Lower])
            .equipment(&[Equipment::Machine])
            .muscles(&["hamstrings"], &[])
            .scores(2, 5, 5)
            .reps(10, 15)
            .build(),
        ExerciseBuilder::new("leg_extension", "Leg Extension")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Legs, SplitTag::Lower])
            .equipment(&[Equipment::Machine])
            .muscles(&["quads"], &[])
            .scores(2, 4, 3)
            .reps(10, 20)
            .build(),
        ExerciseBuilder::new("calf_raise", "Standing Calf Raise")
            .patterns(&[Isolation])
            .tags(&[SplitTag::Legs, SplitTag::Lower])
            .equipment(&[Equipment::Machine])
            .muscles(&["calves"], &[])
            .scores(1, 3, 4)
            .reps(10, 20)
            .build(),
    ]
}

fn add_on_exercises() -> Vec<ExerciseCatalogEntry> {
    vec![
        ExerciseBuilder::new("band_pull_apart", "Band Pull Apart")
            .patterns(&[MovementPattern::Mobility])
            .tags(&[SplitTag::Prehab])
            .equipment(&[Equipment::Bands])
            .muscles(&["rear delts"], &[])
            .scores(1, 2, 2)
            .reps(15, 20)
            .build(),
        ExerciseBuilder::new("hip_airplane", "Hip Airplane")
            .patterns(&[MovementPattern::Mobility])
            .tags(&[SplitTag::Mobility])
            .muscles(&["glutes"], &[])
            .scores(1, 2, 2)
            .build(),
        ExerciseBuilder::new("thoracic_rotation", "Thoracic Rotation")
            .patterns(&[MovementPattern::Mobility])
            .tags(&[SplitTag::Mobility])
            .muscles(&["upper back"], &[])
            .scores(1, 2, 2)
            .build(),
        ExerciseBuilder::new("dead_bug", "Dead Bug")
            .patterns(&[MovementPattern::Core])
            .tags(&[SplitTag::Core])
            .muscles(&["abs"], &[])
            .scores(1, 3, 2)
            .reps(8, 12)
            .build(),
        ExerciseBuilder::new("farmer_carry", "Farmer Carry")
            .patterns(&[MovementPattern::Carry, MovementPattern::Conditioning])
            .tags(&[SplitTag::Conditioning])
            .equipment(&[Equipment::Dumbbell, Equipment::Kettlebell])
            .muscles(&["forearms", "traps"], &["obliques"])
            .scores(2, 3, 2)
            .build(),
        ExerciseBuilder::new("bike_intervals", "Bike Intervals")
            .patterns(&[MovementPattern::Conditioning])
            .tags(&[SplitTag::Conditioning])
            .equipment(&[Equipment::Machine])
            .muscles(&["quads"], &[])
            .scores(3, 2, 2)
            .build(),
    ]
}

/// Data-quality violation: tagged both push and pull
pub fn dual_tagged_exercise() -> ExerciseCatalogEntry {
    ExerciseBuilder::new("mystery_machine", "Mystery Machine")
        .patterns(&[MovementPattern::HorizontalPush, MovementPattern::HorizontalPull])
        .tags(&[SplitTag::Push, SplitTag::Pull])
        .equipment(&[Equipment::Machine])
        .muscles(&["chest", "upper back"], &[])
        .main_lift()
        .build()
}

/// Complete fixture catalog
pub fn catalog() -> Vec<ExerciseCatalogEntry> {
    let mut catalog = push_exercises();
    catalog.extend(pull_exercises());
    catalog.extend(leg_exercises());
    catalog.extend(add_on_exercises());
    catalog
}

/// Equipment for a fully stocked gym
pub fn full_gym() -> Constraints {
    Constraints {
        available_equipment: BTreeSet::from([
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Bands,
            Equipment::PullUpBar,
            Equipment::Bench,
        ]),
        ..Constraints::default()
    }
}

/// Request for the given day with default athlete context
pub fn request_for(patterns: &[&str], seed: u64) -> GenerationRequest {
    GenerationRequest {
        catalog: catalog(),
        constraints: full_gym(),
        fatigue: FatigueState::default(),
        goals: Goals::default(),
        preferences: UserPreferences::default(),
        history: Vec::new(),
        periodization: PeriodizationModifiers::default(),
        target_patterns: patterns.iter().map(|p| (*p).to_owned()).collect(),
        time_budget_minutes: None,
        seed,
        now: reference_now(),
    }
}

/// One completed session `hours_ago` with a single exercise at a fixed load
pub fn completed_session(hours_ago: i64, exercise_id: &str, reps: u32, load: f64) -> WorkoutHistoryEntry {
    WorkoutHistoryEntry {
        completed: true,
        performed_at: reference_now() - Duration::hours(hours_ago),
        exercises: vec![HistoryExercise {
            exercise_id: exercise_id.to_owned(),
            muscles: Vec::new(),
            sets: vec![HistorySet { reps, load: Some(load) }; 3],
        }],
    }
}

/// Three flat sessions a week apart, enough to mark the exercise stalled
pub fn stalled_history(exercise_ids: &[&str]) -> Vec<WorkoutHistoryEntry> {
    exercise_ids
        .iter()
        .flat_map(|id| (1..=3).map(move |week| completed_session(week * 168, id, 8, 60.0)))
        .collect()
}
