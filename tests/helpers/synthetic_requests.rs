// ABOUTME: Seeded generator of varied generation requests for property-style tests
// ABOUTME: Randomizes athlete state, goals, periodization, and day focus over the fixture catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::fixtures::{catalog, completed_session, full_gym, reference_now};
use pierre_session_planner::models::{
    BodyPart, FatigueState, Goals, PeriodizationModifiers, PrimaryGoal, SecondaryGoal,
    TrainingAge, UserPreferences,
};
use pierre_session_planner::GenerationRequest;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

const DAY_FOCUSES: [&[&str]; 5] = [&["push"], &["pull"], &["legs"], &["upper"], &["full_body"]];

const GOALS: [PrimaryGoal; 5] = [
    PrimaryGoal::Hypertrophy,
    PrimaryGoal::Strength,
    PrimaryGoal::FatLoss,
    PrimaryGoal::Athleticism,
    PrimaryGoal::GeneralHealth,
];

const AGES: [TrainingAge; 3] = [
    TrainingAge::Beginner,
    TrainingAge::Intermediate,
    TrainingAge::Advanced,
];

const HISTORY_IDS: [&str; 4] = ["bench_press", "pull_up", "back_squat", "cable_fly"];

/// Deterministic source of varied requests
#[derive(Debug, Clone)]
pub struct SyntheticRequestBuilder {
    rng: ChaCha8Rng,
}

impl SyntheticRequestBuilder {
    /// Create a builder; the same seed yields the same request sequence
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn fatigue(&mut self) -> FatigueState {
        let mut pain_flags = BTreeMap::new();
        if self.rng.gen_bool(0.3) {
            pain_flags.insert(BodyPart::Shoulder, self.rng.gen_range(0..=3));
        }
        if self.rng.gen_bool(0.2) {
            pain_flags.insert(BodyPart::LowBack, self.rng.gen_range(0..=3));
        }
        FatigueState {
            readiness: self.rng.gen_range(1..=5),
            missed_last_session: self.rng.gen_bool(0.25),
            pain_flags,
            injuries: Vec::new(),
        }
    }

    fn periodization(&mut self) -> PeriodizationModifiers {
        if self.rng.gen_bool(0.2) {
            return PeriodizationModifiers::deload();
        }
        PeriodizationModifiers {
            rpe_offset: [-0.5, 0.0, 0.5][self.rng.gen_range(0..3)],
            set_multiplier: [0.8, 1.0, 1.2][self.rng.gen_range(0..3)],
            backoff_multiplier: 0.9,
            is_deload: false,
        }
    }

    /// Next request in the sequence
    pub fn next_request(&mut self) -> GenerationRequest {
        let focus = DAY_FOCUSES[self.rng.gen_range(0..DAY_FOCUSES.len())];
        let mut history = Vec::new();
        for id in HISTORY_IDS {
            if self.rng.gen_bool(0.5) {
                history.push(completed_session(self.rng.gen_range(12..240), id, 8, 50.0));
            }
        }

        GenerationRequest {
            catalog: catalog(),
            constraints: full_gym(),
            fatigue: self.fatigue(),
            goals: Goals {
                primary: GOALS[self.rng.gen_range(0..GOALS.len())],
                secondary: if self.rng.gen_bool(0.3) {
                    SecondaryGoal::Conditioning
                } else {
                    SecondaryGoal::None
                },
                training_age: AGES[self.rng.gen_range(0..AGES.len())],
            },
            preferences: UserPreferences {
                optional_conditioning: self.rng.gen_bool(0.5),
                allow_supersets: self.rng.gen_bool(0.5),
                ..UserPreferences::default()
            },
            history,
            periodization: self.periodization(),
            target_patterns: focus.iter().map(|p| (*p).to_owned()).collect(),
            time_budget_minutes: self.rng.gen_bool(0.5).then(|| self.rng.gen_range(20..=90)),
            seed: self.rng.gen(),
            now: reference_now(),
        }
    }
}
