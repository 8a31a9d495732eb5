// ABOUTME: Shared selection weighting from favorites, training recency, and novelty
// ABOUTME: Main-lift and accessory selectors draw every weighted pick through this context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Selection
//!
//! Weight of a candidate = `max(0.1, favorite_bias) x recency x novelty`.
//! Recency and novelty are derived once per call from completed history.

/// Accessory, warmup, and add-on selection
pub mod accessory;
/// Slot-based main-lift selection with fallback cascades
pub mod main_lift;

pub use accessory::{
    accessory_target, coverage_targets, select_accessories, select_add_ons, select_warmup,
};
pub use main_lift::{main_lift_slots, select_main_lifts, FallbackOrder, MainLiftSelection, MainLiftSlot};

use crate::rng::SessionRng;
use chrono::{DateTime, Utc};
use pierre_planner_core::constants::selection;
use pierre_planner_core::models::{ExerciseCatalogEntry, UserPreferences, WorkoutHistoryEntry};
use std::collections::BTreeMap;

/// Per-call weighting context
#[derive(Debug, Clone)]
pub struct SelectionContext<'a> {
    preferences: &'a UserPreferences,
    last_trained: BTreeMap<&'a str, DateTime<Utc>>,
    session_counts: BTreeMap<&'a str, usize>,
    now: DateTime<Utc>,
}

impl<'a> SelectionContext<'a> {
    /// Build the context from completed history as of `now`
    #[must_use]
    pub fn new(
        preferences: &'a UserPreferences,
        history: &'a [WorkoutHistoryEntry],
        now: DateTime<Utc>,
    ) -> Self {
        let mut last_trained: BTreeMap<&str, DateTime<Utc>> = BTreeMap::new();
        let mut session_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in history.iter().filter(|entry| entry.completed) {
            for exercise in &entry.exercises {
                let id = exercise.exercise_id.as_str();
                *session_counts.entry(id).or_default() += 1;
                last_trained
                    .entry(id)
                    .and_modify(|seen| *seen = (*seen).max(entry.performed_at))
                    .or_insert(entry.performed_at);
            }
        }
        Self {
            preferences,
            last_trained,
            session_counts,
            now,
        }
    }

    /// Preferences the context was built with
    #[must_use]
    pub const fn preferences(&self) -> &UserPreferences {
        self.preferences
    }

    /// Whether the exercise is a favorite
    #[must_use]
    pub fn is_favorite(&self, entry: &ExerciseCatalogEntry) -> bool {
        self.preferences.is_favorite(entry)
    }

    /// 3 for favorites, 1 otherwise
    #[must_use]
    pub fn favorite_bias(&self, entry: &ExerciseCatalogEntry) -> f64 {
        if self.is_favorite(entry) {
            selection::FAVORITE_BIAS
        } else {
            selection::DEFAULT_BIAS
        }
    }

    /// Down-weights exercises trained within the last week
    #[must_use]
    pub fn recency_multiplier(&self, entry: &ExerciseCatalogEntry) -> f64 {
        let Some(last) = self.last_trained.get(entry.id.as_str()) else {
            return 1.0;
        };
        #[allow(clippy::cast_precision_loss)]
        let hours = ((self.now - *last).num_minutes() as f64 / 60.0).max(0.0);
        if hours < selection::RECENT_HOURS_STRONG {
            selection::RECENCY_STRONG
        } else if hours < selection::RECENT_HOURS_MODERATE {
            selection::RECENCY_MODERATE
        } else if hours < selection::RECENT_HOURS_LIGHT {
            selection::RECENCY_LIGHT
        } else {
            1.0
        }
    }

    /// Boosts exercises never or rarely trained
    #[must_use]
    pub fn novelty_multiplier(&self, entry: &ExerciseCatalogEntry) -> f64 {
        match self.session_counts.get(entry.id.as_str()).copied().unwrap_or(0) {
            0 => selection::NOVELTY_NEVER,
            n if n <= selection::RARE_SESSION_COUNT => selection::NOVELTY_RARE,
            _ => 1.0,
        }
    }

    /// Selection weight of a candidate
    #[must_use]
    pub fn weight(&self, entry: &ExerciseCatalogEntry) -> f64 {
        self.favorite_bias(entry).max(selection::MIN_BIAS)
            * self.recency_multiplier(entry)
            * self.novelty_multiplier(entry)
    }

    /// Stable ordering with favorites first, otherwise keeping input order
    #[must_use]
    pub fn favorites_first<'e>(
        &self,
        candidates: &[&'e ExerciseCatalogEntry],
    ) -> Vec<&'e ExerciseCatalogEntry> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by_key(|entry| !self.is_favorite(entry));
        sorted
    }
}

/// Weighted pick from `candidates` using `weight_of`
pub(crate) fn pick_weighted<'e, F>(
    candidates: &[&'e ExerciseCatalogEntry],
    rng: &mut SessionRng,
    weight_of: F,
) -> Option<&'e ExerciseCatalogEntry>
where
    F: Fn(&ExerciseCatalogEntry) -> f64,
{
    let weights: Vec<f64> = candidates.iter().map(|entry| weight_of(entry)).collect();
    rng.weighted_index(&weights)
        .and_then(|index| candidates.get(index).copied())
}

/// Whether an exercise id has already been chosen
pub(crate) fn already_chosen(chosen: &[&ExerciseCatalogEntry], entry: &ExerciseCatalogEntry) -> bool {
    chosen.iter().any(|picked| picked.id == entry.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pierre_planner_core::models::{
        HistoryExercise, JointStress, MovementPattern, SplitTag,
    };
    use std::collections::BTreeSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }

    fn entry(id: &str) -> ExerciseCatalogEntry {
        ExerciseCatalogEntry {
            id: id.to_owned(),
            name: id.replace('_', " "),
            movement_patterns: BTreeSet::from([MovementPattern::Squat]),
            split_tags: BTreeSet::from([SplitTag::Legs]),
            joint_stress: JointStress::Medium,
            equipment: BTreeSet::new(),
            primary_muscles: vec!["quads".to_owned()],
            secondary_muscles: vec![],
            fatigue_cost: 3,
            stimulus_fit: 3,
            length_position: 3,
            main_lift_eligible: true,
            compound: true,
            rep_range: None,
            seconds_per_set: None,
            recovery_overrides: BTreeMap::new(),
            contraindications: BTreeMap::new(),
        }
    }

    fn trained(hours_ago: i64, id: &str, completed: bool) -> WorkoutHistoryEntry {
        WorkoutHistoryEntry {
            completed,
            performed_at: now() - Duration::hours(hours_ago),
            exercises: vec![HistoryExercise {
                exercise_id: id.to_owned(),
                muscles: vec![],
                sets: vec![],
            }],
        }
    }

    #[test]
    fn test_weight_combines_bias_recency_and_novelty() {
        let preferences = UserPreferences {
            favorite_ids: BTreeSet::from(["back_squat".to_owned()]),
            ..UserPreferences::default()
        };
        let history = vec![trained(24, "back_squat", true)];
        let ctx = SelectionContext::new(&preferences, &history, now());

        let squat = entry("back_squat");
        // favorite 3.0 x trained a day ago 0.25 x rare 1.2
        assert!((ctx.weight(&squat) - 0.9).abs() < 1e-9);

        let lunge = entry("walking_lunge");
        assert!((ctx.weight(&lunge) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_sessions_do_not_count() {
        let preferences = UserPreferences::default();
        let history = vec![trained(2, "back_squat", false)];
        let ctx = SelectionContext::new(&preferences, &history, now());
        let squat = entry("back_squat");
        assert!((ctx.recency_multiplier(&squat) - 1.0).abs() < f64::EPSILON);
        assert!((ctx.novelty_multiplier(&squat) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recency_steps() {
        let preferences = UserPreferences::default();
        let squat = entry("back_squat");
        for (hours, expected) in [(10, 0.25), (60, 0.5), (120, 0.8), (200, 1.0)] {
            let history = vec![trained(hours, "back_squat", true)];
            let ctx = SelectionContext::new(&preferences, &history, now());
            assert!(
                (ctx.recency_multiplier(&squat) - expected).abs() < f64::EPSILON,
                "{hours}h"
            );
        }
    }
}
