// ABOUTME: Stimulus-recovery-adaptation model computing per-muscle recovery percentages
// ABOUTME: Produces cautionary warnings for under-recovered target muscles; never blocks selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recovery (SRA) Model
//!
//! `recovery_percent = min(100, round(hours_since_trained / window_hours x 100))`.
//! A muscle with no completed history is fully recovered.

use chrono::{DateTime, Utc};
use pierre_planner_core::constants::recovery::{
    default_window_hours, MUSCLE_LANDMARKS, RECOVERED_PERCENT,
};
use pierre_planner_core::models::{normalize_name, ExerciseCatalogEntry, WorkoutHistoryEntry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Recovery status of one muscle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleRecovery {
    /// Normalized muscle name
    pub muscle: String,
    /// Hours since the last completed session that trained it
    pub hours_since_trained: Option<f64>,
    /// Recovery window in hours
    pub window_hours: f64,
    /// Percent recovered (0-100)
    pub recovery_percent: u8,
    /// At or above 100%
    pub is_recovered: bool,
}

impl MuscleRecovery {
    fn untrained(muscle: &str) -> Self {
        Self {
            muscle: muscle.to_owned(),
            hours_since_trained: None,
            window_hours: default_window_hours(muscle),
            recovery_percent: RECOVERED_PERCENT,
            is_recovered: true,
        }
    }

    fn trained(muscle: &str, hours: f64, window_hours: f64) -> Self {
        let recovery_percent = recovery_percent(hours, window_hours);
        Self {
            muscle: muscle.to_owned(),
            hours_since_trained: Some(hours),
            window_hours,
            recovery_percent,
            is_recovered: recovery_percent >= RECOVERED_PERCENT,
        }
    }
}

/// Cautionary notice for a target muscle that is not yet recovered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SraWarning {
    /// Normalized muscle name
    pub muscle: String,
    /// Hours since last trained
    pub hours_since_trained: f64,
    /// Recovery window in hours
    pub window_hours: f64,
    /// Percent recovered
    pub recovery_percent: u8,
}

impl fmt::Display for SraWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.muscle.chars();
        let muscle: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        write!(
            f,
            "{muscle} is {}% recovered ({:.0}h of {:.0}h)",
            self.recovery_percent, self.hours_since_trained, self.window_hours
        )
    }
}

/// Percent recovered after `hours` of a `window_hours` window
#[must_use]
pub fn recovery_percent(hours: f64, window_hours: f64) -> u8 {
    if window_hours <= 0.0 {
        return RECOVERED_PERCENT;
    }
    let percent = (hours.max(0.0) / window_hours * 100.0).round();
    // Safe: clamped to 0-100 before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = percent.min(f64::from(RECOVERED_PERCENT)) as u8;
    percent
}

/// Recovery status for every landmark muscle plus any other muscle in history
///
/// Muscles for a history exercise come from the muscles recorded with it, or
/// from the catalog's primary muscles when none were recorded. The window is
/// the catalog entry's override for that muscle, else the landmark default.
#[must_use]
pub fn build_muscle_recovery_map(
    history: &[WorkoutHistoryEntry],
    catalog: &[ExerciseCatalogEntry],
    now: DateTime<Utc>,
) -> BTreeMap<String, MuscleRecovery> {
    let mut map: BTreeMap<String, MuscleRecovery> = MUSCLE_LANDMARKS
        .iter()
        .map(|(muscle, _)| ((*muscle).to_owned(), MuscleRecovery::untrained(muscle)))
        .collect();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for entry in WorkoutHistoryEntry::completed_newest_first(history) {
        #[allow(clippy::cast_precision_loss)]
        let hours = ((now - entry.performed_at).num_seconds() as f64 / 3600.0).max(0.0);
        for exercise in &entry.exercises {
            let catalog_entry = catalog.iter().find(|e| e.id == exercise.exercise_id);
            let muscles: Vec<String> = if exercise.muscles.is_empty() {
                catalog_entry
                    .map(ExerciseCatalogEntry::normalized_primary_muscles)
                    .unwrap_or_default()
            } else {
                exercise.muscles.iter().map(|m| normalize_name(m)).collect()
            };
            for muscle in muscles {
                if !seen.insert(muscle.clone()) {
                    continue;
                }
                let window = catalog_entry
                    .and_then(|e| e.recovery_override(&muscle))
                    .unwrap_or_else(|| default_window_hours(&muscle));
                map.insert(muscle.clone(), MuscleRecovery::trained(&muscle, hours, window));
            }
        }
    }
    map
}

/// Warnings for target muscles below 100%, ordered by muscle name
#[must_use]
pub fn generate_sra_warnings(
    map: &BTreeMap<String, MuscleRecovery>,
    targets: &[String],
) -> Vec<SraWarning> {
    let targets: BTreeSet<String> = targets.iter().map(|m| normalize_name(m)).collect();
    targets
        .iter()
        .filter_map(|muscle| map.get(muscle))
        .filter(|recovery| !recovery.is_recovered)
        .filter_map(|recovery| {
            recovery.hours_since_trained.map(|hours| SraWarning {
                muscle: recovery.muscle.clone(),
                hours_since_trained: hours,
                window_hours: recovery.window_hours,
                recovery_percent: recovery.recovery_percent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pierre_planner_core::models::{HistoryExercise, JointStress};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }

    fn session(hours_ago: i64, completed: bool, id: &str, muscles: &[&str]) -> WorkoutHistoryEntry {
        WorkoutHistoryEntry {
            completed,
            performed_at: now() - Duration::hours(hours_ago),
            exercises: vec![HistoryExercise {
                exercise_id: id.to_owned(),
                muscles: muscles.iter().map(|m| (*m).to_owned()).collect(),
                sets: vec![],
            }],
        }
    }

    #[test]
    fn test_forty_percent_after_a_day_of_sixty_hours() {
        let history = vec![session(24, true, "bench_press", &["Chest"])];
        let map = build_muscle_recovery_map(&history, &[], now());
        let chest = &map["chest"];
        assert_eq!(chest.recovery_percent, 40);
        assert!(!chest.is_recovered);
        assert!((chest.window_hours - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_untrained_and_incomplete_are_recovered() {
        let history = vec![session(2, false, "squat", &["quads"])];
        let map = build_muscle_recovery_map(&history, &[], now());
        assert_eq!(map["quads"].recovery_percent, 100);
        assert!(map["quads"].is_recovered);
        assert_eq!(map.len(), MUSCLE_LANDMARKS.len());
    }

    #[test]
    fn test_catalog_override_and_primary_fallback() {
        let catalog = vec![ExerciseCatalogEntry {
            id: "nordic_curl".to_owned(),
            name: "Nordic Curl".to_owned(),
            movement_patterns: BTreeSet::new(),
            split_tags: BTreeSet::new(),
            joint_stress: JointStress::Medium,
            equipment: BTreeSet::new(),
            primary_muscles: vec!["Hamstrings".to_owned()],
            secondary_muscles: vec![],
            fatigue_cost: 4,
            stimulus_fit: 4,
            length_position: 5,
            main_lift_eligible: false,
            compound: false,
            rep_range: None,
            seconds_per_set: None,
            recovery_overrides: BTreeMap::from([("hamstrings".to_owned(), 96.0)]),
            contraindications: BTreeMap::new(),
        }];
        let history = vec![session(48, true, "nordic_curl", &[])];
        let map = build_muscle_recovery_map(&history, &catalog, now());
        assert_eq!(map["hamstrings"].recovery_percent, 50);
    }

    #[test]
    fn test_most_recent_session_wins() {
        let history = vec![
            session(100, true, "bench_press", &["chest"]),
            session(30, true, "push_up", &["chest"]),
        ];
        let map = build_muscle_recovery_map(&history, &[], now());
        assert_eq!(map["chest"].recovery_percent, 50);
    }

    #[test]
    fn test_warnings_only_for_under_recovered_targets() {
        let history = vec![session(24, true, "bench_press", &["chest", "triceps"])];
        let map = build_muscle_recovery_map(&history, &[], now());
        let warnings =
            generate_sra_warnings(&map, &["Chest".to_owned(), "lats".to_owned()]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].muscle, "chest");
        assert_eq!(warnings[0].to_string(), "Chest is 40% recovered (24h of 60h)");
    }
}
