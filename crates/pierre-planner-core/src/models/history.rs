// ABOUTME: Past workout sessions used for stall detection, recency, recovery, and load progression
// ABOUTME: Only completed sessions carry signal; incomplete ones are skipped everywhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One performed set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySet {
    /// Reps completed
    pub reps: u32,
    /// Load used, if recorded
    #[serde(default)]
    pub load: Option<f64>,
}

/// One exercise within a past session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryExercise {
    /// Catalog identifier
    pub exercise_id: String,
    /// Muscles trained, as recorded at the time
    #[serde(default)]
    pub muscles: Vec<String>,
    /// Sets performed
    #[serde(default)]
    pub sets: Vec<HistorySet>,
}

impl HistoryExercise {
    /// Total volume: sum of reps x max(load, 1)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets
            .iter()
            .map(|set| f64::from(set.reps) * set.load.unwrap_or(1.0).max(1.0))
            .sum()
    }

    /// Heaviest recorded load
    #[must_use]
    pub fn top_load(&self) -> Option<f64> {
        self.sets
            .iter()
            .filter_map(|set| set.load)
            .filter(|load| *load > 0.0)
            .reduce(f64::max)
    }
}

/// One past session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistoryEntry {
    /// Whether the session was completed
    pub completed: bool,
    /// When the session was performed
    pub performed_at: DateTime<Utc>,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<HistoryExercise>,
}

impl WorkoutHistoryEntry {
    /// The entry for an exercise id, if present
    #[must_use]
    pub fn exercise(&self, exercise_id: &str) -> Option<&HistoryExercise> {
        self.exercises
            .iter()
            .find(|exercise| exercise.exercise_id == exercise_id)
    }

    /// Completed sessions, most recent first
    ///
    /// Ties on timestamp keep input order so the result is deterministic.
    #[must_use]
    pub fn completed_newest_first(history: &[Self]) -> Vec<&Self> {
        let mut completed: Vec<&Self> = history.iter().filter(|entry| entry.completed).collect();
        completed.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        completed
    }
}
