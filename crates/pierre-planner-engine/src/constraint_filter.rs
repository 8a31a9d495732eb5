// ABOUTME: Multi-stage catalog narrowing by equipment, preferences, injuries, pain, and fatigue
// ABOUTME: Finishes with split-tag integrity checks and stall detection that never empties the pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constraint Filter
//!
//! Each stage takes a pool and returns a pool no larger than its input. Order
//! is fixed: equipment, preferences, injuries, pain, fatigue, split-tag
//! integrity, stalls. The pool before the stall stage is kept because the
//! main-lift fallback cascade searches it.

use crate::diagnostics::{DiagnosticEvent, DiagnosticsSink};
use pierre_planner_core::constants::thresholds;
use pierre_planner_core::models::{
    BodyPart, Constraints, Equipment, ExerciseCatalogEntry, FatigueState, JointStress,
    MovementPattern, UserPreferences, WorkoutHistoryEntry,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Inputs to the constraint filter
#[derive(Debug, Clone, Copy)]
pub struct FilterInput<'a> {
    /// Full catalog
    pub catalog: &'a [ExerciseCatalogEntry],
    /// Equipment and split constraints
    pub constraints: &'a Constraints,
    /// Readiness, pain, and injuries
    pub fatigue: &'a FatigueState,
    /// Favorites and avoidances
    pub preferences: &'a UserPreferences,
    /// Past sessions
    pub history: &'a [WorkoutHistoryEntry],
}

/// Output of the constraint filter
#[derive(Debug, Clone, Default)]
pub struct FilteredPool<'a> {
    /// Final pool, stall-filtered unless that would have emptied it
    pub pool: Vec<&'a ExerciseCatalogEntry>,
    /// Pool before stall filtering
    pub pre_stall_pool: Vec<&'a ExerciseCatalogEntry>,
    /// Identifiers of stalled exercises
    pub stalled: BTreeSet<String>,
    /// Whether the stall stage fell back to the unfiltered pool
    pub stall_filter_reverted: bool,
}

/// Constraint filter pipeline
pub struct ConstraintFilter;

impl ConstraintFilter {
    /// Run every stage over the catalog
    pub fn apply<'a>(input: FilterInput<'a>, sink: &mut dyn DiagnosticsSink) -> FilteredPool<'a> {
        let pool: Vec<&ExerciseCatalogEntry> = input.catalog.iter().collect();
        debug!(stage = "catalog", size = pool.len());

        let pool = Self::filter_equipment(pool, input.constraints);
        debug!(stage = "equipment", size = pool.len());

        let pool = Self::filter_preferences(pool, input.preferences);
        debug!(stage = "preferences", size = pool.len());

        let pool = Self::filter_injuries(pool, input.fatigue);
        debug!(stage = "injuries", size = pool.len());

        let pool = Self::filter_pain(pool, input.fatigue);
        debug!(stage = "pain", size = pool.len());

        let pool = Self::filter_fatigue(pool, input.fatigue);
        debug!(stage = "fatigue", size = pool.len());

        let pool = Self::filter_split_integrity(pool, sink);
        debug!(stage = "split_integrity", size = pool.len());

        let stalled = detect_stalled(input.history);
        let (filtered, reverted) = Self::filter_stalled(&pool, &stalled);
        if reverted {
            sink.emit(DiagnosticEvent::StallFilterReverted {
                stalled_count: pool.iter().filter(|e| stalled.contains(&e.id)).count(),
            });
        }
        debug!(stage = "stall", size = filtered.len(), reverted);

        FilteredPool {
            pool: filtered,
            pre_stall_pool: pool,
            stalled,
            stall_filter_reverted: reverted,
        }
    }

    /// Keep exercises whose equipment intersects what is available
    ///
    /// Bodyweight is always available: exercises with no equipment requirement
    /// or tagged `bodyweight` are kept regardless of the gym.
    #[must_use]
    pub fn filter_equipment<'a>(
        pool: Vec<&'a ExerciseCatalogEntry>,
        constraints: &Constraints,
    ) -> Vec<&'a ExerciseCatalogEntry> {
        pool.into_iter()
            .filter(|entry| {
                entry.equipment.is_empty()
                    || entry.equipment.iter().any(|item| {
                        *item == Equipment::Bodyweight
                            || constraints.available_equipment.contains(item)
                    })
            })
            .collect()
    }

    /// Drop avoided exercises by id or normalized name
    #[must_use]
    pub fn filter_preferences<'a>(
        pool: Vec<&'a ExerciseCatalogEntry>,
        preferences: &UserPreferences,
    ) -> Vec<&'a ExerciseCatalogEntry> {
        pool.into_iter()
            .filter(|entry| !preferences.is_avoided(entry))
            .collect()
    }

    /// Drop high joint-stress exercises while a severe injury is active
    #[must_use]
    pub fn filter_injuries<'a>(
        pool: Vec<&'a ExerciseCatalogEntry>,
        fatigue: &FatigueState,
    ) -> Vec<&'a ExerciseCatalogEntry> {
        if fatigue.max_active_injury_severity() < thresholds::SEVERE_INJURY {
            return pool;
        }
        drop_high_joint_stress(pool)
    }

    /// Drop exercises contraindicated by significant pain
    ///
    /// Low-back pain also removes every hinge regardless of the contraindication map.
    #[must_use]
    pub fn filter_pain<'a>(
        pool: Vec<&'a ExerciseCatalogEntry>,
        fatigue: &FatigueState,
    ) -> Vec<&'a ExerciseCatalogEntry> {
        let painful: Vec<BodyPart> = fatigue
            .pain_flags
            .iter()
            .filter(|(_, severity)| **severity >= thresholds::PAIN_EXCLUSION)
            .map(|(part, _)| *part)
            .collect();
        if painful.is_empty() {
            return pool;
        }
        let low_back = painful.contains(&BodyPart::LowBack);

        pool.into_iter()
            .filter(|entry| !painful.iter().any(|part| entry.is_contraindicated(*part)))
            .filter(|entry| !(low_back && entry.has_pattern(MovementPattern::Hinge)))
            .collect()
    }

    /// Drop high joint-stress exercises at low readiness
    #[must_use]
    pub fn filter_fatigue<'a>(
        pool: Vec<&'a ExerciseCatalogEntry>,
        fatigue: &FatigueState,
    ) -> Vec<&'a ExerciseCatalogEntry> {
        if fatigue.readiness > thresholds::LOW_READINESS {
            return pool;
        }
        drop_high_joint_stress(pool)
    }

    /// Drop exercises tagged both push and pull, reporting each one
    pub fn filter_split_integrity<'a>(
        pool: Vec<&'a ExerciseCatalogEntry>,
        sink: &mut dyn DiagnosticsSink,
    ) -> Vec<&'a ExerciseCatalogEntry> {
        pool.into_iter()
            .filter(|entry| {
                if entry.is_dual_push_pull() {
                    sink.emit(DiagnosticEvent::DualTaggedExercise {
                        exercise_id: entry.id.clone(),
                        name: entry.name.clone(),
                    });
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    /// Remove stalled exercises unless that would leave nothing
    ///
    /// Returns the resulting pool and whether the unfiltered pool was kept.
    #[must_use]
    pub fn filter_stalled<'a>(
        pool: &[&'a ExerciseCatalogEntry],
        stalled: &BTreeSet<String>,
    ) -> (Vec<&'a ExerciseCatalogEntry>, bool) {
        let filtered: Vec<&ExerciseCatalogEntry> = pool
            .iter()
            .copied()
            .filter(|entry| !stalled.contains(&entry.id))
            .collect();
        if filtered.is_empty() && !pool.is_empty() {
            (pool.to_vec(), true)
        } else {
            (filtered, false)
        }
    }
}

fn drop_high_joint_stress(pool: Vec<&ExerciseCatalogEntry>) -> Vec<&ExerciseCatalogEntry> {
    pool.into_iter()
        .filter(|entry| entry.joint_stress != JointStress::High)
        .collect()
}

/// Identify exercises whose recent volume has not increased
///
/// For each exercise, the three most recent completed sessions containing it are
/// compared oldest to newest. If neither step shows a volume increase the
/// exercise is stalled. Exercises with fewer than three completed sessions are
/// never stalled.
#[must_use]
pub fn detect_stalled(history: &[WorkoutHistoryEntry]) -> BTreeSet<String> {
    let mut volumes: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for entry in WorkoutHistoryEntry::completed_newest_first(history) {
        for exercise in &entry.exercises {
            let recent = volumes.entry(exercise.exercise_id.as_str()).or_default();
            if recent.len() < thresholds::STALL_WINDOW {
                recent.push(exercise.volume());
            }
        }
    }

    volumes
        .into_iter()
        .filter(|(_, recent)| recent.len() == thresholds::STALL_WINDOW && !shows_increase(recent))
        .map(|(id, _)| id.to_owned())
        .collect()
}

/// `newest_first` volumes; true if any later session beat the one before it
fn shows_increase(newest_first: &[f64]) -> bool {
    newest_first.windows(2).any(|pair| pair[0] > pair[1])
}
