// ABOUTME: Converts selected exercises into concrete sets, reps, RPE, rest, and load
// ABOUTME: Reconciles goal rep ranges with exercise hints and applies fatigue and periodization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prescription Calculator
//!
//! Rules, in the order they apply:
//!
//! - Rep range: goal range intersected with the exercise hint; an empty overlap
//!   falls back to the hint. Narrow accessory ranges widen upward first.
//! - Sets: goal base x training-age modifier, one readiness/missed-session
//!   penalty, then the periodization multiplier. Never below two.
//! - RPE: goal and training-age base (or the athlete's reps-to-RPE table),
//!   readiness and isolation adjustments, periodization offset, deload cap.
//! - Rest: decision table by role, reps, and fatigue cost.
//! - Load: repeat or progress the last completed top load.

use crate::config::{PrescriptionConfig, TimingConfig};
use pierre_planner_core::constants::{load, reps, rest, rpe, sets, thresholds};
use pierre_planner_core::models::{
    ExerciseCatalogEntry, ExerciseRole, FatigueState, Goals, PeriodizationModifiers,
    PlannedExercise, PlannedSet, PrimaryGoal, RepRange, SetKind, TrainingAge, UserPreferences,
    WorkoutHistoryEntry,
};

/// Goal rep range for main lifts or accessories
#[must_use]
pub const fn goal_rep_range(goal: PrimaryGoal, is_main_lift: bool) -> RepRange {
    match (goal, is_main_lift) {
        (PrimaryGoal::Strength, true) => RepRange::new(3, 5),
        (PrimaryGoal::Strength | PrimaryGoal::Athleticism, false) => RepRange::new(6, 10),
        (PrimaryGoal::Athleticism, true) => RepRange::new(3, 6),
        (PrimaryGoal::Hypertrophy | PrimaryGoal::FatLoss | PrimaryGoal::GeneralHealth, true) => {
            RepRange::new(6, 10)
        }
        (PrimaryGoal::Hypertrophy, false) => RepRange::new(8, 12),
        (PrimaryGoal::FatLoss | PrimaryGoal::GeneralHealth, false) => RepRange::new(10, 15),
    }
}

/// Intersect the goal range with the exercise hint
///
/// An empty intersection yields the hint itself, never the goal range.
#[must_use]
pub fn clamp_rep_range(goal: RepRange, hint: Option<RepRange>) -> RepRange {
    match hint {
        Some(hint) => goal.intersect(&hint).unwrap_or(hint),
        None => goal,
    }
}

/// Widen a collapsed accessory range inside the exercise hint
///
/// Upward first, keeping progression headroom; downward only if the hint's
/// ceiling stops upward widening short of the minimum span.
#[must_use]
pub fn widen_accessory_range(clamped: RepRange, hint: Option<RepRange>) -> RepRange {
    let Some(hint) = hint else {
        return clamped;
    };
    if clamped.span() >= reps::MIN_ACCESSORY_SPAN || hint.span() <= clamped.span() {
        return clamped;
    }
    let max = hint.max.min(clamped.min + reps::MIN_ACCESSORY_SPAN);
    let min = if max - clamped.min >= reps::MIN_ACCESSORY_SPAN {
        clamped.min
    } else {
        hint.min.max(max.saturating_sub(reps::MIN_ACCESSORY_SPAN))
    };
    RepRange::new(min, max)
}

/// Working set count
///
/// One penalty applies when readiness is low or the last session was missed;
/// the two never stack.
#[must_use]
pub fn set_count(
    is_main_lift: bool,
    goals: &Goals,
    fatigue: &FatigueState,
    periodization: &PeriodizationModifiers,
    revised_fat_loss: bool,
) -> u32 {
    let base = match (is_main_lift, revised_fat_loss && goals.primary == PrimaryGoal::FatLoss) {
        (true, false) => sets::MAIN_LIFT_BASE,
        (false, false) => sets::ACCESSORY_BASE,
        (true, true) => sets::FAT_LOSS_REVISED_MAIN_BASE,
        (false, true) => sets::FAT_LOSS_REVISED_ACCESSORY_BASE,
    };
    let modifier = match goals.training_age {
        TrainingAge::Beginner => sets::BEGINNER_MODIFIER,
        TrainingAge::Intermediate => sets::INTERMEDIATE_MODIFIER,
        TrainingAge::Advanced => sets::ADVANCED_MODIFIER,
    };
    let mut count = round_to_sets(base * modifier).max(sets::MIN_SETS);
    if fatigue.readiness <= thresholds::LOW_READINESS || fatigue.missed_last_session {
        count = count.saturating_sub(sets::FATIGUE_PENALTY);
    }
    round_to_sets(f64::from(count) * periodization.set_multiplier).max(sets::MIN_SETS)
}

fn round_to_sets(value: f64) -> u32 {
    // Safe: set counts are small positive values
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = value.round().max(0.0) as u32;
    rounded
}

/// Base RPE for a goal and training age
#[must_use]
pub const fn base_rpe(goal: PrimaryGoal, age: TrainingAge) -> f64 {
    match (goal, age) {
        (
            PrimaryGoal::Strength | PrimaryGoal::FatLoss | PrimaryGoal::Athleticism,
            TrainingAge::Beginner,
        )
        | (PrimaryGoal::GeneralHealth, TrainingAge::Intermediate) => 7.0,
        (PrimaryGoal::Strength | PrimaryGoal::Hypertrophy, TrainingAge::Intermediate)
        | (PrimaryGoal::FatLoss | PrimaryGoal::Athleticism, TrainingAge::Advanced) => 8.0,
        (PrimaryGoal::Strength | PrimaryGoal::Hypertrophy, TrainingAge::Advanced) => 8.5,
        (PrimaryGoal::Hypertrophy, TrainingAge::Beginner)
        | (PrimaryGoal::FatLoss | PrimaryGoal::Athleticism, TrainingAge::Intermediate)
        | (PrimaryGoal::GeneralHealth, TrainingAge::Advanced) => 7.5,
        (PrimaryGoal::GeneralHealth, TrainingAge::Beginner) => 6.5,
    }
}

/// Rest after a working set
#[must_use]
pub const fn rest_seconds(is_main_lift: bool, compound: bool, fatigue_cost: u8, target_reps: u32) -> u32 {
    let high_fatigue = fatigue_cost >= rest::HIGH_FATIGUE_COST;
    if is_main_lift {
        match (target_reps <= rest::HEAVY_REP_THRESHOLD, high_fatigue) {
            (true, true) => rest::MAIN_HEAVY_HIGH_FATIGUE,
            (true, false) => rest::MAIN_HEAVY,
            (false, true) => rest::MAIN_MODERATE_HIGH_FATIGUE,
            (false, false) => rest::MAIN_MODERATE,
        }
    } else if compound {
        if target_reps <= rest::COMPOUND_ACCESSORY_REP_THRESHOLD {
            rest::COMPOUND_ACCESSORY_LOW_REPS
        } else {
            rest::COMPOUND_ACCESSORY
        }
    } else if fatigue_cost >= rest::MODERATE_FATIGUE_COST {
        rest::ISOLATION_HIGH_FATIGUE
    } else {
        rest::ISOLATION
    }
}

/// Round to the nearest half step
#[must_use]
pub fn round_half(value: f64) -> f64 {
    (value / load::ROUNDING_STEP).round() * load::ROUNDING_STEP
}

/// Per-call prescription context
#[derive(Debug, Clone, Copy)]
pub struct Prescriber<'a> {
    /// Goals and training age
    pub goals: &'a Goals,
    /// Readiness and missed-session state
    pub fatigue: &'a FatigueState,
    /// Periodization snapshot
    pub periodization: &'a PeriodizationModifiers,
    /// Reps-to-RPE overrides
    pub preferences: &'a UserPreferences,
    /// Completed history for load targets
    pub history: &'a [WorkoutHistoryEntry],
    /// Set, RPE, and load policy
    pub config: &'a PrescriptionConfig,
    /// Warmup rest
    pub timing: &'a TimingConfig,
}

impl Prescriber<'_> {
    /// Target RPE for a working set
    #[must_use]
    pub fn target_rpe(&self, entry: &ExerciseCatalogEntry, is_main_lift: bool, target_reps: u32) -> f64 {
        let mut value = self
            .preferences
            .rpe_by_reps
            .as_ref()
            .and_then(|table| table.get(&target_reps).copied())
            .unwrap_or_else(|| base_rpe(self.goals.primary, self.goals.training_age));
        if self.fatigue.readiness <= thresholds::LOW_READINESS {
            value += rpe::LOW_READINESS_ADJUSTMENT;
        }
        if !is_main_lift && !entry.compound && self.goals.primary == PrimaryGoal::Hypertrophy {
            value += rpe::HYPERTROPHY_ISOLATION_BONUS;
        }
        value += self.periodization.rpe_offset;
        self.cap(round_half(value))
    }

    fn cap(&self, value: f64) -> f64 {
        let value = value.clamp(rpe::FLOOR, rpe::CEILING);
        if self.periodization.is_deload {
            value.min(self.config.deload_rpe_cap)
        } else {
            value
        }
    }

    /// Rep range an exercise is prescribed in
    #[must_use]
    pub fn rep_range(&self, entry: &ExerciseCatalogEntry, is_main_lift: bool) -> RepRange {
        let goal = goal_rep_range(self.goals.primary, is_main_lift);
        let clamped = clamp_rep_range(goal, entry.rep_range);
        if is_main_lift {
            clamped
        } else {
            widen_accessory_range(clamped, entry.rep_range)
        }
    }

    /// Suggested top load from the most recent completed session with the exercise
    ///
    /// Progresses when every recorded set reached the top of `range`.
    #[must_use]
    pub fn target_load(&self, exercise_id: &str, range: RepRange) -> Option<f64> {
        let previous = WorkoutHistoryEntry::completed_newest_first(self.history)
            .into_iter()
            .find_map(|entry| entry.exercise(exercise_id))?;
        let top = previous.top_load()?;
        let progressed = !previous.sets.is_empty()
            && previous.sets.iter().all(|set| set.reps >= range.max);
        let next = if progressed {
            let increment = (top * self.config.load_increment_percent / 100.0).max(load::MIN_INCREMENT);
            round_half(top + increment)
        } else {
            top
        };
        if self.periodization.is_deload {
            Some(round_half(next * self.config.deload_load_factor))
        } else {
            Some(next)
        }
    }

    /// Fully prescribe one selected exercise
    #[must_use]
    pub fn prescribe(&self, entry: &ExerciseCatalogEntry, role: ExerciseRole) -> PlannedExercise {
        let mut planned = PlannedExercise::from_catalog(entry, role);
        planned.sets = match role {
            ExerciseRole::Warmup => self.warmup_sets(entry),
            ExerciseRole::MainLift => self.main_lift_sets(entry),
            ExerciseRole::Accessory => self.accessory_sets(entry),
        };
        planned
    }

    fn warmup_sets(&self, entry: &ExerciseCatalogEntry) -> Vec<PlannedSet> {
        let reps = entry.rep_range.map_or(sets::WARMUP_ITEM_REPS, |hint| hint.min);
        (1..=sets::WARMUP_ITEM_SETS)
            .map(|set_number| PlannedSet {
                set_number,
                kind: SetKind::Warmup,
                target_reps: reps,
                rep_range: None,
                target_rpe: self.cap(rpe::WARMUP_ITEM),
                rest_seconds: self.timing.warmup_rest_seconds,
                target_load: None,
            })
            .collect()
    }

    fn main_lift_sets(&self, entry: &ExerciseCatalogEntry) -> Vec<PlannedSet> {
        let range = self.rep_range(entry, true);
        let count = set_count(
            true,
            self.goals,
            self.fatigue,
            self.periodization,
            self.config.revised_fat_loss_set_policy,
        );
        let reps = range.min;
        let top_rpe = self.target_rpe(entry, true, reps);
        let rest = rest_seconds(true, entry.compound, entry.fatigue_cost, reps);
        let top_load = self.target_load(&entry.id, range);

        let deload = self.periodization.is_deload;
        let backoff_rpe = self.cap(top_rpe - self.config.backoff_rpe_drop);
        let backoff_load = top_load.map(|load| round_half(load * self.periodization.backoff_multiplier));

        (1..=count)
            .map(|set_number| {
                let (kind, target_rpe, target_load) = if deload {
                    (SetKind::Working, top_rpe, top_load)
                } else if set_number == 1 {
                    (SetKind::Top, top_rpe, top_load)
                } else {
                    (SetKind::BackOff, backoff_rpe, backoff_load)
                };
                PlannedSet {
                    set_number,
                    kind,
                    target_reps: reps,
                    rep_range: Some(range),
                    target_rpe,
                    rest_seconds: rest,
                    target_load,
                }
            })
            .collect()
    }

    fn accessory_sets(&self, entry: &ExerciseCatalogEntry) -> Vec<PlannedSet> {
        let range = self.rep_range(entry, false);
        let count = set_count(
            false,
            self.goals,
            self.fatigue,
            self.periodization,
            self.config.revised_fat_loss_set_policy,
        );
        let reps = range.min;
        let target_rpe = self.target_rpe(entry, false, reps);
        let rest = rest_seconds(false, entry.compound, entry.fatigue_cost, reps);
        let target_load = self.target_load(&entry.id, range);

        (1..=count)
            .map(|set_number| PlannedSet {
                set_number,
                kind: SetKind::Working,
                target_reps: reps,
                rep_range: Some(range),
                target_rpe,
                rest_seconds: rest,
                target_load,
            })
            .collect()
    }
}
