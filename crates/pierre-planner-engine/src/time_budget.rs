// ABOUTME: Session duration estimation with superset rest sharing
// ABOUTME: Greedy accessory trimming by retention score; main lifts are never removed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Time Budget Enforcer
//!
//! Estimation: every set costs its work seconds plus its rest. Main lifts also
//! carry ramp-up sets. A superset group with exactly two accessories is timed
//! per round: both members' work, then one shared rest.
//!
//! Enforcement removes the lowest-retention accessory one at a time until the
//! plan fits. If the main lifts alone exceed the budget nothing is removed.

use crate::config::{EngineConfig, RetentionWeights, SupersetTiming, TimingConfig};
use crate::diagnostics::{DiagnosticEvent, DiagnosticsSink};
use pierre_planner_core::constants::retention;
use pierre_planner_core::models::{normalize_name, PlannedExercise, PlannedSet, WorkoutPlan};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Result of budget enforcement
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOutcome {
    /// Plan after trimming
    pub plan: WorkoutPlan,
    /// Degradation notice when the budget could not be met
    pub warning: Option<String>,
    /// Identifiers of removed accessories, in removal order
    pub removed: Vec<String>,
}

/// Work seconds for one set
fn work_seconds(exercise: &PlannedExercise, set: &PlannedSet, timing: &TimingConfig) -> f64 {
    let seconds = exercise.seconds_per_set.unwrap_or_else(|| {
        (set.target_reps * timing.seconds_per_rep).clamp(timing.min_work_seconds, timing.max_work_seconds)
    });
    f64::from(seconds)
}

fn standalone_seconds(exercise: &PlannedExercise, sets: &[PlannedSet], timing: &TimingConfig) -> f64 {
    sets.iter()
        .map(|set| work_seconds(exercise, set, timing) + f64::from(set.rest_seconds))
        .sum()
}

fn ramp_up_seconds(exercise: &PlannedExercise, timing: &TimingConfig) -> f64 {
    exercise.sets.first().map_or(0.0, |first| {
        f64::from(timing.main_lift_warmup_sets)
            * (work_seconds(exercise, first, timing) + f64::from(timing.warmup_rest_seconds))
    })
}

fn superset_seconds(
    a: &PlannedExercise,
    b: &PlannedExercise,
    timing: &TimingConfig,
    superset: &SupersetTiming,
) -> f64 {
    let shared_rest = f64::from(
        superset.shared_rest_seconds(a.standalone_rest_seconds(), b.standalone_rest_seconds()),
    );
    let rounds = a.sets.len().min(b.sets.len());
    let paired: f64 = a
        .sets
        .iter()
        .zip(b.sets.iter())
        .map(|(set_a, set_b)| work_seconds(a, set_a, timing) + work_seconds(b, set_b, timing) + shared_rest)
        .sum();
    paired
        + standalone_seconds(a, &a.sets[rounds..], timing)
        + standalone_seconds(b, &b.sets[rounds..], timing)
}

/// Estimated session length in seconds
#[must_use]
pub fn estimate_workout_seconds(
    plan: &WorkoutPlan,
    timing: &TimingConfig,
    superset: &SupersetTiming,
) -> f64 {
    let warmup: f64 = plan
        .warmup
        .iter()
        .map(|exercise| standalone_seconds(exercise, &exercise.sets, timing))
        .sum();
    let main: f64 = plan
        .main_lifts
        .iter()
        .map(|exercise| standalone_seconds(exercise, &exercise.sets, timing) + ramp_up_seconds(exercise, timing))
        .sum();

    let mut groups: BTreeMap<u32, Vec<&PlannedExercise>> = BTreeMap::new();
    let mut accessories = 0.0;
    for exercise in &plan.accessories {
        match exercise.superset_group {
            Some(group) if !exercise.is_main_lift() => groups.entry(group).or_default().push(exercise),
            _ => accessories += standalone_seconds(exercise, &exercise.sets, timing),
        }
    }
    for members in groups.values() {
        accessories += match members.as_slice() {
            [a, b] => superset_seconds(a, b, timing, superset),
            other => other
                .iter()
                .map(|exercise| standalone_seconds(exercise, &exercise.sets, timing))
                .sum(),
        };
    }

    warmup + main + accessories
}

/// Estimated session length in minutes
#[must_use]
pub fn estimate_workout_minutes(
    plan: &WorkoutPlan,
    timing: &TimingConfig,
    superset: &SupersetTiming,
) -> f64 {
    estimate_workout_seconds(plan, timing, superset) / 60.0
}

/// Whole minutes for display, rounded up
#[must_use]
pub fn whole_minutes(minutes: f64) -> u32 {
    // Safe: session lengths are small positive values
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = minutes.max(0.0).ceil() as u32;
    whole
}

fn normalized_score(score: u8, low: f64) -> f64 {
    (f64::from(score) - retention::SCORE_MIDPOINT).clamp(low, retention::SCORE_HALF_SPAN)
        / retention::SCORE_HALF_SPAN
}

/// Retention score of an accessory; higher means keep
///
/// `coverage x uncovered + sfr x norm(sfr) + length x norm(length)
///  - redundancy x shared primaries - fatigue x norm+(fatigue)`
#[must_use]
pub fn retention_score(
    candidate: &PlannedExercise,
    plan: &WorkoutPlan,
    weights: &RetentionWeights,
) -> f64 {
    let main_covered: BTreeSet<String> = plan
        .main_lifts
        .iter()
        .flat_map(|lift| lift.primary_muscles.iter().map(|m| normalize_name(m)))
        .collect();

    let uncovered = |muscles: &[String]| {
        muscles
            .iter()
            .map(|m| normalize_name(m))
            .filter(|m| !main_covered.contains(m))
            .count()
    };
    #[allow(clippy::cast_precision_loss)]
    let coverage = uncovered(&candidate.primary_muscles) as f64
        + weights.secondary_muscle_weight * uncovered(&candidate.secondary_muscles) as f64;

    let others: BTreeSet<String> = plan
        .accessories
        .iter()
        .filter(|other| other.exercise_id != candidate.exercise_id)
        .flat_map(|other| other.primary_muscles.iter().map(|m| normalize_name(m)))
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let redundancy = candidate
        .primary_muscles
        .iter()
        .map(|m| normalize_name(m))
        .filter(|m| others.contains(m))
        .count() as f64;

    weights.coverage * coverage
        + weights.sfr * normalized_score(candidate.stimulus_fit, -retention::SCORE_HALF_SPAN)
        + weights.length_position * normalized_score(candidate.length_position, -retention::SCORE_HALF_SPAN)
        - weights.redundancy * redundancy
        - weights.fatigue * normalized_score(candidate.fatigue_cost, 0.0)
}

/// Index of the accessory to remove next
fn lowest_retention(plan: &WorkoutPlan, weights: &RetentionWeights) -> Option<usize> {
    let scored: Vec<(usize, f64)> = plan
        .accessories
        .iter()
        .enumerate()
        .map(|(index, exercise)| (index, retention_score(exercise, plan, weights)))
        .collect();
    scored
        .into_iter()
        .min_by(|(a_index, a_score), (b_index, b_score)| {
            let a = &plan.accessories[*a_index];
            let b = &plan.accessories[*b_index];
            a_score
                .partial_cmp(b_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.fatigue_cost.cmp(&a.fatigue_cost))
                .then_with(|| a.name.cmp(&b.name))
        })
        .map(|(index, _)| index)
}

fn remove_accessory(plan: &mut WorkoutPlan, index: usize) -> PlannedExercise {
    let removed = plan.accessories.remove(index);
    if let Some(group) = removed.superset_group {
        for partner in plan
            .accessories
            .iter_mut()
            .filter(|other| other.superset_group == Some(group))
        {
            partner.superset_group = None;
        }
    }
    removed
}

/// Trim accessories until the plan fits `budget_minutes`
///
/// Main lifts are never removed. When they alone exceed the budget, the plan is
/// returned untouched with a warning. When accessories run out before the plan
/// fits, the trimmed plan is returned with a warning.
pub fn enforce_time_budget(
    plan: WorkoutPlan,
    budget_minutes: u32,
    config: &EngineConfig,
    sink: &mut dyn DiagnosticsSink,
) -> BudgetOutcome {
    let budget = f64::from(budget_minutes);
    let estimate = |plan: &WorkoutPlan| estimate_workout_minutes(plan, &config.timing, &config.superset);
    let mut plan = plan;

    let total = estimate(&plan);
    plan.estimated_minutes = whole_minutes(total);
    if total <= budget {
        return BudgetOutcome {
            plan,
            warning: None,
            removed: Vec::new(),
        };
    }

    let main_only = WorkoutPlan {
        warmup: Vec::new(),
        accessories: Vec::new(),
        ..plan.clone()
    };
    let main_minutes = estimate(&main_only);
    if main_minutes > budget {
        sink.emit(DiagnosticEvent::BudgetUnsatisfiable {
            budget_minutes,
            estimated_minutes: plan.estimated_minutes,
        });
        let warning = format!(
            "Main lifts alone need about {} min, over the {budget_minutes} min budget; plan left unchanged",
            whole_minutes(main_minutes)
        );
        return BudgetOutcome {
            plan,
            warning: Some(warning),
            removed: Vec::new(),
        };
    }

    let mut removed = Vec::new();
    let mut total = total;
    while total > budget {
        let Some(index) = lowest_retention(&plan, &config.retention) else {
            break;
        };
        let exercise = remove_accessory(&mut plan, index);
        total = estimate(&plan);
        debug!(exercise_id = %exercise.exercise_id, minutes = total, "Trimmed accessory");
        removed.push(exercise.exercise_id);
    }
    plan.estimated_minutes = whole_minutes(total);

    let warning = if total > budget {
        sink.emit(DiagnosticEvent::BudgetUnsatisfiable {
            budget_minutes,
            estimated_minutes: plan.estimated_minutes,
        });
        Some(format!(
            "Session still needs about {} min after removing every accessory; budget is {budget_minutes} min",
            plan.estimated_minutes
        ))
    } else {
        None
    };
    info!(removed = removed.len(), minutes = plan.estimated_minutes, "Time budget enforced");

    BudgetOutcome {
        plan,
        warning,
        removed,
    }
}
