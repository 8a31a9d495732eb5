// ABOUTME: Session generation entry point wiring filter, selection, prescription, SRA, and budget
// ABOUTME: Pure function of its request: same inputs and seed yield an identical plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Generator
//!
//! ```text
//! request ─► validate ─► resolve day ─► constraint filter
//!                                           │
//!          main lifts ◄─────────────────────┤
//!          accessories, warmup, add-ons ◄───┘
//!                 │
//!          prescription ─► supersets ─► time budget ─► SRA notes ─► outcome
//! ```

use crate::config::EngineConfig;
use crate::constraint_filter::{ConstraintFilter, FilterInput};
use crate::diagnostics::{DiagnosticsSink, TracingDiagnostics};
use crate::prescription::Prescriber;
use crate::rng::SessionRng;
use crate::selection::{
    accessory_target, select_accessories, select_add_ons, select_main_lifts, select_warmup,
    SelectionContext,
};
use crate::split_resolver::{self, SessionFocus};
use crate::sra::{build_muscle_recovery_map, generate_sra_warnings, SraWarning};
use crate::time_budget::{enforce_time_budget, estimate_workout_minutes, whole_minutes};
use chrono::{DateTime, Utc};
use pierre_planner_core::constants::thresholds;
use pierre_planner_core::errors::PlannerError;
use pierre_planner_core::models::{
    normalize_name, Constraints, ExerciseCatalogEntry, ExerciseRole, FatigueState, Goals,
    PeriodizationModifiers, PlannedExercise, UserPreferences, WorkoutHistoryEntry, WorkoutPlan,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Everything one generation call consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Exercise catalog snapshot
    pub catalog: Vec<ExerciseCatalogEntry>,
    /// Equipment and split constraints
    #[serde(default)]
    pub constraints: Constraints,
    /// Readiness, pain, and injuries
    #[serde(default)]
    pub fatigue: FatigueState,
    /// Goals and training age
    #[serde(default)]
    pub goals: Goals,
    /// Favorites, avoidances, and opt-ins
    #[serde(default)]
    pub preferences: UserPreferences,
    /// Past sessions
    #[serde(default)]
    pub history: Vec<WorkoutHistoryEntry>,
    /// Periodization snapshot
    #[serde(default)]
    pub periodization: PeriodizationModifiers,
    /// Requested movement patterns for the day
    #[serde(default)]
    pub target_patterns: Vec<String>,
    /// Session length limit
    #[serde(default)]
    pub time_budget_minutes: Option<u32>,
    /// Random seed
    #[serde(default)]
    pub seed: u64,
    /// Reference time for recency and recovery
    pub now: DateTime<Utc>,
}

/// Result of a generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The finished plan
    pub plan: WorkoutPlan,
    /// Time-budget degradation notice
    pub degradation: Option<String>,
    /// Under-recovered target muscles
    pub sra_warnings: Vec<SraWarning>,
    /// Exercises detected as stalled
    pub stalled_exercise_ids: Vec<String>,
}

/// Session generator holding validated configuration
#[derive(Debug, Clone, Default)]
pub struct SessionGenerator {
    config: EngineConfig,
}

impl SessionGenerator {
    /// Create a generator after validating its configuration
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Config` if validation fails
    pub fn new(config: EngineConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate one session
    ///
    /// # Errors
    ///
    /// Returns an error for an empty catalog, out-of-range readiness or
    /// severities, unknown pattern names, or a day with no eligible exercises
    /// after every fallback
    #[instrument(skip_all, fields(seed = request.seed))]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<GenerationOutcome, PlannerError> {
        validate_request(request)?;
        let focus = split_resolver::resolve(&request.target_patterns, request.constraints.split_type)?;

        let filtered = ConstraintFilter::apply(
            FilterInput {
                catalog: &request.catalog,
                constraints: &request.constraints,
                fatigue: &request.fatigue,
                preferences: &request.preferences,
                history: &request.history,
            },
            sink,
        );

        let mut rng = SessionRng::from_seed(request.seed);
        let plan_id = rng.plan_id();
        let ctx = SelectionContext::new(&request.preferences, &request.history, request.now);

        let main = select_main_lifts(&focus, &filtered, &ctx, &request.fatigue, &mut rng, sink);
        let target = accessory_target(&self.config.slots, &request.fatigue, &request.periodization);
        let accessories = select_accessories(
            &focus,
            &filtered,
            &main.lifts,
            &ctx,
            &self.config.slots,
            target,
            &mut rng,
            sink,
        );
        if main.lifts.is_empty() && accessories.is_empty() {
            return Err(PlannerError::NoEligibleExercises {
                day_tag: focus.day_tag,
            });
        }

        let warmup = select_warmup(&filtered, &main.lifts, self.config.slots.warmup_items, &mut rng);
        let chosen: Vec<&ExerciseCatalogEntry> = warmup
            .iter()
            .chain(main.lifts.iter())
            .chain(accessories.iter())
            .copied()
            .collect();
        let add_ons = select_add_ons(&focus, &filtered, &request.goals, &ctx, &chosen, &mut rng);

        let prescriber = Prescriber {
            goals: &request.goals,
            fatigue: &request.fatigue,
            periodization: &request.periodization,
            preferences: &request.preferences,
            history: &request.history,
            config: &self.config.prescription,
            timing: &self.config.timing,
        };
        let prescribe = |entries: &[&ExerciseCatalogEntry], role| -> Vec<PlannedExercise> {
            entries.iter().map(|entry| prescriber.prescribe(entry, role)).collect()
        };

        let mut plan = WorkoutPlan {
            plan_id,
            seed: request.seed,
            day_tag: focus.day_tag,
            warmup: prescribe(&warmup, ExerciseRole::Warmup),
            main_lifts: prescribe(&main.lifts, ExerciseRole::MainLift),
            accessories: prescribe(&accessories, ExerciseRole::Accessory)
                .into_iter()
                .chain(prescribe(&add_ons, ExerciseRole::Accessory))
                .collect(),
            estimated_minutes: 0,
            notes: Vec::new(),
        };
        if request.preferences.allow_supersets {
            pair_supersets(&mut plan.accessories);
        }

        for slot in &main.unfilled_slots {
            plan.notes
                .push(format!("No {slot} main lift available for {} day", focus.day_tag));
        }
        if request.periodization.is_deload {
            plan.notes.push(format!(
                "Deload week: effort capped at RPE {}",
                self.config.prescription.deload_rpe_cap
            ));
        }

        plan.estimated_minutes = whole_minutes(estimate_workout_minutes(
            &plan,
            &self.config.timing,
            &self.config.superset,
        ));

        let (mut plan, degradation) = match request.time_budget_minutes {
            Some(budget) => {
                let outcome = enforce_time_budget(plan, budget, &self.config, sink);
                (outcome.plan, outcome.warning)
            }
            None => (plan, None),
        };

        // Warnings only cover muscles the trimmed session still trains
        let recovery = build_muscle_recovery_map(&request.history, &request.catalog, request.now);
        let sra_warnings = generate_sra_warnings(&recovery, &target_muscles(&plan));
        plan.notes.extend(sra_warnings.iter().map(ToString::to_string));
        if let Some(warning) = &degradation {
            plan.notes.push(warning.clone());
        }

        log_summary(&focus, &plan);
        Ok(GenerationOutcome {
            plan,
            degradation,
            sra_warnings,
            stalled_exercise_ids: filtered.stalled.into_iter().collect(),
        })
    }
}

/// Generate with default configuration, logging diagnostics through `tracing`
///
/// # Errors
///
/// See [`SessionGenerator::generate`]
pub fn generate(request: &GenerationRequest) -> Result<GenerationOutcome, PlannerError> {
    SessionGenerator::default().generate(request, &mut TracingDiagnostics)
}

fn validate_request(request: &GenerationRequest) -> Result<(), PlannerError> {
    if request.catalog.is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }
    let readiness = request.fatigue.readiness;
    if !(1..=thresholds::MAX_READINESS).contains(&readiness) {
        return Err(PlannerError::InvalidInput(format!(
            "readiness must be 1-{}, got {readiness}",
            thresholds::MAX_READINESS
        )));
    }
    let pain_out_of_range = request
        .fatigue
        .pain_flags
        .values()
        .any(|severity| *severity > thresholds::MAX_SEVERITY);
    let injury_out_of_range = request
        .fatigue
        .injuries
        .iter()
        .any(|injury| injury.severity > thresholds::MAX_SEVERITY);
    if pain_out_of_range || injury_out_of_range {
        return Err(PlannerError::InvalidInput(format!(
            "severity must be 0-{}",
            thresholds::MAX_SEVERITY
        )));
    }
    Ok(())
}

/// Pair accessories whose primary muscles do not overlap, in plan order
///
/// Group ids start at 1. Exercises without a compatible partner stay unpaired.
pub fn pair_supersets(accessories: &mut [PlannedExercise]) {
    let muscles: Vec<BTreeSet<String>> = accessories
        .iter()
        .map(|exercise| exercise.primary_muscles.iter().map(|m| normalize_name(m)).collect())
        .collect();
    let mut paired = vec![false; accessories.len()];
    let mut next_group = 1;

    for first in 0..accessories.len() {
        if paired[first] || accessories[first].is_main_lift() {
            continue;
        }
        let partner = (first + 1..accessories.len()).find(|&second| {
            !paired[second]
                && !accessories[second].is_main_lift()
                && muscles[first].is_disjoint(&muscles[second])
        });
        if let Some(second) = partner {
            paired[first] = true;
            paired[second] = true;
            accessories[first].superset_group = Some(next_group);
            accessories[second].superset_group = Some(next_group);
            next_group += 1;
        }
    }
}

fn target_muscles(plan: &WorkoutPlan) -> Vec<String> {
    plan.main_lifts
        .iter()
        .chain(plan.accessories.iter())
        .flat_map(|exercise| exercise.primary_muscles.iter().cloned())
        .collect()
}

fn log_summary(focus: &SessionFocus, plan: &WorkoutPlan) {
    info!(
        day_tag = %focus.day_tag,
        main_lifts = plan.main_lifts.len(),
        accessories = plan.accessories.len(),
        warmup = plan.warmup.len(),
        minutes = plan.estimated_minutes,
        "Generated session"
    );
}
