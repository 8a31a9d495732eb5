// ABOUTME: estimate subcommand - session duration for a saved plan
// ABOUTME: Accepts either a bare plan or a full generation outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{print_json, read_json};
use anyhow::{Context, Result};
use pierre_session_planner::models::WorkoutPlan;
use pierre_session_planner::{estimate_workout_minutes, EngineConfig, GenerationOutcome};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Outcome(Box<GenerationOutcome>),
    Plan(Box<WorkoutPlan>),
}

/// Print estimated minutes for a plan file
pub fn run(path: &Path) -> Result<()> {
    let plan = match read_json::<PlanFile>(path)? {
        PlanFile::Outcome(outcome) => outcome.plan,
        PlanFile::Plan(plan) => *plan,
    };
    let config = EngineConfig::from_env().context("loading engine configuration")?;
    let minutes = estimate_workout_minutes(&plan, &config.timing, &config.superset);
    print_json(
        &json!({
            "plan_id": plan.plan_id,
            "estimated_minutes": minutes,
            "recorded_minutes": plan.estimated_minutes,
        }),
        true,
    )
}
