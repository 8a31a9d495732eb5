// ABOUTME: generate subcommand - builds a session from a JSON request
// ABOUTME: Applies seed and budget overrides and environment engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{print_json, read_json};
use anyhow::{Context, Result};
use pierre_session_planner::errors::AppError;
use pierre_session_planner::{EngineConfig, GenerationRequest, SessionGenerator, TracingDiagnostics};
use std::path::Path;
use tracing::info;

/// Generate a session and print the outcome
pub fn run(input: &Path, seed: Option<u64>, budget: Option<u32>, pretty: bool) -> Result<()> {
    let mut request: GenerationRequest = read_json(input)?;
    if let Some(seed) = seed {
        request.seed = seed;
    }
    if budget.is_some() {
        request.time_budget_minutes = budget;
    }

    let config = EngineConfig::from_env()
        .map_err(AppError::from)
        .context("loading engine configuration")?;
    let generator = SessionGenerator::new(config).map_err(AppError::from)?;
    let outcome = generator
        .generate(&request, &mut TracingDiagnostics)
        .map_err(AppError::from)
        .context("generating session")?;
    info!(
        plan_id = %outcome.plan.plan_id,
        minutes = outcome.plan.estimated_minutes,
        "Session generated"
    );
    print_json(&outcome, pretty)
}
