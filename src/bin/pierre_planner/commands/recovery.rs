// ABOUTME: recovery subcommand - per-muscle recovery map and warnings
// ABOUTME: Uses the request's history, catalog, and reference time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{print_json, read_json};
use anyhow::Result;
use pierre_session_planner::{build_muscle_recovery_map, generate_sra_warnings, GenerationRequest};
use std::path::Path;

/// Print the recovery map, or warnings for `muscles` when given
pub fn run(input: &Path, muscles: &[String]) -> Result<()> {
    let request: GenerationRequest = read_json(input)?;
    let map = build_muscle_recovery_map(&request.history, &request.catalog, request.now);
    if muscles.is_empty() {
        print_json(&map, true)
    } else {
        print_json(&generate_sra_warnings(&map, muscles), true)
    }
}
