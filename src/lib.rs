// ABOUTME: Library facade for the Pierre session planner
// ABOUTME: Re-exports the core vocabulary and engine entry points, and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Session Planner
//!
//! Deterministic generation of a single strength session (warmup, main lifts,
//! accessories) with set, rep, RPE, and rest prescriptions, trimmed to a time
//! budget and annotated with muscle-recovery warnings.
//!
//! ## Architecture
//!
//! - **`pierre-planner-core`**: catalog, athlete, history, and plan models; error types; constants
//! - **`pierre-planner-engine`**: filtering, selection, prescription, recovery, time budgeting
//! - **this crate**: facade re-exports, logging, and the `pierre-planner` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_session_planner::{generate, GenerationRequest};
//!
//! fn plan(request: &GenerationRequest) -> anyhow::Result<()> {
//!     let outcome = generate(request)?;
//!     println!("{} minutes", outcome.plan.estimated_minutes);
//!     Ok(())
//! }
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

pub use pierre_planner_core::{constants, errors, models};
pub use pierre_planner_engine::{
    build_muscle_recovery_map, config, diagnostics, enforce_time_budget, estimate_workout_minutes,
    generate, generate_sra_warnings, BudgetOutcome, CollectingDiagnostics, DiagnosticEvent,
    DiagnosticsSink, EngineConfig, GenerationOutcome, GenerationRequest, MuscleRecovery,
    SessionGenerator, SraWarning, TracingDiagnostics,
};
