// ABOUTME: Deterministic strength session planning engine
// ABOUTME: Constraint filtering, weighted selection, prescription, recovery, and time budgeting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Planner Engine
//!
//! Produces a single workout session from an athlete's context and an exercise
//! catalog. The engine is a pure function of its inputs: every random choice goes
//! through a [`rng::SessionRng`] seeded by the caller, nothing reads the clock, and
//! nothing is persisted.
//!
//! Pipeline, leaf first:
//!
//! 1. [`constraint_filter`] narrows the catalog
//! 2. [`split_resolver`] resolves the day-tag and allowed patterns
//! 3. [`selection`] picks main lifts, accessories, warmup items, and add-ons
//! 4. [`prescription`] converts each pick into sets, reps, RPE, rest, and load
//! 5. [`sra`] produces recovery warnings for the targeted muscles
//! 6. [`time_budget`] trims accessories until the session fits
//!
//! [`generator::SessionGenerator`] wires the stages together.

/// Engine configuration with environment overrides
pub mod config;
/// Catalog narrowing by equipment, preferences, injuries, pain, fatigue, and stalls
pub mod constraint_filter;
/// Structured diagnostics emitted during generation
pub mod diagnostics;
/// Generation entry point
pub mod generator;
/// Set, rep, RPE, rest, and load prescription
pub mod prescription;
/// Seeded random source
pub mod rng;
/// Main-lift, accessory, warmup, and add-on selection
pub mod selection;
/// Day-tag and movement-pattern resolution
pub mod split_resolver;
/// Stimulus-recovery-adaptation model
pub mod sra;
/// Session duration estimation and accessory trimming
pub mod time_budget;

pub use config::EngineConfig;
pub use diagnostics::{CollectingDiagnostics, DiagnosticEvent, DiagnosticsSink, TracingDiagnostics};
pub use generator::{generate, GenerationOutcome, GenerationRequest, SessionGenerator};
pub use sra::{build_muscle_recovery_map, generate_sra_warnings, MuscleRecovery, SraWarning};
pub use time_budget::{enforce_time_budget, estimate_workout_minutes, BudgetOutcome};
