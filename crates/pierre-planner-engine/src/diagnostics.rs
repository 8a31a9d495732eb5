// ABOUTME: Structured diagnostics emitted during session generation
// ABOUTME: Callers route events to their own observability stack through a sink
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diagnostics
//!
//! Data-integrity problems and degradations are reported, never thrown. The
//! engine hands every [`DiagnosticEvent`] to a caller-supplied [`DiagnosticsSink`].
//! [`TracingDiagnostics`] forwards them to `tracing`; [`CollectingDiagnostics`]
//! keeps them in memory.

use pierre_planner_core::models::DayTag;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Something worth surfacing that did not stop generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    /// Exercise tagged both push and pull was dropped
    DualTaggedExercise {
        /// Catalog identifier
        exercise_id: String,
        /// Display name
        name: String,
    },
    /// Every candidate was stalled, so the unfiltered pool was kept
    StallFilterReverted {
        /// Number of stalled exercises
        stalled_count: usize,
    },
    /// A main-lift slot used the fallback pool
    MainLiftFallback {
        /// Slot label
        slot: String,
        /// Exercise picked from the fallback pool
        exercise_id: String,
    },
    /// A main-lift slot could not be filled
    SlotUnfilled {
        /// Day-tag of the session
        day_tag: DayTag,
        /// Slot label
        slot: String,
    },
    /// Fewer accessories than the configured minimum were available
    AccessoryShortfall {
        /// Accessories placed
        selected: usize,
        /// Configured minimum
        minimum: usize,
    },
    /// The time budget could not be met
    BudgetUnsatisfiable {
        /// Requested budget
        budget_minutes: u32,
        /// Estimate after trimming
        estimated_minutes: u32,
    },
}

/// Receiver for diagnostic events
pub trait DiagnosticsSink {
    /// Record one event
    fn emit(&mut self, event: DiagnosticEvent);
}

/// Sink that logs every event through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn emit(&mut self, event: DiagnosticEvent) {
        match &event {
            DiagnosticEvent::DualTaggedExercise { exercise_id, name } => {
                warn!(exercise_id = %exercise_id, name = %name, "Dropping exercise tagged both push and pull");
            }
            DiagnosticEvent::StallFilterReverted { stalled_count } => {
                warn!(stalled_count, "All candidates stalled; keeping unfiltered pool");
            }
            DiagnosticEvent::MainLiftFallback { slot, exercise_id } => {
                warn!(slot = %slot, exercise_id = %exercise_id, "Main-lift slot filled from fallback pool");
            }
            DiagnosticEvent::SlotUnfilled { day_tag, slot } => {
                warn!(day_tag = %day_tag, slot = %slot, "Main-lift slot left empty");
            }
            DiagnosticEvent::AccessoryShortfall { selected, minimum } => {
                warn!(selected, minimum, "Accessory pool below minimum");
            }
            DiagnosticEvent::BudgetUnsatisfiable {
                budget_minutes,
                estimated_minutes,
            } => {
                warn!(budget_minutes, estimated_minutes, "Session exceeds time budget");
            }
        }
    }
}

/// Sink that keeps events in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingDiagnostics {
    events: Vec<DiagnosticEvent>,
}

impl CollectingDiagnostics {
    /// Create an empty collector
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events recorded so far, in emission order
    #[must_use]
    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }

    /// Consume the collector, returning its events
    #[must_use]
    pub fn into_events(self) -> Vec<DiagnosticEvent> {
        self.events
    }
}

impl DiagnosticsSink for CollectingDiagnostics {
    fn emit(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }
}
