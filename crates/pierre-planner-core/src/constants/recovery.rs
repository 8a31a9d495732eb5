// ABOUTME: Canonical muscle landmark table with default recovery windows
// ABOUTME: Drives the stimulus-recovery-adaptation map and its warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default recovery windows per muscle.
//!
//! Large, heavily loaded muscles (quads, hamstrings, spinal erectors) need the
//! longest windows; small muscles trained mostly with isolation work recover faster.
//!
//! References:
//! - Schoenfeld, B.J., Ogborn, D., & Krieger, J.W. (2016). Effects of resistance training
//!   frequency on measures of muscle hypertrophy. *Sports Medicine*, 46(11), 1689-1697.

/// Canonical muscle names paired with their default recovery window in hours.
///
/// Names are stored normalized (lowercase, single spaces) so they compare directly
/// against `normalize_name` output.
pub const MUSCLE_LANDMARKS: &[(&str, f64)] = &[
    ("chest", 60.0),
    ("lats", 60.0),
    ("upper back", 48.0),
    ("traps", 48.0),
    ("front delts", 48.0),
    ("side delts", 36.0),
    ("rear delts", 36.0),
    ("biceps", 48.0),
    ("triceps", 48.0),
    ("forearms", 36.0),
    ("quads", 72.0),
    ("hamstrings", 72.0),
    ("glutes", 72.0),
    ("adductors", 60.0),
    ("calves", 48.0),
    ("lower back", 72.0),
    ("abs", 36.0),
    ("obliques", 36.0),
];

/// Window used for muscles that are not in the landmark table
pub const DEFAULT_WINDOW_HOURS: f64 = 48.0;

/// Percent at which a muscle counts as recovered
pub const RECOVERED_PERCENT: u8 = 100;

/// Default recovery window for a normalized muscle name
#[must_use]
pub fn default_window_hours(muscle: &str) -> f64 {
    MUSCLE_LANDMARKS
        .iter()
        .find(|(name, _)| *name == muscle)
        .map_or(DEFAULT_WINDOW_HOURS, |(_, hours)| *hours)
}
