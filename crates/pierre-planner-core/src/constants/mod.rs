// ABOUTME: Training constants with domain-separated organization
// ABOUTME: Rep ranges, RPE tables, rest decision thresholds, selection weights, recovery landmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by the engine stage that consumes them. Values the
//! product team tunes at runtime (retention weights, superset timing, deload cap)
//! live in the engine configuration instead; the defaults for those are here.

/// Canonical muscle recovery landmarks
pub mod recovery;

/// Severity and readiness thresholds used by the constraint filter
pub mod thresholds {
    /// Injury severity at which high joint-stress exercises are excluded
    pub const SEVERE_INJURY: u8 = 3;
    /// Pain severity at which contraindicated exercises are excluded
    pub const PAIN_EXCLUSION: u8 = 2;
    /// Readiness at or below which the athlete is treated as fatigued
    pub const LOW_READINESS: u8 = 2;
    /// Readiness at or above which the slotter aims for the maximum accessory count
    pub const HIGH_READINESS: u8 = 4;
    /// Number of most recent completed sessions inspected by stall detection
    pub const STALL_WINDOW: usize = 3;
    /// Highest valid readiness score
    pub const MAX_READINESS: u8 = 5;
    /// Highest valid pain or injury severity
    pub const MAX_SEVERITY: u8 = 3;
}

/// Weighted selection multipliers
pub mod selection {
    /// Weight bias applied to favorite exercises
    pub const FAVORITE_BIAS: f64 = 3.0;
    /// Weight bias applied to every other exercise
    pub const DEFAULT_BIAS: f64 = 1.0;
    /// Lower bound on the bias term
    pub const MIN_BIAS: f64 = 0.1;

    /// Trained within this many hours: strongest recency decay
    pub const RECENT_HOURS_STRONG: f64 = 48.0;
    /// Trained within this many hours: moderate recency decay
    pub const RECENT_HOURS_MODERATE: f64 = 96.0;
    /// Trained within this many hours: light recency decay
    pub const RECENT_HOURS_LIGHT: f64 = 168.0;
    /// Multiplier for exercises trained within `RECENT_HOURS_STRONG`
    pub const RECENCY_STRONG: f64 = 0.25;
    /// Multiplier for exercises trained within `RECENT_HOURS_MODERATE`
    pub const RECENCY_MODERATE: f64 = 0.5;
    /// Multiplier for exercises trained within `RECENT_HOURS_LIGHT`
    pub const RECENCY_LIGHT: f64 = 0.8;

    /// Multiplier for exercises absent from history
    pub const NOVELTY_NEVER: f64 = 1.5;
    /// Multiplier for exercises trained at most `RARE_SESSION_COUNT` times
    pub const NOVELTY_RARE: f64 = 1.2;
    /// Session count still considered "rarely trained"
    pub const RARE_SESSION_COUNT: usize = 2;

    /// Main lifts targeted per session
    pub const MAIN_LIFT_TARGET: usize = 2;
}

/// Set-count prescription
pub mod sets {
    /// Base working sets for a main lift
    pub const MAIN_LIFT_BASE: f64 = 4.0;
    /// Base working sets for an accessory
    pub const ACCESSORY_BASE: f64 = 3.0;
    /// Base main-lift sets under the revised fat-loss policy
    pub const FAT_LOSS_REVISED_MAIN_BASE: f64 = 3.0;
    /// Base accessory sets under the revised fat-loss policy
    pub const FAT_LOSS_REVISED_ACCESSORY_BASE: f64 = 2.0;
    /// Training-age modifier for beginners
    pub const BEGINNER_MODIFIER: f64 = 0.85;
    /// Training-age modifier for intermediates
    pub const INTERMEDIATE_MODIFIER: f64 = 1.0;
    /// Training-age modifier for advanced lifters
    pub const ADVANCED_MODIFIER: f64 = 1.15;
    /// Set count never drops below this
    pub const MIN_SETS: u32 = 2;
    /// Single fatigue penalty (readiness or missed session, not both)
    pub const FATIGUE_PENALTY: u32 = 1;
    /// Sets prescribed for warmup-list items
    pub const WARMUP_ITEM_SETS: u32 = 2;
    /// Reps prescribed for warmup-list items without a rep-range hint
    pub const WARMUP_ITEM_REPS: u32 = 10;
}

/// Rep-range prescription
pub mod reps {
    /// Minimum span kept open for accessory double progression
    pub const MIN_ACCESSORY_SPAN: u32 = 2;
}

/// RPE prescription
pub mod rpe {
    /// Adjustment applied at low readiness
    pub const LOW_READINESS_ADJUSTMENT: f64 = -0.5;
    /// Bonus for isolation accessories on a hypertrophy goal
    pub const HYPERTROPHY_ISOLATION_BONUS: f64 = 0.5;
    /// Lowest RPE ever prescribed for working sets
    pub const FLOOR: f64 = 5.0;
    /// Highest RPE ever prescribed
    pub const CEILING: f64 = 10.0;
    /// RPE used for warmup-list items
    pub const WARMUP_ITEM: f64 = 5.0;
    /// Default RPE ceiling during a deload
    pub const DEFAULT_DELOAD_CAP: f64 = 7.0;
    /// Default drop from top set to back-off sets
    pub const DEFAULT_BACKOFF_DROP: f64 = 0.5;
}

/// Rest decision table (seconds)
pub mod rest {
    /// Rep count at or below which a main-lift set is "heavy"
    pub const HEAVY_REP_THRESHOLD: u32 = 5;
    /// Rep count at or below which a compound accessory gets the longer rest
    pub const COMPOUND_ACCESSORY_REP_THRESHOLD: u32 = 8;
    /// Fatigue cost from which main lifts rest longer
    pub const HIGH_FATIGUE_COST: u8 = 4;
    /// Fatigue cost from which isolation accessories rest longer
    pub const MODERATE_FATIGUE_COST: u8 = 3;

    /// Heavy main-lift set
    pub const MAIN_HEAVY: u32 = 240;
    /// Heavy main-lift set on a high-fatigue exercise
    pub const MAIN_HEAVY_HIGH_FATIGUE: u32 = 300;
    /// Moderate main-lift set
    pub const MAIN_MODERATE: u32 = 150;
    /// Moderate main-lift set on a high-fatigue exercise
    pub const MAIN_MODERATE_HIGH_FATIGUE: u32 = 180;
    /// Compound accessory at low reps
    pub const COMPOUND_ACCESSORY_LOW_REPS: u32 = 150;
    /// Compound accessory at higher reps
    pub const COMPOUND_ACCESSORY: u32 = 120;
    /// Isolation accessory on a moderate/high fatigue exercise
    pub const ISOLATION_HIGH_FATIGUE: u32 = 90;
    /// Isolation accessory
    pub const ISOLATION: u32 = 75;
}

/// Session timing estimates
pub mod timing {
    /// Default rest between warmup sets (seconds)
    pub const DEFAULT_WARMUP_REST_SECONDS: u32 = 60;
    /// Default ramp-up sets counted before each main lift
    pub const DEFAULT_MAIN_LIFT_WARMUP_SETS: u32 = 3;
    /// Default fallback work seconds per rep
    pub const DEFAULT_SECONDS_PER_REP: u32 = 4;
    /// Default lower clamp on fallback work seconds
    pub const DEFAULT_MIN_WORK_SECONDS: u32 = 20;
    /// Default upper clamp on fallback work seconds
    pub const DEFAULT_MAX_WORK_SECONDS: u32 = 90;
    /// Default shared-rest multiplier for supersets
    pub const DEFAULT_SUPERSET_REST_MULTIPLIER: f64 = 0.6;
    /// Default minimum shared rest for supersets (seconds)
    pub const DEFAULT_SUPERSET_MIN_REST_SECONDS: u32 = 60;
}

/// Accessory retention scoring defaults
pub mod retention {
    /// Weight on uncovered muscle coverage
    pub const COVERAGE_WEIGHT: f64 = 3.0;
    /// Weight on normalized stimulus-to-fatigue ratio
    pub const SFR_WEIGHT: f64 = 1.2;
    /// Weight on normalized length-position score
    pub const LENGTH_POSITION_WEIGHT: f64 = 0.8;
    /// Weight on redundant primary-muscle coverage
    pub const REDUNDANCY_WEIGHT: f64 = 1.0;
    /// Weight on fatigue cost above the scale midpoint
    pub const FATIGUE_WEIGHT: f64 = 1.3;
    /// Contribution of a secondary muscle relative to a primary muscle
    pub const SECONDARY_MUSCLE_WEIGHT: f64 = 0.3;
    /// Midpoint of every 1-5 score scale
    pub const SCORE_MIDPOINT: f64 = 3.0;
    /// Maximum distance from the midpoint before clamping
    pub const SCORE_HALF_SPAN: f64 = 2.0;
}

/// Accessory slot counts
pub mod slots {
    /// Default minimum accessories per session
    pub const DEFAULT_MIN_ACCESSORIES: usize = 3;
    /// Default maximum accessories per session
    pub const DEFAULT_MAX_ACCESSORIES: usize = 5;
    /// Default warmup items per session
    pub const DEFAULT_WARMUP_ITEMS: usize = 2;
}

/// Load progression
pub mod load {
    /// Default percentage increase when every set reached the top of its range
    pub const DEFAULT_INCREMENT_PERCENT: f64 = 2.5;
    /// Smallest load jump applied on progression
    pub const MIN_INCREMENT: f64 = 1.0;
    /// Loads are rounded to this step
    pub const ROUNDING_STEP: f64 = 0.5;
    /// Default load factor applied during deload
    pub const DEFAULT_DELOAD_FACTOR: f64 = 0.9;
}
