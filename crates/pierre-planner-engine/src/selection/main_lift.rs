// ABOUTME: Slot-based main-lift selection with weighted picks and fallback cascades
// ABOUTME: Backfills to two lifts from remaining eligible candidates, favorites first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{already_chosen, pick_weighted, SelectionContext};
use crate::constraint_filter::FilteredPool;
use crate::diagnostics::{DiagnosticEvent, DiagnosticsSink};
use crate::rng::SessionRng;
use crate::split_resolver::SessionFocus;
use pierre_planner_core::constants::{selection, thresholds};
use pierre_planner_core::models::{
    normalize_name, BodyPart, DayTag, ExerciseCatalogEntry, FatigueState, MovementPattern,
};
use std::cmp::Reverse;
use tracing::debug;

/// Sort order of the fallback pool
///
/// Pull days rank favorites ahead of fatigue cost while every other day ranks
/// fatigue cost first. The asymmetry is long-standing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackOrder {
    /// Fatigue cost descending, then favorites
    FatigueThenFavorite,
    /// Favorites, then fatigue cost descending
    FavoriteThenFatigue,
}

/// One main-lift slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainLiftSlot {
    /// Slot label used in diagnostics and notes
    pub label: &'static str,
    /// Patterns that may fill the slot
    pub patterns: Vec<MovementPattern>,
    /// Prefer chest-supported row variants
    pub prefer_chest_supported: bool,
    /// Fallback pool ordering
    pub fallback_order: FallbackOrder,
}

/// Result of main-lift selection
#[derive(Debug, Clone, Default)]
pub struct MainLiftSelection<'a> {
    /// Picked lifts in slot order
    pub lifts: Vec<&'a ExerciseCatalogEntry>,
    /// Labels of slots nothing could fill
    pub unfilled_slots: Vec<&'static str>,
}

/// Slots for a session, narrowed to its allowed patterns
#[must_use]
pub fn main_lift_slots(focus: &SessionFocus, fatigue: &FatigueState) -> Vec<MainLiftSlot> {
    use MovementPattern::{
        Hinge, HorizontalPull, HorizontalPush, Lunge, Squat, VerticalPull, VerticalPush,
    };

    let low_back = fatigue.pain(BodyPart::LowBack) >= thresholds::PAIN_EXCLUSION;
    let table: Vec<(&'static str, Vec<MovementPattern>, bool)> = match focus.day_tag {
        DayTag::Push => vec![
            ("horizontal press", vec![HorizontalPush], false),
            ("vertical press", vec![VerticalPush], false),
        ],
        DayTag::Pull => vec![
            ("vertical pull", vec![VerticalPull], false),
            ("horizontal pull", vec![HorizontalPull], low_back),
        ],
        DayTag::Legs | DayTag::Lower => vec![
            ("squat", vec![Squat, Lunge], false),
            ("hinge", vec![Hinge], false),
        ],
        DayTag::Upper => vec![
            ("press", vec![HorizontalPush, VerticalPush], false),
            ("pull", vec![HorizontalPull, VerticalPull], false),
        ],
        DayTag::FullBody => vec![
            ("lower body", vec![Squat, Lunge, Hinge], false),
            (
                "upper body",
                vec![HorizontalPush, VerticalPush, HorizontalPull, VerticalPull],
                false,
            ),
        ],
    };

    let fallback_order = if focus.day_tag == DayTag::Pull {
        FallbackOrder::FavoriteThenFatigue
    } else {
        FallbackOrder::FatigueThenFavorite
    };

    table
        .into_iter()
        .filter_map(|(label, patterns, prefer_chest_supported)| {
            let patterns: Vec<MovementPattern> = patterns
                .into_iter()
                .filter(|pattern| focus.allowed_patterns.contains(pattern))
                .collect();
            (!patterns.is_empty()).then_some(MainLiftSlot {
                label,
                patterns,
                prefer_chest_supported,
                fallback_order,
            })
        })
        .collect()
}

/// Pick main lifts for the session
///
/// Each slot draws a weighted pick from the stall-filtered pool. An empty slot
/// falls back to compound exercises from the pre-stall pool, sorted by the
/// slot's fallback order. If fewer than two lifts result, remaining eligible
/// candidates fill in, favorites first.
pub fn select_main_lifts<'a>(
    focus: &SessionFocus,
    pool: &FilteredPool<'a>,
    ctx: &SelectionContext<'_>,
    fatigue: &FatigueState,
    rng: &mut SessionRng,
    sink: &mut dyn DiagnosticsSink,
) -> MainLiftSelection<'a> {
    let mut selection = MainLiftSelection::default();

    for slot in main_lift_slots(focus, fatigue) {
        if let Some(pick) = pick_for_slot(&slot, focus, pool, ctx, &selection.lifts, rng) {
            debug!(slot = slot.label, exercise_id = %pick.id, "Main lift selected");
            selection.lifts.push(pick);
        } else if let Some(pick) = fallback_for_slot(&slot, focus, pool, ctx, &selection.lifts) {
            sink.emit(DiagnosticEvent::MainLiftFallback {
                slot: slot.label.to_owned(),
                exercise_id: pick.id.clone(),
            });
            selection.lifts.push(pick);
        } else {
            sink.emit(DiagnosticEvent::SlotUnfilled {
                day_tag: focus.day_tag,
                slot: slot.label.to_owned(),
            });
            selection.unfilled_slots.push(slot.label);
        }
    }

    if selection.lifts.len() < selection::MAIN_LIFT_TARGET {
        let remaining: Vec<&ExerciseCatalogEntry> = pool
            .pool
            .iter()
            .copied()
            .filter(|entry| entry.main_lift_eligible)
            .filter(|entry| focus.fits_day(entry) && focus.allows_patterns_of(entry))
            .filter(|entry| !already_chosen(&selection.lifts, entry))
            .collect();
        let needed = selection::MAIN_LIFT_TARGET - selection.lifts.len();
        let backfill = ctx.favorites_first(&remaining);
        for entry in backfill.into_iter().take(needed) {
            debug!(exercise_id = %entry.id, "Main lift backfilled");
            selection.lifts.push(entry);
        }
    }

    selection
}

fn pick_for_slot<'a>(
    slot: &MainLiftSlot,
    focus: &SessionFocus,
    pool: &FilteredPool<'a>,
    ctx: &SelectionContext<'_>,
    chosen: &[&ExerciseCatalogEntry],
    rng: &mut SessionRng,
) -> Option<&'a ExerciseCatalogEntry> {
    let candidates: Vec<&ExerciseCatalogEntry> = pool
        .pool
        .iter()
        .copied()
        .filter(|entry| entry.main_lift_eligible && focus.fits_day(entry))
        .filter(|entry| entry.has_any_pattern(&slot.patterns))
        .filter(|entry| !already_chosen(chosen, entry))
        .collect();

    let candidates = if slot.prefer_chest_supported {
        let supported: Vec<&ExerciseCatalogEntry> = candidates
            .iter()
            .copied()
            .filter(|entry| is_chest_supported(entry))
            .collect();
        if supported.is_empty() {
            candidates
        } else {
            supported
        }
    } else {
        candidates
    };

    pick_weighted(&candidates, rng, |entry| ctx.weight(entry))
}

fn fallback_for_slot<'a>(
    slot: &MainLiftSlot,
    focus: &SessionFocus,
    pool: &FilteredPool<'a>,
    ctx: &SelectionContext<'_>,
    chosen: &[&ExerciseCatalogEntry],
) -> Option<&'a ExerciseCatalogEntry> {
    let mut candidates: Vec<&ExerciseCatalogEntry> = pool
        .pre_stall_pool
        .iter()
        .copied()
        .filter(|entry| entry.compound && focus.fits_day(entry))
        .filter(|entry| entry.has_any_pattern(&slot.patterns))
        .filter(|entry| !already_chosen(chosen, entry))
        .collect();

    match slot.fallback_order {
        FallbackOrder::FatigueThenFavorite => {
            candidates.sort_by_key(|entry| (Reverse(entry.fatigue_cost), !ctx.is_favorite(entry)));
        }
        FallbackOrder::FavoriteThenFatigue => {
            candidates.sort_by_key(|entry| (!ctx.is_favorite(entry), Reverse(entry.fatigue_cost)));
        }
    }
    candidates.first().copied()
}

fn is_chest_supported(entry: &ExerciseCatalogEntry) -> bool {
    let name = normalize_name(&entry.name);
    name.contains("chest supported") || name.contains("seal row") || name.contains("incline row")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingDiagnostics;
    use crate::split_resolver::default_patterns;
    use chrono::Utc;
    use pierre_planner_core::models::{JointStress, SplitTag, UserPreferences};
    use std::collections::{BTreeMap, BTreeSet};

    fn lift(id: &str, pattern: MovementPattern, tag: SplitTag, fatigue: u8) -> ExerciseCatalogEntry {
        ExerciseCatalogEntry {
            id: id.to_owned(),
            name: id.replace('_', " "),
            movement_patterns: BTreeSet::from([pattern]),
            split_tags: BTreeSet::from([tag]),
            joint_stress: JointStress::Medium,
            equipment: BTreeSet::new(),
            primary_muscles: vec!["lats".to_owned()],
            secondary_muscles: vec![],
            fatigue_cost: fatigue,
            stimulus_fit: 3,
            length_position: 3,
            main_lift_eligible: true,
            compound: true,
            rep_range: None,
            seconds_per_set: None,
            recovery_overrides: BTreeMap::new(),
            contraindications: BTreeMap::new(),
        }
    }

    fn focus(day_tag: DayTag) -> SessionFocus {
        SessionFocus {
            day_tag,
            allowed_patterns: default_patterns(day_tag),
        }
    }

    #[test]
    fn test_pull_day_fills_both_slots() {
        let pullup = lift("pull_up", MovementPattern::VerticalPull, SplitTag::Pull, 3);
        let row = lift("barbell_row", MovementPattern::HorizontalPull, SplitTag::Pull, 4);
        let pool = FilteredPool {
            pool: vec![&pullup, &row],
            pre_stall_pool: vec![&pullup, &row],
            ..FilteredPool::default()
        };
        let preferences = UserPreferences::default();
        let ctx = SelectionContext::new(&preferences, &[], Utc::now());
        let mut rng = SessionRng::from_seed(1);
        let mut sink = CollectingDiagnostics::new();

        let selection = select_main_lifts(
            &focus(DayTag::Pull),
            &pool,
            &ctx,
            &FatigueState::default(),
            &mut rng,
            &mut sink,
        );
        let ids: Vec<&str> = selection.lifts.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["pull_up", "barbell_row"]);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_low_back_pain_prefers_chest_supported_row() {
        let pullup = lift("pull_up", MovementPattern::VerticalPull, SplitTag::Pull, 3);
        let row = lift("cable_row", MovementPattern::HorizontalPull, SplitTag::Pull, 3);
        let supported = lift("chest_supported_row", MovementPattern::HorizontalPull, SplitTag::Pull, 2);
        let pool = FilteredPool {
            pool: vec![&pullup, &row, &supported],
            pre_stall_pool: vec![&pullup, &row, &supported],
            ..FilteredPool::default()
        };
        let fatigue = FatigueState {
            pain_flags: BTreeMap::from([(BodyPart::LowBack, 2)]),
            ..FatigueState::default()
        };
        let preferences = UserPreferences::default();
        let ctx = SelectionContext::new(&preferences, &[], Utc::now());

        for seed in 0..20 {
            let mut rng = SessionRng::from_seed(seed);
            let mut sink = CollectingDiagnostics::new();
            let selection =
                select_main_lifts(&focus(DayTag::Pull), &pool, &ctx, &fatigue, &mut rng, &mut sink);
            assert_eq!(selection.lifts[1].id, "chest_supported_row");
        }
    }

    #[test]
    fn test_fallback_uses_pre_stall_pool_sorted_by_fatigue() {
        let light = lift("goblet_squat", MovementPattern::Squat, SplitTag::Legs, 2);
        let mut heavy = lift("back_squat", MovementPattern::Squat, SplitTag::Legs, 5);
        heavy.main_lift_eligible = false;
        let hinge = lift("rdl", MovementPattern::Hinge, SplitTag::Legs, 3);
        let pool = FilteredPool {
            pool: vec![&hinge],
            pre_stall_pool: vec![&light, &heavy, &hinge],
            ..FilteredPool::default()
        };
        let preferences = UserPreferences::default();
        let ctx = SelectionContext::new(&preferences, &[], Utc::now());
        let mut rng = SessionRng::from_seed(9);
        let mut sink = CollectingDiagnostics::new();

        let selection = select_main_lifts(
            &focus(DayTag::Legs),
            &pool,
            &ctx,
            &FatigueState::default(),
            &mut rng,
            &mut sink,
        );
        assert_eq!(selection.lifts[0].id, "back_squat");
        assert_eq!(
            sink.events(),
            &[DiagnosticEvent::MainLiftFallback {
                slot: "squat".to_owned(),
                exercise_id: "back_squat".to_owned(),
            }]
        );
    }

    #[test]
    fn test_pull_fallback_ranks_favorites_first() {
        let heavy = lift("rack_pull_row", MovementPattern::HorizontalPull, SplitTag::Pull, 5);
        let favorite = lift("band_row", MovementPattern::HorizontalPull, SplitTag::Pull, 2);
        let pullup = lift("pull_up", MovementPattern::VerticalPull, SplitTag::Pull, 3);
        let pool = FilteredPool {
            pool: vec![&pullup],
            pre_stall_pool: vec![&heavy, &favorite, &pullup],
            ..FilteredPool::default()
        };
        let preferences = UserPreferences {
            favorite_ids: BTreeSet::from(["band_row".to_owned()]),
            ..UserPreferences::default()
        };
        let ctx = SelectionContext::new(&preferences, &[], Utc::now());
        let mut rng = SessionRng::from_seed(4);
        let mut sink = CollectingDiagnostics::new();

        let selection = select_main_lifts(
            &focus(DayTag::Pull),
            &pool,
            &ctx,
            &FatigueState::default(),
            &mut rng,
            &mut sink,
        );
        assert_eq!(selection.lifts[1].id, "band_row");
    }

    #[test]
    fn test_unfilled_slot_is_reported() {
        let bench = lift("bench_press", MovementPattern::HorizontalPush, SplitTag::Push, 4);
        let pool = FilteredPool {
            pool: vec![&bench],
            pre_stall_pool: vec![&bench],
            ..FilteredPool::default()
        };
        let preferences = UserPreferences::default();
        let ctx = SelectionContext::new(&preferences, &[], Utc::now());
        let mut rng = SessionRng::from_seed(2);
        let mut sink = CollectingDiagnostics::new();

        let selection = select_main_lifts(
            &focus(DayTag::Push),
            &pool,
            &ctx,
            &FatigueState::default(),
            &mut rng,
            &mut sink,
        );
        assert_eq!(selection.lifts.len(), 1);
        assert_eq!(selection.unfilled_slots, vec!["vertical press"]);
    }
}
