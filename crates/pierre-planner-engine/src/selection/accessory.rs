// ABOUTME: Accessory slotting by muscle coverage, favorite backfill, and stimulus quality
// ABOUTME: Also fills the mobility warmup list and optional core/conditioning add-ons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{already_chosen, pick_weighted, SelectionContext};
use crate::config::SlotConfig;
use crate::constraint_filter::FilteredPool;
use crate::diagnostics::{DiagnosticEvent, DiagnosticsSink};
use crate::rng::SessionRng;
use crate::split_resolver::SessionFocus;
use pierre_planner_core::constants::thresholds;
use pierre_planner_core::models::{
    normalize_name, DayTag, ExerciseCatalogEntry, FatigueState, Goals, MovementPattern,
    PeriodizationModifiers, SecondaryGoal,
};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use tracing::debug;

const DEFAULT_ACCESSORY_TARGET: usize = 4;

/// Number of accessories to aim for
///
/// High readiness earns the maximum; low readiness or a deload drops to the
/// minimum; everything else aims for four, clamped to the configured bounds.
#[must_use]
pub fn accessory_target(
    slots: &SlotConfig,
    fatigue: &FatigueState,
    periodization: &PeriodizationModifiers,
) -> usize {
    if fatigue.readiness <= thresholds::LOW_READINESS || periodization.is_deload {
        slots.min_accessories
    } else if fatigue.readiness >= thresholds::HIGH_READINESS {
        slots.max_accessories
    } else {
        DEFAULT_ACCESSORY_TARGET.clamp(slots.min_accessories, slots.max_accessories)
    }
}

/// Muscles each day-tag tries to cover with accessories, in priority order
#[must_use]
pub const fn coverage_targets(day_tag: DayTag) -> &'static [&'static str] {
    match day_tag {
        DayTag::Push => &["chest", "side delts", "triceps", "front delts"],
        DayTag::Pull => &["lats", "upper back", "rear delts", "biceps"],
        DayTag::Legs => &["quads", "hamstrings", "glutes", "calves"],
        DayTag::Lower => &["quads", "hamstrings", "glutes", "calves", "adductors"],
        DayTag::Upper => &["chest", "lats", "side delts", "biceps", "triceps"],
        DayTag::FullBody => &["chest", "lats", "quads", "hamstrings", "side delts"],
    }
}

/// Fill accessory slots around the chosen main lifts
///
/// Three passes: one weighted pick per uncovered target muscle, a favorites-first
/// backfill up to the minimum, then the best remaining candidates up to the
/// target. Main-lift-eligible exercises are only used when the regular pool
/// cannot reach the minimum.
#[allow(clippy::too_many_arguments)]
pub fn select_accessories<'a>(
    focus: &SessionFocus,
    pool: &FilteredPool<'a>,
    main_lifts: &[&'a ExerciseCatalogEntry],
    ctx: &SelectionContext<'_>,
    slots: &SlotConfig,
    target: usize,
    rng: &mut SessionRng,
    sink: &mut dyn DiagnosticsSink,
) -> Vec<&'a ExerciseCatalogEntry> {
    let admissible: Vec<&ExerciseCatalogEntry> = pool
        .pool
        .iter()
        .copied()
        .filter(|entry| focus.admits_accessory(entry))
        .filter(|entry| !already_chosen(main_lifts, entry))
        .collect();
    let (secondary, candidates): (Vec<_>, Vec<_>) = admissible
        .into_iter()
        .partition(|entry| entry.main_lift_eligible);

    let mut selected: Vec<&ExerciseCatalogEntry> = Vec::new();

    let mut covered: BTreeSet<String> = main_lifts
        .iter()
        .flat_map(|entry| entry.normalized_primary_muscles())
        .collect();
    for muscle in coverage_targets(focus.day_tag) {
        if selected.len() >= target {
            break;
        }
        if covered.contains(*muscle) {
            continue;
        }
        let options: Vec<&ExerciseCatalogEntry> = candidates
            .iter()
            .copied()
            .filter(|entry| !already_chosen(&selected, entry))
            .filter(|entry| entry.normalized_primary_muscles().iter().any(|m| m == muscle))
            .collect();
        if let Some(pick) = pick_weighted(&options, rng, |entry| {
            ctx.weight(entry) * f64::from(entry.stimulus_fit)
        }) {
            debug!(muscle, exercise_id = %pick.id, "Accessory covers muscle");
            covered.extend(pick.normalized_primary_muscles());
            selected.push(pick);
        }
    }

    let minimum = slots.min_accessories.min(target);
    for source in [&candidates, &secondary] {
        if selected.len() >= minimum {
            break;
        }
        let remaining: Vec<&ExerciseCatalogEntry> = source
            .iter()
            .copied()
            .filter(|entry| !already_chosen(&selected, entry))
            .collect();
        let needed = minimum - selected.len();
        selected.extend(ctx.favorites_first(&remaining).into_iter().take(needed));
    }

    if selected.len() < target {
        let mut remaining: Vec<&ExerciseCatalogEntry> = candidates
            .iter()
            .copied()
            .filter(|entry| !already_chosen(&selected, entry))
            .collect();
        remaining.sort_by_key(|entry| {
            (
                Reverse(entry.stimulus_fit),
                Reverse(entry.length_position),
                entry.fatigue_cost,
            )
        });
        let needed = target - selected.len();
        selected.extend(remaining.into_iter().take(needed));
    }

    if selected.len() < slots.min_accessories {
        sink.emit(DiagnosticEvent::AccessoryShortfall {
            selected: selected.len(),
            minimum: slots.min_accessories,
        });
    }
    selected
}

/// Pick mobility/prehab drills, favoring those that touch the main lifts' muscles
pub fn select_warmup<'a>(
    pool: &FilteredPool<'a>,
    main_lifts: &[&ExerciseCatalogEntry],
    count: usize,
    rng: &mut SessionRng,
) -> Vec<&'a ExerciseCatalogEntry> {
    let lift_muscles: BTreeSet<String> = main_lifts
        .iter()
        .flat_map(|entry| {
            entry
                .normalized_primary_muscles()
                .into_iter()
                .chain(entry.normalized_secondary_muscles())
        })
        .collect();

    let mut remaining: Vec<&ExerciseCatalogEntry> = pool
        .pool
        .iter()
        .copied()
        .filter(|entry| entry.is_warmup_drill())
        .collect();
    let mut picks = Vec::with_capacity(count);
    while picks.len() < count {
        let Some(pick) = pick_weighted(&remaining, rng, |entry| {
            let overlap = entry
                .normalized_primary_muscles()
                .iter()
                .chain(entry.normalized_secondary_muscles().iter())
                .filter(|muscle| lift_muscles.contains(*muscle))
                .count();
            #[allow(clippy::cast_precision_loss)]
            let overlap = overlap as f64;
            1.0 + overlap
        }) else {
            break;
        };
        remaining.retain(|entry| entry.id != pick.id);
        picks.push(pick);
    }
    picks
}

/// Optional core and conditioning additions
///
/// Only produced when the athlete opted in. Core work is always offered;
/// conditioning is added on leg days or when conditioning is the secondary
/// goal, preferring a farmer or suitcase carry when one survived filtering.
pub fn select_add_ons<'a>(
    focus: &SessionFocus,
    pool: &FilteredPool<'a>,
    goals: &Goals,
    ctx: &SelectionContext<'_>,
    chosen: &[&ExerciseCatalogEntry],
    rng: &mut SessionRng,
) -> Vec<&'a ExerciseCatalogEntry> {
    if !ctx.preferences().optional_conditioning {
        return Vec::new();
    }
    let mut add_ons: Vec<&ExerciseCatalogEntry> = Vec::new();

    let core: Vec<&ExerciseCatalogEntry> = pool
        .pool
        .iter()
        .copied()
        .filter(|entry| entry.is_core() && !entry.is_warmup_drill())
        .filter(|entry| !already_chosen(chosen, entry))
        .collect();
    if let Some(pick) = pick_weighted(&core, rng, |entry| ctx.weight(entry)) {
        add_ons.push(pick);
    }

    if focus.day_tag.is_leg_day() || goals.secondary == SecondaryGoal::Conditioning {
        let conditioning: Vec<&ExerciseCatalogEntry> = pool
            .pool
            .iter()
            .copied()
            .filter(|entry| entry.is_conditioning() || entry.has_pattern(MovementPattern::Carry))
            .filter(|entry| !already_chosen(chosen, entry) && !already_chosen(&add_ons, entry))
            .collect();
        let carry = conditioning
            .iter()
            .copied()
            .find(|entry| entry.has_pattern(MovementPattern::Carry) && is_loaded_carry(entry));
        let pick = carry.or_else(|| pick_weighted(&conditioning, rng, |entry| ctx.weight(entry)));
        if let Some(pick) = pick {
            add_ons.push(pick);
        }
    }
    add_ons
}

fn is_loaded_carry(entry: &ExerciseCatalogEntry) -> bool {
    let name = normalize_name(&entry.name);
    name.contains("farmer") || name.contains("suitcase")
}
