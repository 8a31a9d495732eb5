// ABOUTME: Resolves a requested day focus into a day-tag and an allowed movement-pattern set
// ABOUTME: Expands legacy single-axis pattern names used by older plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_planner_core::errors::PlannerError;
use pierre_planner_core::models::{
    normalize_name, DayTag, ExerciseCatalogEntry, MovementPattern, SplitTag, SplitType,
};
use std::collections::BTreeSet;

const PUSH_PATTERNS: [MovementPattern; 2] =
    [MovementPattern::HorizontalPush, MovementPattern::VerticalPush];
const PULL_PATTERNS: [MovementPattern; 2] =
    [MovementPattern::HorizontalPull, MovementPattern::VerticalPull];
const LEG_PATTERNS: [MovementPattern; 3] = [
    MovementPattern::Squat,
    MovementPattern::Hinge,
    MovementPattern::Lunge,
];

/// Day-tag and allowed patterns for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFocus {
    /// Resolved day-tag
    pub day_tag: DayTag,
    /// Patterns main lifts and accessories may train
    pub allowed_patterns: BTreeSet<MovementPattern>,
}

impl SessionFocus {
    /// Whether an exercise belongs to this session's day-tag
    #[must_use]
    pub fn fits_day(&self, entry: &ExerciseCatalogEntry) -> bool {
        let tags: &[SplitTag] = match self.day_tag {
            DayTag::Push => &[SplitTag::Push],
            DayTag::Pull => &[SplitTag::Pull],
            DayTag::Legs => &[SplitTag::Legs],
            DayTag::Upper => &[SplitTag::Push, SplitTag::Pull, SplitTag::Upper],
            DayTag::Lower => &[SplitTag::Legs, SplitTag::Lower],
            DayTag::FullBody => &[
                SplitTag::Push,
                SplitTag::Pull,
                SplitTag::Legs,
                SplitTag::Upper,
                SplitTag::Lower,
                SplitTag::FullBody,
            ],
        };
        tags.iter().any(|tag| entry.has_tag(*tag))
    }

    /// Whether any of the exercise's patterns is allowed
    #[must_use]
    pub fn allows_patterns_of(&self, entry: &ExerciseCatalogEntry) -> bool {
        entry
            .movement_patterns
            .iter()
            .any(|pattern| self.allowed_patterns.contains(pattern))
    }

    /// Whether the exercise may fill an accessory slot
    ///
    /// Isolation work is always allowed on a matching day; compound accessories
    /// must train an allowed pattern.
    #[must_use]
    pub fn admits_accessory(&self, entry: &ExerciseCatalogEntry) -> bool {
        self.fits_day(entry)
            && !entry.is_add_on_only()
            && !entry.is_warmup_drill()
            && (entry.has_pattern(MovementPattern::Isolation) || self.allows_patterns_of(entry))
    }
}

/// Expand a requested pattern name into canonical patterns
///
/// Canonical names map to themselves; legacy single-axis names expand to the
/// richer tag set (`push` becomes horizontal and vertical push).
///
/// # Errors
///
/// Returns `PlannerError::UnknownPattern` for names outside the vocabulary
pub fn expand_pattern_name(raw: &str) -> Result<Vec<MovementPattern>, PlannerError> {
    let name = normalize_name(raw).replace(' ', "_");
    if let Some(pattern) = MovementPattern::from_canonical(&name) {
        return Ok(vec![pattern]);
    }
    let expanded: Vec<MovementPattern> = match name.as_str() {
        "push" | "press" => PUSH_PATTERNS.to_vec(),
        "pull" => PULL_PATTERNS.to_vec(),
        "row" => vec![MovementPattern::HorizontalPull],
        "legs" | "lower" => LEG_PATTERNS.to_vec(),
        "upper" => PUSH_PATTERNS.iter().chain(PULL_PATTERNS.iter()).copied().collect(),
        "full_body" | "fullbody" | "full" => compound_patterns().into_iter().collect(),
        _ => return Err(PlannerError::UnknownPattern(raw.to_owned())),
    };
    Ok(expanded)
}

/// Resolve requested patterns for a split into a session focus
///
/// # Errors
///
/// Returns `PlannerError::UnknownPattern` if any requested name is unknown
pub fn resolve(requested: &[String], split: SplitType) -> Result<SessionFocus, PlannerError> {
    let mut patterns = BTreeSet::new();
    for name in requested {
        patterns.extend(expand_pattern_name(name)?);
    }

    let focus = match split {
        SplitType::Strict3Day => {
            let day_tag = strict_day_tag(&patterns);
            SessionFocus {
                day_tag,
                allowed_patterns: default_patterns(day_tag),
            }
        }
        SplitType::UpperLower | SplitType::Custom => {
            let day_tag = upper_lower_day_tag(&patterns);
            let allowed_patterns = if patterns.is_empty() {
                default_patterns(day_tag)
            } else {
                patterns
            };
            SessionFocus {
                day_tag,
                allowed_patterns,
            }
        }
        SplitType::FullBody => SessionFocus {
            day_tag: DayTag::FullBody,
            allowed_patterns: if patterns.is_empty() {
                default_patterns(DayTag::FullBody)
            } else {
                patterns
            },
        },
    };
    Ok(focus)
}

fn strict_day_tag(patterns: &BTreeSet<MovementPattern>) -> DayTag {
    if patterns.iter().any(MovementPattern::is_push) {
        DayTag::Push
    } else if patterns.iter().any(MovementPattern::is_pull) {
        DayTag::Pull
    } else {
        DayTag::Legs
    }
}

fn upper_lower_day_tag(patterns: &BTreeSet<MovementPattern>) -> DayTag {
    let upper = patterns.iter().any(|p| p.is_push() || p.is_pull());
    let lower = patterns.iter().any(MovementPattern::is_lower_body);
    match (upper, lower) {
        (true, false) => DayTag::Upper,
        (false, true) => DayTag::Lower,
        _ => DayTag::FullBody,
    }
}

/// Patterns a day-tag trains when the request does not narrow them
#[must_use]
pub fn default_patterns(day_tag: DayTag) -> BTreeSet<MovementPattern> {
    match day_tag {
        DayTag::Push => PUSH_PATTERNS.into_iter().collect(),
        DayTag::Pull => PULL_PATTERNS.into_iter().collect(),
        DayTag::Legs | DayTag::Lower => LEG_PATTERNS.into_iter().collect(),
        DayTag::Upper => PUSH_PATTERNS.into_iter().chain(PULL_PATTERNS).collect(),
        DayTag::FullBody => compound_patterns(),
    }
}

fn compound_patterns() -> BTreeSet<MovementPattern> {
    PUSH_PATTERNS
        .into_iter()
        .chain(PULL_PATTERNS)
        .chain(LEG_PATTERNS)
        .collect()
}
