pub mod runner;

pub use self::runner::{MatchSearch, NoProgress, ProgressCallback, SearchOptions};

use crate::error::{K4Error, K4Result};
use crate::expander::{self, Slot};
use crate::grid::GridPair;
use serde::Serialize;
use strum_macros::Display;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Partial,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub pair: GridPair,
    /// Raw translation, merged markers included.
    pub translated: String,
    /// The resolved variant that was scored against the target.
    pub variant: String,
    pub kind: MatchKind,
    pub mismatches: usize,
    pub attempt: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StopReason {
    AttemptBudget,
    TimeLimit,
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(Box<MatchResult>),
    Exhausted { attempts: usize, reason: StopReason },
}

impl SearchOutcome {
    pub fn into_result(self) -> K4Result<MatchResult> {
        match self {
            SearchOutcome::Found(m) => Ok(*m),
            SearchOutcome::Exhausted { attempts, reason } => {
                warn!("Search stopped: {}", reason);
                Err(K4Error::ExhaustedAttempts { attempts })
            }
        }
    }
}

/// Positional mismatches between two strings of equal char length.
pub fn count_mismatches(candidate: &str, target: &str) -> Option<usize> {
    if candidate.chars().count() != target.chars().count() {
        return None;
    }
    Some(
        candidate
            .chars()
            .zip(target.chars())
            .filter(|(a, b)| a != b)
            .count(),
    )
}

/// The variant of `translated` closest to `target`, if it is within
/// `tolerance`. Ties keep the first variant in sorted order.
///
/// Markers resolve independently, so the best variant is picked one
/// position at a time in linear time.
pub fn best_partial(translated: &str, target: &str, tolerance: usize) -> Option<(String, usize)> {
    let Some(slots) = expander::slots(translated) else {
        return best_by_expansion(translated, target, tolerance);
    };
    if slots.len() != target.chars().count() {
        return None;
    }

    let mut variant = String::with_capacity(slots.len());
    let mut mismatches = 0;

    for (slot, want) in slots.into_iter().zip(target.chars()) {
        let pick = match slot {
            Slot::Fixed(c) => c,
            Slot::Either(a, b) if a == want || b == want => want,
            Slot::Either(a, b) => a.min(b),
        };
        if pick != want {
            mismatches += 1;
            if mismatches > tolerance {
                return None;
            }
        }
        variant.push(pick);
    }

    Some((variant, mismatches))
}

// Stray separators from the raw input.
fn best_by_expansion(translated: &str, target: &str, tolerance: usize) -> Option<(String, usize)> {
    let mut best: Option<(String, usize)> = None;

    for variant in expander::expand(translated) {
        let Some(m) = count_mismatches(&variant, target) else {
            continue;
        };
        if m > tolerance {
            continue;
        }
        if best.as_ref().map_or(true, |(_, b)| m < *b) {
            best = Some((variant, m));
        }
    }

    best
}

/// Exact match first, then the best tolerated variant.
pub fn evaluate(
    pair: GridPair,
    input: &str,
    target: &str,
    tolerance: usize,
    attempt: usize,
) -> Option<MatchResult> {
    let translated = pair.translate(input);

    if translated == target {
        return Some(MatchResult {
            pair,
            variant: translated.clone(),
            translated,
            kind: MatchKind::Exact,
            mismatches: 0,
            attempt,
        });
    }

    let (variant, mismatches) = best_partial(&translated, target, tolerance)?;
    Some(MatchResult {
        pair,
        translated,
        variant,
        kind: MatchKind::Partial,
        mismatches,
        attempt,
    })
}
