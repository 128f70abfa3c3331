//! Riddle selection
//!
//! Weight-samples one riddle from the catalog at a target difficulty,
//! skipping riddles already used this battle. Sampling walks candidates in
//! catalog insertion order with a single RNG draw, so a fixed seed always
//! picks the same riddle.

use hashbrown::HashSet;
use thiserror::Error;

use crate::catalog::{Catalog, Difficulty, RiddleRecord};
use crate::resolver::CategoryWeights;
use crate::rng::BattleRng;

/// No unused candidate remains at the requested difficulty
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("every {difficulty} riddle has already been used")]
pub struct SelectError {
    pub difficulty: Difficulty,
}

/// What to try when the target tier runs dry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// Try the remaining difficulty tiers, nearest first
    pub widen_tiers: bool,
    /// As a last resort, allow repeats of already-used riddles
    pub recycle_history: bool,
}

impl FallbackPolicy {
    /// No fallback at all: exhaustion surfaces immediately
    pub const fn strict() -> Self {
        Self {
            widen_tiers: false,
            recycle_history: false,
        }
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            widen_tiers: true,
            recycle_history: true,
        }
    }
}

/// Tiers to try after the resolved one runs dry: nearest first, lower tier
/// first on a distance tie
pub const fn fallback_order(from: Difficulty) -> [Difficulty; 2] {
    match from {
        Difficulty::Easy => [Difficulty::Medium, Difficulty::Hard],
        Difficulty::Medium => [Difficulty::Easy, Difficulty::Hard],
        Difficulty::Hard => [Difficulty::Medium, Difficulty::Easy],
    }
}

/// Pick one riddle at the given difficulty
///
/// Candidates are weighted by their category's weight; the riddle ids in
/// `exclude` are never candidates.
pub fn select<'a>(
    catalog: &'a Catalog,
    difficulty: Difficulty,
    weights: &CategoryWeights,
    exclude: &HashSet<String>,
    rng: &mut BattleRng,
) -> Result<&'a RiddleRecord, SelectError> {
    let candidates: Vec<&RiddleRecord> = catalog
        .by_difficulty(difficulty)
        .filter(|r| !exclude.contains(&r.id))
        .collect();

    let total: u32 = candidates.iter().map(|r| weights.weight(r.category)).sum();
    if total == 0 {
        return Err(SelectError { difficulty });
    }

    let mut threshold = rng.roll(total);
    for record in candidates {
        let weight = weights.weight(record.category);
        if threshold < weight {
            return Ok(record);
        }
        threshold -= weight;
    }

    Err(SelectError { difficulty })
}

/// Pick one riddle, applying the fallback policy when the target tier is
/// exhausted
pub fn select_with_fallback<'a>(
    catalog: &'a Catalog,
    difficulty: Difficulty,
    weights: &CategoryWeights,
    exclude: &HashSet<String>,
    policy: FallbackPolicy,
    rng: &mut BattleRng,
) -> Result<&'a RiddleRecord, SelectError> {
    let exhausted = match select(catalog, difficulty, weights, exclude, rng) {
        Ok(record) => return Ok(record),
        Err(err) => err,
    };

    if policy.widen_tiers {
        for tier in fallback_order(difficulty) {
            if let Ok(record) = select(catalog, tier, weights, exclude, rng) {
                tracing::debug!(from = %difficulty, to = %tier, "riddle tier widened");
                return Ok(record);
            }
        }
    }

    if policy.recycle_history {
        let no_exclusions = HashSet::new();
        if let Ok(record) = select(catalog, difficulty, weights, &no_exclusions, rng) {
            tracing::debug!(tier = %difficulty, "riddle history recycled");
            return Ok(record);
        }
    }

    Err(exhausted)
}
