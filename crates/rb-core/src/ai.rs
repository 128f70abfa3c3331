//! AI riddle solving
//!
//! An AI combatant never reads the prompt; it "solves" a riddle with a
//! single probability draw. The chance is a pure function of level,
//! difficulty, and affinity, so the envelope and monotonicity are testable
//! without touching an RNG.

use crate::catalog::{Difficulty, RiddleRecord};
use crate::combatant::CombatantProfile;
use crate::resolver::affinity_bonus;
use crate::rng::BattleRng;

/// Success chance never drops below this, even for a level-1 solver on a
/// hard riddle
pub const MIN_SUCCESS_CHANCE: f64 = 0.30;
/// Success chance never exceeds this, even for a high-level solver on an
/// easy riddle
pub const MAX_SUCCESS_CHANCE: f64 = 0.90;

/// Chance gained per level above 1
const LEVEL_STEP: f64 = 0.005;
/// Chance gained per point of affinity bonus weight
const AFFINITY_STEP: f64 = 0.05;

/// Baseline solve rate per difficulty tier
const fn base_rate(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.85,
        Difficulty::Medium => 0.65,
        Difficulty::Hard => 0.45,
    }
}

/// Probability that this combatant answers this riddle correctly
///
/// Monotonic non-decreasing in level for a fixed riddle, and always inside
/// [`MIN_SUCCESS_CHANCE`, `MAX_SUCCESS_CHANCE`].
pub fn success_chance(profile: &CombatantProfile, riddle: &RiddleRecord) -> f64 {
    let base = base_rate(riddle.difficulty);
    let level = (profile.level.saturating_sub(1)) as f64 * LEVEL_STEP;
    let affinity = profile
        .affinities
        .iter()
        .map(|&a| affinity_bonus(a, riddle.category))
        .max()
        .unwrap_or(0) as f64
        * AFFINITY_STEP;

    (base + level + affinity).clamp(MIN_SUCCESS_CHANCE, MAX_SUCCESS_CHANCE)
}

/// Draw the AI's verdict for one riddle: exactly one RNG decision per call
pub fn simulate(profile: &CombatantProfile, riddle: &RiddleRecord, rng: &mut BattleRng) -> bool {
    let chance = success_chance(profile, riddle);
    let solved = rng.chance(chance);
    tracing::debug!(
        riddle = %riddle.id,
        level = profile.level,
        chance,
        solved,
        "ai riddle attempt"
    );
    solved
}
