//! Damage from riddle outcomes
//!
//! Deterministic: all randomness lives in the AI simulator. A correct
//! answer hurts the opponent; a wrong answer (or a cancel) hurts the
//! actor, for half as much. Harder riddles hit harder either way.

use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;

/// Which combatant absorbs the damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSide {
    /// The acting combatant's opponent
    Opponent,
    /// The acting combatant itself
    Actor,
}

/// One resolved damage application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    pub amount: u32,
    pub side: DamageSide,
}

/// Default base power of a riddle turn
pub const DEFAULT_BASE_POWER: u32 = 10;

/// Damage as a function of difficulty and outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageCurve {
    base_power: u32,
}

/// Tier scaling in percent of base power
const fn tier_percent(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 100,
        Difficulty::Medium => 150,
        Difficulty::Hard => 200,
    }
}

impl DamageCurve {
    pub const fn new(base_power: u32) -> Self {
        Self { base_power }
    }

    /// Zero-damage curve for practice battles
    pub const fn training() -> Self {
        Self { base_power: 0 }
    }

    /// Damage dealt to the opponent on a correct answer
    pub const fn success_damage(&self, difficulty: Difficulty) -> u32 {
        self.base_power * tier_percent(difficulty) / 100
    }

    /// Damage taken by the actor on a wrong answer; half the success
    /// value, but never zero outside training
    pub const fn failure_damage(&self, difficulty: Difficulty) -> u32 {
        if self.base_power == 0 {
            return 0;
        }
        let half = self.success_damage(difficulty) / 2;
        if half == 0 { 1 } else { half }
    }

    /// Resolve an outcome into a damage application
    pub const fn compute(&self, difficulty: Difficulty, correct: bool) -> Damage {
        if correct {
            Damage {
                amount: self.success_damage(difficulty),
                side: DamageSide::Opponent,
            }
        } else {
            Damage {
                amount: self.failure_damage(difficulty),
                side: DamageSide::Actor,
            }
        }
    }
}

impl Default for DamageCurve {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_POWER)
    }
}
