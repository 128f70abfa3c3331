//! Combatant profiles
//!
//! The riddle core only sees the minimal slice of a combatant: its level,
//! its elemental affinities, and whether an AI answers for it. The host
//! battle system owns the rest (stats, moves, party position) and supplies
//! a profile per turn; the core never mutates it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Elemental affinity tags
///
/// Affinities bias riddle category selection and AI aptitude; they never
/// touch damage directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TypeAffinity {
    Metal,
    Earth,
    Aether,
    Wood,
    Water,
    Fire,
}

/// What the riddle core needs to know about one combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantProfile {
    /// Combat level, always at least 1
    pub level: u32,
    pub affinities: Vec<TypeAffinity>,
    pub is_ai_controlled: bool,
}

impl CombatantProfile {
    /// Create a human-controlled profile; levels below 1 are raised to 1
    pub fn human(level: u32) -> Self {
        Self {
            level: level.max(1),
            affinities: Vec::new(),
            is_ai_controlled: false,
        }
    }

    /// Create an AI-controlled profile; levels below 1 are raised to 1
    pub fn ai(level: u32) -> Self {
        Self {
            level: level.max(1),
            affinities: Vec::new(),
            is_ai_controlled: true,
        }
    }

    /// Add an elemental affinity
    pub fn with_affinity(mut self, affinity: TypeAffinity) -> Self {
        self.affinities.push(affinity);
        self
    }
}
