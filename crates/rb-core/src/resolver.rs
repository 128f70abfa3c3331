//! Difficulty and category resolution
//!
//! Pure functions from a combatant profile to a target difficulty tier and
//! a set of category weights. Calling them twice with the same profile
//! gives the same answer; nothing here touches an RNG.

use strum::{EnumCount, IntoEnumIterator};

use crate::catalog::{Category, Difficulty};
use crate::combatant::{CombatantProfile, TypeAffinity};

/// Highest level still asked easy riddles
pub const EASY_LEVEL_MAX: u32 = 10;
/// Highest level still asked medium riddles
pub const MEDIUM_LEVEL_MAX: u32 = 25;

/// Every category keeps this weight so no category is ever unreachable
pub const BASELINE_WEIGHT: u32 = 1;

/// Map a combat level onto a difficulty tier
pub const fn difficulty_for_level(level: u32) -> Difficulty {
    if level <= EASY_LEVEL_MAX {
        Difficulty::Easy
    } else if level <= MEDIUM_LEVEL_MAX {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Extra category weight granted by one affinity tag
///
/// Shared with the AI simulator, which converts these integer bonuses into
/// success-chance modifiers.
pub const fn affinity_bonus(affinity: TypeAffinity, category: Category) -> u32 {
    match (affinity, category) {
        (TypeAffinity::Metal, Category::Math) => 3,
        (TypeAffinity::Earth, Category::Math) => 2,
        (TypeAffinity::Aether, Category::Logic) => 3,
        (TypeAffinity::Aether, Category::Wordplay) => 1,
        (TypeAffinity::Wood, Category::Wordplay) => 3,
        (TypeAffinity::Wood, Category::Logic) => 1,
        (TypeAffinity::Water, Category::Logic) => 2,
        (TypeAffinity::Fire, Category::Wordplay) => 2,
        _ => 0,
    }
}

/// Per-category selection weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWeights {
    weights: [u32; Category::COUNT],
}

impl CategoryWeights {
    /// All categories at baseline weight
    pub fn baseline() -> Self {
        Self {
            weights: [BASELINE_WEIGHT; Category::COUNT],
        }
    }

    pub fn weight(&self, category: Category) -> u32 {
        self.weights[category.index()]
    }

    fn bump(&mut self, category: Category, by: u32) {
        self.weights[category.index()] += by;
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Resolve a profile into its target difficulty and category weighting
pub fn resolve(profile: &CombatantProfile) -> (Difficulty, CategoryWeights) {
    let difficulty = difficulty_for_level(profile.level);

    let mut weights = CategoryWeights::baseline();
    for &affinity in &profile.affinities {
        for category in Category::iter() {
            let bonus = affinity_bonus(affinity, category);
            if bonus > 0 {
                weights.bump(category, bonus);
            }
        }
    }

    (difficulty, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(difficulty_for_level(1), Difficulty::Easy);
        assert_eq!(difficulty_for_level(10), Difficulty::Easy);
        assert_eq!(difficulty_for_level(11), Difficulty::Medium);
        assert_eq!(difficulty_for_level(25), Difficulty::Medium);
        assert_eq!(difficulty_for_level(26), Difficulty::Hard);
        assert_eq!(difficulty_for_level(99), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_monotonic_in_level() {
        let mut previous = difficulty_for_level(1);
        for level in 2..=100 {
            let current = difficulty_for_level(level);
            assert!(current >= previous, "difficulty regressed at level {level}");
            previous = current;
        }
    }

    #[test]
    fn test_baseline_keeps_every_category_reachable() {
        let profile = CombatantProfile::ai(5).with_affinity(TypeAffinity::Metal);
        let (_, weights) = resolve(&profile);
        for category in Category::iter() {
            assert!(weights.weight(category) >= BASELINE_WEIGHT);
        }
    }

    #[test]
    fn test_metal_favors_math() {
        let (_, weights) = resolve(&CombatantProfile::ai(5).with_affinity(TypeAffinity::Metal));
        assert_eq!(weights.weight(Category::Math), BASELINE_WEIGHT + 3);
        assert_eq!(weights.weight(Category::Logic), BASELINE_WEIGHT);
    }

    #[test]
    fn test_affinities_stack() {
        let profile = CombatantProfile::ai(5)
            .with_affinity(TypeAffinity::Aether)
            .with_affinity(TypeAffinity::Water);
        let (_, weights) = resolve(&profile);
        assert_eq!(weights.weight(Category::Logic), BASELINE_WEIGHT + 3 + 2);
        assert_eq!(weights.weight(Category::Wordplay), BASELINE_WEIGHT + 1);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let profile = CombatantProfile::human(12).with_affinity(TypeAffinity::Wood);
        assert_eq!(resolve(&profile), resolve(&profile));
    }
}
