//! Random number generation for riddle battles
//!
//! Uses a seeded ChaCha RNG for reproducibility. Each battle session owns
//! exactly one `BattleRng`; replaying a battle with the same seed replays
//! every selection and AI verdict.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Battle random number generator
///
/// Wraps ChaCha8Rng and remembers the seed it was built from.
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0
    pub fn roll(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns true with the given probability, clamped to [0.0, 1.0]
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.roll(100) < percent
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.roll(items.len() as u32) as usize])
        }
    }
}

impl Default for BattleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
