//! Seedable randomness for the opponent's fallback move.
//!
//! Each opponent owns a `GameRng`; nothing reads process-global random
//! state, so the same seed replays the same choices.
//!
//! ```
//! use hexxagon::core::{CellId, GameRng};
//!
//! let border = [CellId(3), CellId(17), CellId(40)];
//! let first = GameRng::new(42).choose(&border).copied();
//! let second = GameRng::new(42).choose(&border).copied();
//! assert_eq!(first, second);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream plus the seed that started it.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed drawn from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this stream started from, for logging a reproducible game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from `candidates`; `None` when there are none.
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        candidates.choose(&mut self.stream)
    }
}
