//! Seedable random number generation for tile shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Seed-reporting**: Entropy-seeded RNGs remember their seed, so a
//!   surprising deal can be reproduced from logs
//!
//! ```
//! use red_herring::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing a game session.
///
/// Uses ChaCha8 for speed while keeping a uniform Fisher-Yates shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
