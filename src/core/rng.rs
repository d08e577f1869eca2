//! Deterministic random number generation for board layouts.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same layouts
//! - **Forkable**: Each game gets its own child stream with a recorded seed
//! - **Uniform shuffles**: Fisher-Yates via `rand::seq::SliceRandom`
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! // Forks are reproducible from their seed alone
//! let mut again = GameRng::new(game_rng.seed());
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! game_rng.shuffle(&mut a);
//! again.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to shuffle boards.
///
/// Uses ChaCha8 for speed while keeping good statistical quality, which
/// matters here: every dot permutation must be equally likely.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from a freshly drawn OS seed.
    ///
    /// The seed is still recorded, so a layout can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent child stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place. Every permutation is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
