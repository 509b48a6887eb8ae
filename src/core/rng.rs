//! Deterministic random number generation for deck shuffling.
//!
//! The engine never reads ambient entropy: construction takes a seed, and
//! the same seed always produces the same shuffle sequence. That is what
//! makes deals reproducible in tests and replays.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing every shuffle in a game.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
