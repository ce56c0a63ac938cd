//! Deterministic random number generation for roster shuffling.
//!
//! The same seed always produces the same ring, which keeps seeded games
//! reproducible.
//!
//! ```
//! use assassin_ring::core::RingRng;
//!
//! let mut a = vec!["Ann", "Bob", "Cara", "Dan"];
//! let mut b = a.clone();
//! RingRng::new(42).shuffle(&mut a);
//! RingRng::new(42).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct RingRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RingRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
