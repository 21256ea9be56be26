//! Deterministic random number generation for move decisions.
//!
//! The same seed always produces the same draws, and so the same race.
//!
//! ```
//! use racing_car::core::RaceRng;
//!
//! let mut a = RaceRng::new(7);
//! let mut b = RaceRng::new(7);
//!
//! let draws_a: Vec<_> = (0..5).map(|_| a.draw(10)).collect();
//! let draws_b: Vec<_> = (0..5).map(|_| b.draw(10)).collect();
//! assert_eq!(draws_a, draws_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backing the random move strategy.
///
/// Uses ChaCha8 so that a seed fully determines the outcome of a race.
#[derive(Clone, Debug)]
pub struct RaceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RaceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a number uniformly from `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn draw(&mut self, upper: u8) -> u8 {
        self.inner.gen_range(0..upper)
    }
}
