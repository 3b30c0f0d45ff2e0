//! Deterministic random number generation.
//!
//! Implements PCG (Permuted Congruential Generator) so the knight's
//! starting square is reproducible: given the same master seed, every
//! run places the knight identically across runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::engine::board::Coord;

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone)]
pub struct TourRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl TourRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Generate a random u64.
    pub fn gen_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Generate a random index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        (self.gen_u64() as usize) % bound
    }

    /// Generate a uniformly random square on a `size` × `size` board.
    pub fn gen_coord(&mut self, size: u8) -> Coord {
        let x = self.gen_index(usize::from(size)) as u8;
        let y = self.gen_index(usize::from(size)) as u8;
        Coord::new(x, y)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: reproducibility holds for any seed.
        #[test]
        fn prop_reproducibility(seed in 0u64..u64::MAX) {
            let mut rng1 = TourRng::new(seed);
            let mut rng2 = TourRng::new(seed);

            let seq1: Vec<u64> = (0..50).map(|_| rng1.gen_u64()).collect();
            let seq2: Vec<u64> = (0..50).map(|_| rng2.gen_u64()).collect();

            prop_assert_eq!(seq1, seq2);
        }

        /// Falsification: indices stay in bounds for any seed and bound.
        #[test]
        fn prop_index_in_bounds(seed in 0u64..u64::MAX, bound in 1usize..256) {
            let mut rng = TourRng::new(seed);
            for _ in 0..50 {
                prop_assert!(rng.gen_index(bound) < bound);
            }
        }
    }
}
