//! WASM-compatible random number generator.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws for the sampler.
///
/// [`DrawRng`] is the production implementation; tests substitute fixed
/// sources to drive the sampler down specific paths.
pub trait RandomSource {
    /// Generate a uniformly random i64 in [min, max], both ends inclusive.
    fn gen_inclusive(&mut self, min: i64, max: i64) -> i64;
}

/// A seedable RNG wrapper for WASM.
///
/// Can be seeded for deterministic replay, or created from system entropy.
/// Passed explicitly into the sampler so tests can pin the sequence.
pub struct DrawRng {
    inner: SmallRng,
}

impl DrawRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DrawRng {
    #[inline(always)]
    fn gen_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.inner.random_range(min..=max)
    }
}

impl Default for DrawRng {
    fn default() -> Self {
        Self::new()
    }
}
