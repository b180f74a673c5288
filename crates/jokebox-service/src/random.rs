//! Injectable random selection.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random index source for cache-side selection.
///
/// Injecting the source lets tests drive selection deterministically,
/// including the N=0 and N=1 boundaries.
pub trait RandomSource: Send + Sync {
    /// Returns a uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero; callers must handle the empty case first.
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local RNG source for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Seeded source for deterministic selection in tests.
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Creates a source seeded with the given value.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn pick(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}
