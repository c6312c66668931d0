//! Linear congruential generator used to make carving decisions reproducible.
//!
//! Parameters are the classic ANSI C `rand()` ones:
//! m = 2^31, a = 1103515245, c = 12345

use std::time::{SystemTime, UNIX_EPOCH};

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;
const MODULUS_MASK: u32 = 0x7fff_ffff;

/// Deterministic random source: the same seed always yields the same stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    seed: i64,
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: i64) -> Self {
        // Only the state modulo 2^31 matters for the recurrence, so truncating
        // to 32 bits is exact for every i64, negative ones included.
        SeededRandom {
            seed,
            state: seed as u32,
        }
    }

    /// Seeds the generator from the wall clock, in milliseconds since the Unix epoch.
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    /// The seed this generator was constructed with.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Advances the state and returns it. The result is always in `[0, 2^31)`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        self.state
    }

    /// Returns a value in `[0, max)`.
    ///
    /// # Panics
    /// If `max` is zero.
    pub fn next_int(&mut self, max: usize) -> usize {
        assert!(max > 0, "next_int called with a zero upper bound");
        self.next() as usize % max
    }
}

/// Milliseconds since the Unix epoch, or zero if the clock is before it.
pub fn time_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
