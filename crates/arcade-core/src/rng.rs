//! Deterministic random number generator
//!
//! xorshift64, so a seed passed on the command line replays the exact same
//! spawn pattern on every platform.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed used when the clock is unavailable
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// A deterministic random number generator used for spawn positions,
/// obstacle sizes and spawn timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed. Also resumes from a saved
    /// [`GameRng::state`].
    pub fn new(seed: u64) -> Self {
        // xorshift gets stuck at zero
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the wall clock
    pub fn from_time() -> Self {
        Self::new(seed_from_time())
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next raw u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform integer in `[0, bound)`. Returns 0 for a non-positive bound.
    pub fn below(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as i32
    }

    /// Pick a random element from a slice
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let i = (self.next_u64() % slice.len() as u64) as usize;
        slice.get(i)
    }
}

/// Derive a seed from the current wall-clock time
pub fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}
