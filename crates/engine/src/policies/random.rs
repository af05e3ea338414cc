//! Random replacement policy.
//!
//! Evicts a uniformly chosen way and leaves all per-line state untouched on access.

use crate::rng::Rng;

/// Draws a uniformly random way in `0..ways`.
pub fn victim(rng: &mut Rng, ways: usize) -> usize {
    rng.below(ways as u64) as usize
}

/// No-op: RANDOM's state does not depend on access history.
pub fn update() {}
