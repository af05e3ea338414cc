//! Shared pseudo-random source.
//!
//! BRRIP's bimodal insertion, BEAF's probabilistic insertion, and the H3 hash table
//! initialization all need a cheap PRNG. A single xorshift generator, seeded once at
//! construction, backs all three so that a fixed seed makes an entire engine run
//! reproducible.

/// A xorshift64 pseudo-random number generator.
///
/// Not cryptographically secure; chosen for the same reason the cache simulator's own
/// replacement policies use one — cheap, deterministic, and good enough to avoid pathological
/// correlation with address patterns.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Creates a new generator from the given seed.
    ///
    /// A seed of zero is remapped to a fixed nonzero value; xorshift cannot recover from an
    /// all-zero state.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Draws the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Draws a value uniformly in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "Rng::below called with bound 0");
        self.next_u64() % bound
    }
}
