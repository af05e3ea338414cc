//! H3 universal hashing for the Evicted-Address Filter.
//!
//! Each hash function is a table of 64 random constants, one per address bit; the hash of an
//! address is the XOR of the constants whose corresponding bit is set. This is the classic H3
//! construction: for any fixed table, the family is universal over its random draw.

use crate::rng::Rng;

/// Number of bits hashed per table (one constant per address bit).
const TABLE_BITS: usize = 64;

/// Upper bound (exclusive) for sampled hash constants, inherited unchanged from the reference
/// filter sizing.
const HASH_CONST_BOUND: u64 = 130_304;

/// One H3 hash function: a fixed table of random constants.
#[derive(Clone, Debug)]
pub struct H3Table {
    table: [u64; TABLE_BITS],
}

impl H3Table {
    /// Materializes a table by drawing `TABLE_BITS` constants from `rng`.
    pub fn new(rng: &mut Rng) -> Self {
        let mut table = [0u64; TABLE_BITS];
        for slot in &mut table {
            *slot = rng.below(HASH_CONST_BOUND);
        }
        Self { table }
    }

    /// Hashes a 64-bit block address: XOR of `table[i]` over every bit `i` set in `addr`.
    #[must_use]
    pub fn hash(&self, addr: u64) -> u64 {
        let mut acc = 0u64;
        for (i, &c) in self.table.iter().enumerate() {
            if addr & (1u64 << i) != 0 {
                acc ^= c;
            }
        }
        acc
    }
}
