//! Evicted-Address Filter: a 2-hash Bloom-style membership filter over recently evicted block
//! addresses, with periodic wholesale reset.

use crate::hash::H3Table;
use crate::rng::Rng;

/// `Alpha`, the filter-to-cache-block sizing ratio.
pub const ALPHA: usize = 8;

/// Number of cache blocks the filter is sized for (16 K, matching a 1024-set, 16-way cache).
const NUM_CACHE_BLOCKS: usize = 16 * 1024;

/// `NumEAFEntry` = `Alpha` * `NumCacheBlocks`.
pub const NUM_EAF_ENTRY: usize = ALPHA * NUM_CACHE_BLOCKS;

/// Number of hash functions (`NumHash`).
pub const NUM_HASH: usize = 2;

/// Number of evictions recorded before the filter is wholesale-reset.
pub const RESET_THRESHOLD: u32 = 16_384;

/// Evicted-Address Filter.
pub struct Eaf {
    bits: Vec<bool>,
    hash_a: H3Table,
    hash_b: H3Table,
    addr_counter: u32,
    resets: u64,
}

impl Eaf {
    /// Builds a filter, drawing its two H3 hash tables from `rng`.
    #[must_use]
    pub fn new(rng: &mut Rng) -> Self {
        Self {
            bits: vec![false; NUM_EAF_ENTRY],
            hash_a: H3Table::new(rng),
            hash_b: H3Table::new(rng),
            addr_counter: 0,
            resets: 0,
        }
    }

    fn index_a(&self, addr: u64) -> usize {
        (self.hash_a.hash(addr) as usize) % NUM_EAF_ENTRY
    }

    fn index_b(&self, addr: u64) -> usize {
        (self.hash_b.hash(addr) as usize) % NUM_EAF_ENTRY
    }

    /// Returns whether `addr` is (probably) a recently evicted block.
    #[must_use]
    pub fn contains(&self, addr: u64) -> bool {
        self.bits[self.index_a(addr)] && self.bits[self.index_b(addr)]
    }

    /// Records the eviction of `addr`: sets both of its bits, advances the eviction counter,
    /// and wholesale-resets the filter once the counter reaches [`RESET_THRESHOLD`].
    ///
    /// The reference implementation writes to the filter for the victim way before the new
    /// line's fill has completed, with no check for whether the address being installed is the
    /// same one just evicted (self-aliasing). Preserved: this call site does not special-case
    /// that overlap.
    pub fn record_eviction(&mut self, addr: u64) {
        let ia = self.index_a(addr);
        let ib = self.index_b(addr);
        self.bits[ia] = true;
        self.bits[ib] = true;

        self.addr_counter += 1;
        if self.addr_counter >= RESET_THRESHOLD {
            self.bits.iter_mut().for_each(|b| *b = false);
            self.addr_counter = 0;
            self.resets += 1;
        }
    }

    /// Number of wholesale resets performed so far, for statistics.
    #[must_use]
    pub fn resets(&self) -> u64 {
        self.resets
    }
}
