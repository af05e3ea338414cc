//! Line views and access classification.
//!
//! The engine never owns the tag store; the cache hands it a read-only view of each way in the
//! set being accessed, and the engine reconstructs whatever it needs (a block address, a
//! validity check) from that view.

/// Type of memory access that triggered the call into the engine.
///
/// Carried through to statistics; the replacement policies themselves are indifferent to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch.
    Fetch,
    /// Data load.
    Read,
    /// Data store.
    Write,
}

/// Read-only view of one way of a cache set, as seen by the replacement engine.
///
/// The host owns the real tag store; this is the minimal projection the engine needs to
/// reconstruct a block address for the Evicted-Address Filter and to decide which ways are
/// eligible for eviction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineView {
    /// Whether this way currently holds a valid line.
    pub valid: bool,
    /// The tag stored in this way, meaningful only when `valid` is true.
    pub tag: u64,
}

impl LineView {
    /// Reconstructs the block address of this line given its set index and the cache's set
    /// count.
    ///
    /// Mirrors the address decomposition the host used to produce `tag`/`setIndex` in the first
    /// place: `addr = (tag * num_sets + set_index) * line_bytes`.
    #[must_use]
    pub fn block_addr(self, set_index: usize, num_sets: usize, line_bytes: usize) -> u64 {
        (self.tag * num_sets as u64 + set_index as u64) * line_bytes as u64
    }
}
