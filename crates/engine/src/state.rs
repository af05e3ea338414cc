//! Per-line replacement state.
//!
//! One record per (set, way): the fields every policy might touch, even though any single
//! policy only reads a subset of them. Matches the reference implementation's flat
//! `LINE_REPLACEMENT_STATE` rather than a tagged union per policy — simpler, and the per-line
//! footprint (a handful of small integers) is not worth specializing away.

/// Maximum RRPV value (`RRIP_MAX`); valid RRPVs are `0..RRIP_MAX`.
pub const RRIP_MAX: u32 = 4;

/// Per-line replacement metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineState {
    /// LRU stack position: 0 is most-recently-used, `ways - 1` is least-recently-used.
    pub lru_pos: u32,
    /// Re-reference prediction value, used by every RRIP-family policy.
    pub rrpv: u32,
    /// SHiP signature recorded at this line's last fill.
    pub signature: u16,
    /// Whether this line has been reused (hit) since its last fill.
    pub outcome: bool,
}

/// Per-set, per-way replacement state table.
#[derive(Clone, Debug)]
pub struct ReplTable {
    lines: Vec<LineState>,
    ways: usize,
}

impl ReplTable {
    /// Allocates a table for `num_sets` sets of `ways` lines each.
    ///
    /// LRU stack positions are initialized to `0..ways` within every set so the permutation
    /// invariant holds from construction.
    #[must_use]
    pub fn new(num_sets: usize, ways: usize) -> Self {
        let mut lines = vec![LineState::default(); num_sets * ways];
        for set in 0..num_sets {
            for way in 0..ways {
                lines[set * ways + way].lru_pos = way as u32;
            }
        }
        Self { lines, ways }
    }

    fn idx(&self, set: usize, way: usize) -> usize {
        set * self.ways + way
    }

    /// Associativity this table was built with.
    #[must_use]
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Read access to a line's state.
    #[must_use]
    pub fn line(&self, set: usize, way: usize) -> &LineState {
        &self.lines[self.idx(set, way)]
    }

    /// Mutable access to a line's state.
    pub fn line_mut(&mut self, set: usize, way: usize) -> &mut LineState {
        let i = self.idx(set, way);
        &mut self.lines[i]
    }

    /// Returns the way with `lru_pos == ways - 1` (the LRU victim).
    #[must_use]
    pub fn lru_victim(&self, set: usize) -> usize {
        let base = set * self.ways;
        (0..self.ways)
            .max_by_key(|&w| self.lines[base + w].lru_pos)
            .expect("ways is nonzero")
    }

    /// Promotes `way` to MRU, shifting every way that was more recent than it down by one.
    ///
    /// Preserves the invariant that `lru_pos` is a permutation of `0..ways` within the set.
    pub fn lru_promote(&mut self, set: usize, way: usize) {
        let base = set * self.ways;
        let promoted = self.lines[base + way].lru_pos;
        for w in 0..self.ways {
            if self.lines[base + w].lru_pos < promoted {
                self.lines[base + w].lru_pos += 1;
            }
        }
        self.lines[base + way].lru_pos = 0;
    }

    /// Scans `set` for a way at `RRIP_MAX - 1`; if none exists, ages every way in the set by one
    /// and scans again. Terminates in at most `RRIP_MAX - 1` aging passes since some way's RRPV
    /// must eventually reach `RRIP_MAX - 1`.
    ///
    /// This assumes every way in the set is valid; the caller is expected to have already
    /// picked off any invalid way before consulting the policy.
    #[must_use]
    pub fn rrip_victim(&mut self, set: usize) -> usize {
        let base = set * self.ways;
        loop {
            if let Some(w) = (0..self.ways).find(|&w| self.lines[base + w].rrpv == RRIP_MAX - 1) {
                return w;
            }
            for w in 0..self.ways {
                self.lines[base + w].rrpv += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_has_permutation_lru_positions() {
        let t = ReplTable::new(4, 8);
        for set in 0..4 {
            let mut positions: Vec<u32> = (0..8).map(|w| t.line(set, w).lru_pos).collect();
            positions.sort_unstable();
            assert_eq!(positions, (0..8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn lru_victim_is_highest_stack_position() {
        let t = ReplTable::new(1, 4);
        assert_eq!(t.lru_victim(0), 3);
    }

    #[test]
    fn lru_promote_preserves_permutation() {
        let mut t = ReplTable::new(1, 4);
        t.lru_promote(0, 2);
        let mut positions: Vec<u32> = (0..4).map(|w| t.line(0, w).lru_pos).collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert_eq!(t.line(0, 2).lru_pos, 0);
    }

    #[test]
    fn rrip_victim_ages_set_until_a_way_reaches_max_minus_one() {
        let mut t = ReplTable::new(1, 4);
        for w in 0..4 {
            t.line_mut(0, w).rrpv = 2;
        }
        let victim = t.rrip_victim(0);
        assert_eq!(victim, 0);
        assert_eq!(t.line(0, 0).rrpv, 3);
        assert_eq!(t.line(0, 3).rrpv, 3);
    }
}
