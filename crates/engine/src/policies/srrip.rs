//! SRRIP and BRRIP: the two base RRIP variants.
//!
//! Both share the same victim search ([`crate::state::ReplTable::rrip_victim`]) and the same
//! hit rule; they differ only in what RRPV a filled line gets. BRRIP never runs standalone — it
//! exists to be the bimodal arm of DRRIP's set-dueling shell.

use crate::rng::Rng;
use crate::state::{ReplTable, RRIP_MAX};

/// One in `BRRIP_rate` fills get the "long" insertion instead of "distant".
const BRRIP_RATE: u64 = 16;

/// Selects an RRIP victim in `set` (shared by SRRIP, DRRIP, SHiP, and EAF).
#[must_use]
pub fn victim(table: &mut ReplTable, set: usize) -> usize {
    table.rrip_victim(set)
}

/// SRRIP's hit/fill rule: hit promotes to `0`; a fill gets `RRIP_MAX - 2` ("long").
///
/// Only the hit-priority variant is modeled; the reference also supports a frequency-priority
/// variant that decrements RRPV on hit instead, but no construction path selects it.
pub fn update(table: &mut ReplTable, set: usize, way: usize, hit: bool) {
    let line = table.line_mut(set, way);
    if hit {
        line.rrpv = 0;
    } else {
        line.rrpv = RRIP_MAX - 2;
    }
}

/// BRRIP's hit/fill rule: hit promotes to `0`; a fill gets `RRIP_MAX - 2` with probability
/// `1 / BRRIP_RATE`, otherwise `RRIP_MAX - 1` ("distant").
pub fn update_brrip(table: &mut ReplTable, rng: &mut Rng, set: usize, way: usize, hit: bool) {
    let line = table.line_mut(set, way);
    if hit {
        line.rrpv = 0;
    } else if rng.below(BRRIP_RATE) == 0 {
        line.rrpv = RRIP_MAX - 2;
    } else {
        line.rrpv = RRIP_MAX - 1;
    }
}
