//! SHiP: SRRIP victim selection with a PC-signature-driven insertion predictor.

use super::srrip;
use crate::shct::{Shct, NUM_SHCT_ENTRIES};
use crate::state::{ReplTable, RRIP_MAX};
use crate::stats::ReplacementStats;

/// Derives a 14-bit signature from a PC.
#[must_use]
pub fn signature_of(pc: u64) -> u16 {
    ((pc >> 2) & (NUM_SHCT_ENTRIES as u64 - 1)) as u16
}

/// Selects a victim, identical to plain SRRIP.
#[must_use]
pub fn victim(table: &mut ReplTable, set: usize) -> usize {
    srrip::victim(table, set)
}

/// Applies SHiP's hit/fill rule.
///
/// On a hit, the counter incremented is `SHCT[signature_of(pc)]` — the signature of the
/// *current* access — rather than `SHCT[signature recorded at this line's fill]`, which is what
/// classical SHiP specifies. This reproduces the reference implementation's behavior rather
/// than the textbook one; see the design notes for why it is kept.
pub fn update(
    table: &mut ReplTable,
    shct: &mut Shct,
    stats: &mut ReplacementStats,
    set: usize,
    way: usize,
    pc: u64,
    hit: bool,
) {
    let sig_now = signature_of(pc);

    if hit {
        shct.increment(sig_now);
        table.line_mut(set, way).outcome = true;
        table.line_mut(set, way).rrpv = 0;
        return;
    }

    let line = *table.line(set, way);
    if !line.outcome {
        shct.decrement(line.signature);
    }

    let predicted_reused = shct.get(sig_now) != 0;
    let line = table.line_mut(set, way);
    line.signature = sig_now;
    line.outcome = false;
    if predicted_reused {
        line.rrpv = RRIP_MAX - 2;
        stats.ship_good_insert += 1;
    } else {
        line.rrpv = RRIP_MAX - 1;
        stats.ship_bad_insert += 1;
    }
}
