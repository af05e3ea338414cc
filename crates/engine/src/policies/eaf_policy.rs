//! EAF: SRRIP-family victim selection augmented with the Evicted-Address Filter, run under the
//! same set-dueling shell as DRRIP (SEAF as the static arm, BEAF as the bimodal/bypass arm).

use super::srrip;
use crate::common::LineView;
use crate::eaf::Eaf;
use crate::psel::{DuelMonitor, DuelVariant};
use crate::rng::Rng;
use crate::state::{ReplTable, RRIP_MAX};
use crate::stats::ReplacementStats;

/// BEAF inserts with the "good" RRPV on a filter hit with probability `3 / BEAF_ROLL_BOUND`.
const BEAF_ROLL_BOUND: u64 = 10;
const BEAF_ROLL_THRESHOLD: u64 = 3;

/// Selects an RRIP victim and, if it held a valid line, records its eviction in the filter.
///
/// The filter write happens here, before the incoming line's fill completes, and with no check
/// for whether the address being installed is the one just evicted. This matches the reference
/// implementation rather than adding a self-aliasing guard.
pub fn victim(
    table: &mut ReplTable,
    eaf: &mut Eaf,
    vic_set: &[LineView],
    set: usize,
    num_sets: usize,
    line_bytes: usize,
) -> usize {
    let way = srrip::victim(table, set);
    let view = vic_set[way];
    if view.valid {
        eaf.record_eviction(view.block_addr(set, num_sets, line_bytes));
    }
    way
}

/// Applies the winning variant's fill/hit rule.
///
/// A miss always draws BEAF's random roll, even when the filter already says the block is
/// absent — the reference's `&&` short-circuits that draw away on a filter miss, but the
/// textual description of BEAF calls for drawing on every miss regardless of presence, and that
/// description is followed here (see the design notes).
#[allow(clippy::too_many_arguments)]
pub fn update(
    table: &mut ReplTable,
    eaf: &Eaf,
    monitor: &mut DuelMonitor,
    rng: &mut Rng,
    stats: &mut ReplacementStats,
    set: usize,
    way: usize,
    incoming: LineView,
    num_sets: usize,
    line_bytes: usize,
    hit: bool,
) {
    if hit {
        table.line_mut(set, way).rrpv = 0;
        return;
    }

    let addr = incoming.block_addr(set, num_sets, line_bytes);
    let present = eaf.contains(addr);
    let variant = monitor.variant_for(set);

    let rrpv = match variant {
        DuelVariant::Static => {
            if present {
                stats.eaf_static_good_insert += 1;
                RRIP_MAX - 2
            } else {
                stats.eaf_static_bad_insert += 1;
                RRIP_MAX - 1
            }
        }
        DuelVariant::Bimodal => {
            let roll = rng.below(BEAF_ROLL_BOUND) < BEAF_ROLL_THRESHOLD;
            if present && roll {
                stats.eaf_bypass_good_insert += 1;
                RRIP_MAX - 2
            } else {
                stats.eaf_bypass_bad_insert += 1;
                RRIP_MAX - 1
            }
        }
    };
    table.line_mut(set, way).rrpv = rrpv;

    if let Some(leader) = monitor.leader_variant(set) {
        match leader {
            DuelVariant::Static => stats.eaf_leader_static_insert += 1,
            DuelVariant::Bimodal => stats.eaf_leader_bypass_insert += 1,
        }
    }
    monitor.record_miss(set);
}
