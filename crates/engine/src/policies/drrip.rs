//! DRRIP: a set-dueling shell over SRRIP (static arm) and BRRIP (bimodal arm).

use super::srrip;
use crate::psel::{DuelMonitor, DuelVariant};
use crate::rng::Rng;
use crate::state::ReplTable;
use crate::stats::ReplacementStats;

/// Selects a victim, identical to plain SRRIP — the duel only changes insertion, not eviction.
#[must_use]
pub fn victim(table: &mut ReplTable, set: usize) -> usize {
    srrip::victim(table, set)
}

/// Applies the winning variant's fill/hit rule, then updates the duel monitor and stats on a
/// miss.
///
/// The per-arm insert counters (`drrip_srrip_insert`/`drrip_brrip_insert`) count only follower-set
/// misses; a leader set's misses are counted by the leader counters instead, never both — leader
/// sets never update their own arm's insert counter, matching `UpdateSRRIP`/`UpdateBRRIP` in the
/// reference, which touch no stat counter themselves.
pub fn update(
    table: &mut ReplTable,
    rng: &mut Rng,
    monitor: &mut DuelMonitor,
    stats: &mut ReplacementStats,
    set: usize,
    way: usize,
    hit: bool,
) {
    let leader = monitor.leader_variant(set);

    match monitor.variant_for(set) {
        DuelVariant::Static => {
            srrip::update(table, set, way, hit);
            if !hit && leader.is_none() {
                stats.drrip_srrip_insert += 1;
            }
        }
        DuelVariant::Bimodal => {
            srrip::update_brrip(table, rng, set, way, hit);
            if !hit && leader.is_none() {
                stats.drrip_brrip_insert += 1;
            }
        }
    }

    if !hit {
        if let Some(variant) = leader {
            match variant {
                DuelVariant::Static => stats.drrip_srrip_leader += 1,
                DuelVariant::Bimodal => stats.drrip_brrip_leader += 1,
            }
        }
        monitor.record_miss(set);
    }
}
