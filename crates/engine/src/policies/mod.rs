//! Replacement policy core: the six algorithms behind the engine's public contract.
//!
//! This is a closed sum over six known alternatives, so it is modeled as a tagged variant
//! ([`PolicyCore`]) with a match-based method table rather than as runtime polymorphism over an
//! abstract trait object — there is no open set of third-party policies to support, and the
//! variants differ enough in their auxiliary state (none, an RNG, a duel monitor, an SHCT, a
//! duel monitor plus a Bloom filter) that a shared trait would mostly be empty methods.

mod drrip;
mod eaf_policy;
mod lru;
mod random;
mod ship;
mod srrip;

use crate::common::LineView;
use crate::eaf::Eaf;
use crate::psel::DuelMonitor;
use crate::rng::Rng;
use crate::shct::Shct;
use crate::state::ReplTable;
use crate::stats::ReplacementStats;

/// The auxiliary state owned by whichever policy was selected at construction.
pub enum PolicyCore {
    /// Least Recently Used: no auxiliary state beyond the per-line stack positions.
    Lru,
    /// Uniform random eviction, backed by a seeded generator.
    Random(Rng),
    /// Static RRIP with hit-priority insertion.
    Srrip,
    /// Set-dueling shell over SRRIP and BRRIP.
    Drrip(DuelMonitor, Rng),
    /// SRRIP victim selection steered by a PC-signature history table.
    Ship(Shct),
    /// Set-dueling shell over SEAF and BEAF, each backed by the Evicted-Address Filter.
    Eaf(DuelMonitor, Eaf, Rng),
}

impl PolicyCore {
    /// Chooses a victim way in `set`.
    ///
    /// `vic_set` is the host's read-only view of every way in the set, used only by the EAF
    /// variant to reconstruct the evicted block's address; every other variant ignores it.
    pub fn choose_victim(
        &mut self,
        table: &mut ReplTable,
        set: usize,
        vic_set: &[LineView],
        num_sets: usize,
        line_bytes: usize,
    ) -> usize {
        match self {
            PolicyCore::Lru => lru::victim(table, set),
            PolicyCore::Random(rng) => random::victim(rng, table.ways()),
            PolicyCore::Srrip | PolicyCore::Ship(_) => srrip::victim(table, set),
            PolicyCore::Drrip(..) => drrip::victim(table, set),
            PolicyCore::Eaf(_, eaf, _) => {
                eaf_policy::victim(table, eaf, vic_set, set, num_sets, line_bytes)
            }
        }
    }

    /// Applies the policy's hit/fill rule and updates any auxiliary state.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        table: &mut ReplTable,
        stats: &mut ReplacementStats,
        set: usize,
        way: usize,
        pc: u64,
        incoming: LineView,
        num_sets: usize,
        line_bytes: usize,
        hit: bool,
    ) {
        match self {
            PolicyCore::Lru => lru::update(table, set, way),
            PolicyCore::Random(_) => random::update(),
            PolicyCore::Srrip => srrip::update(table, set, way, hit),
            PolicyCore::Drrip(monitor, rng) => {
                drrip::update(table, rng, monitor, stats, set, way, hit);
            }
            PolicyCore::Ship(shct) => ship::update(table, shct, stats, set, way, pc, hit),
            PolicyCore::Eaf(monitor, eaf, rng) => eaf_policy::update(
                table, eaf, monitor, rng, stats, set, way, incoming, num_sets, line_bytes, hit,
            ),
        }
    }
}
