//! Property-based invariants that must hold across arbitrary access sequences.

use llcsim_engine::psel::DuelMonitor;
use llcsim_engine::rng::Rng;
use llcsim_engine::shct::{Shct, NUM_SHCT_ENTRIES};
use llcsim_engine::state::{ReplTable, RRIP_MAX};
use llcsim_engine::eaf::{Eaf, RESET_THRESHOLD};
use proptest::prelude::*;

proptest! {
    /// `lru_pos` is always a permutation of `0..ways` within a set, no matter which sequence of
    /// ways gets promoted.
    #[test]
    fn lru_positions_stay_a_permutation(promotions in prop::collection::vec(0usize..8, 0..200)) {
        let mut table = ReplTable::new(1, 8);
        for way in promotions {
            table.lru_promote(0, way);
        }
        let mut positions: Vec<u32> = (0..8).map(|w| table.line(0, w).lru_pos).collect();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..8).collect::<Vec<_>>());
    }

    /// Every RRPV value produced by repeated victim searches stays within `0..RRIP_MAX`.
    #[test]
    fn rrpv_never_exceeds_rrip_max(rounds in 1usize..50) {
        let mut table = ReplTable::new(1, 4);
        for _ in 0..rounds {
            let victim = table.rrip_victim(0);
            table.line_mut(0, victim).rrpv = 0;
            for w in 0..4 {
                let rrpv = table.line(0, w).rrpv;
                prop_assert!(rrpv < RRIP_MAX);
            }
        }
    }

    /// `PSEL` never leaves `[0, psel_max]` regardless of which sets take misses.
    #[test]
    fn psel_stays_in_range(
        set_indices in prop::collection::vec(0usize..2000, 0..500),
    ) {
        let mut monitor = DuelMonitor::new(1024, 32);
        for set in set_indices {
            monitor.record_miss(set);
            prop_assert!(monitor.psel() <= 1024);
        }
    }

    /// SHCT entries never leave `[0, 2^NumSHCTCtrBits + 1]` (the reference implementation's
    /// off-by-one ceiling, deliberately preserved — see [`Shct::increment`]).
    #[test]
    fn shct_entries_stay_bounded(
        ops in prop::collection::vec((0u16..(NUM_SHCT_ENTRIES as u16), any::<bool>()), 0..500),
    ) {
        let mut table = Shct::new();
        for (signature, should_increment) in ops {
            if should_increment {
                table.increment(signature);
            } else {
                table.decrement(signature);
            }
            prop_assert!(table.get(signature) <= 9);
        }
    }

    /// The filter resets exactly once per `RESET_THRESHOLD` recorded evictions, which holds only
    /// if its internal eviction counter never exceeds that threshold before wrapping.
    #[test]
    fn eaf_resets_track_reset_threshold(num_evictions in 0u64..40_000) {
        let mut rng = Rng::new(7);
        let mut eaf = Eaf::new(&mut rng);
        for i in 0..num_evictions {
            eaf.record_eviction(i.wrapping_mul(64));
        }
        prop_assert_eq!(eaf.resets(), num_evictions / u64::from(RESET_THRESHOLD));
    }
}
