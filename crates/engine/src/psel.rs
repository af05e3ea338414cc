//! Set-Dueling monitor shared by DRRIP and EAF.
//!
//! A small number of "leader" sets are permanently pinned to one of two policy variants; a
//! single saturating counter (`PSEL`) tracks which variant is winning by counting misses in the
//! leader sets. Every other set ("follower") picks whichever variant `PSEL` currently favors.

/// Which of the two dueling variants a set should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelVariant {
    /// The "static" variant (SRRIP for DRRIP, SEAF for EAF).
    Static,
    /// The "bimodal"/bypass variant (BRRIP for DRRIP, BEAF for EAF).
    Bimodal,
}

/// Role a set plays in the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LeaderRole {
    StaticLeader,
    BimodalLeader,
    Follower,
}

/// Shared saturating counter plus leader-set classification for DRRIP/EAF.
#[derive(Clone, Debug)]
pub struct DuelMonitor {
    psel: u32,
    psel_max: u32,
    num_leader_sets: u32,
}

impl DuelMonitor {
    /// Creates a monitor with the given saturation ceiling and leader-set count.
    ///
    /// Initial value is `psel_max / 2`, i.e. a tie between the two variants. (The reference
    /// implementation's constructor reads this from an uninitialized field before `PSEL_MAX`
    /// is set; `psel_max / 2` is the value it almost certainly intended.)
    #[must_use]
    pub fn new(psel_max: u32, num_leader_sets: u32) -> Self {
        Self {
            psel: psel_max / 2,
            psel_max,
            num_leader_sets,
        }
    }

    fn role(&self, set_index: usize) -> LeaderRole {
        let set_index = set_index as u32;
        let static_bound = 33 * self.num_leader_sets;
        let bimodal_bound = 31 * self.num_leader_sets;
        if set_index % 33 == 0 && set_index < static_bound {
            LeaderRole::StaticLeader
        } else if set_index % 31 == 0 && set_index > 0 && set_index <= bimodal_bound {
            LeaderRole::BimodalLeader
        } else {
            LeaderRole::Follower
        }
    }

    /// Returns `Some(variant)` if `set_index` is permanently pinned to that variant as a leader
    /// set, or `None` if it is a follower (its variant floats with `PSEL`).
    #[must_use]
    pub fn leader_variant(&self, set_index: usize) -> Option<DuelVariant> {
        match self.role(set_index) {
            LeaderRole::StaticLeader => Some(DuelVariant::Static),
            LeaderRole::BimodalLeader => Some(DuelVariant::Bimodal),
            LeaderRole::Follower => None,
        }
    }

    /// Returns the variant a given set should use on this access.
    #[must_use]
    pub fn variant_for(&self, set_index: usize) -> DuelVariant {
        match self.role(set_index) {
            LeaderRole::StaticLeader => DuelVariant::Static,
            LeaderRole::BimodalLeader => DuelVariant::Bimodal,
            LeaderRole::Follower => {
                if self.psel >= self.psel_max / 2 {
                    DuelVariant::Static
                } else {
                    DuelVariant::Bimodal
                }
            }
        }
    }

    /// Records a miss in `set_index`, moving `PSEL` if the set is a leader. No-op for follower
    /// sets. Saturates at `0` and `psel_max`.
    pub fn record_miss(&mut self, set_index: usize) {
        match self.role(set_index) {
            LeaderRole::StaticLeader => self.psel = self.psel.saturating_sub(1),
            LeaderRole::BimodalLeader => self.psel = (self.psel + 1).min(self.psel_max),
            LeaderRole::Follower => {}
        }
    }

    /// Current counter value, for statistics and testing.
    #[must_use]
    pub fn psel(&self) -> u32 {
        self.psel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_is_half_max() {
        let m = DuelMonitor::new(1024, 32);
        assert_eq!(m.psel(), 512);
    }

    #[test]
    fn static_leader_miss_decrements() {
        let mut m = DuelMonitor::new(1024, 32);
        m.record_miss(0);
        assert_eq!(m.psel(), 511);
    }

    #[test]
    fn bimodal_leader_miss_increments() {
        let mut m = DuelMonitor::new(1024, 32);
        m.record_miss(31);
        assert_eq!(m.psel(), 513);
    }

    #[test]
    fn follower_miss_does_not_move_psel() {
        let mut m = DuelMonitor::new(1024, 32);
        m.record_miss(1);
        assert_eq!(m.psel(), 512);
    }

    #[test]
    fn follower_at_tie_picks_static() {
        let m = DuelMonitor::new(1024, 32);
        assert_eq!(m.variant_for(1), DuelVariant::Static);
    }

    #[test]
    fn psel_saturates_at_zero() {
        let mut m = DuelMonitor::new(1024, 32);
        for _ in 0..600 {
            m.record_miss(0);
        }
        assert_eq!(m.psel(), 0);
    }

    #[test]
    fn psel_saturates_at_max() {
        let mut m = DuelMonitor::new(1024, 32);
        for _ in 0..600 {
            m.record_miss(31);
        }
        assert_eq!(m.psel(), 1024);
    }
}
