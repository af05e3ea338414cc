//! Top-level replacement engine: the two-call public contract.
//!
//! `Engine` owns the per-line state table, the selected [`PolicyCore`], and the statistics
//! accumulator. It is the only type a cache simulator needs to hold to delegate victim
//! selection and state maintenance for one cache.

use tracing::{debug, info};

use crate::common::{AccessType, EngineError, LineView};
use crate::config::{EngineConfig, PolicyKind};
use crate::eaf::Eaf;
use crate::policies::PolicyCore;
use crate::psel::DuelMonitor;
use crate::rng::Rng;
use crate::shct::Shct;
use crate::state::ReplTable;
use crate::stats::ReplacementStats;

/// `PSEL_MAX`: the saturating range of the shared set-dueling counter.
const PSEL_MAX: u32 = 1024;

/// `NumLeaderSets`: leader sets dedicated to each arm of a duel.
const NUM_LEADER_SETS: u32 = 32;

/// A pluggable last-level-cache replacement engine.
///
/// Construct with [`Engine::new`], then drive it with [`Engine::choose_victim`] on a miss and
/// [`Engine::update`] after every access.
pub struct Engine {
    table: ReplTable,
    core: PolicyCore,
    stats: ReplacementStats,
    num_sets: usize,
    line_bytes: usize,
}

impl Engine {
    /// Builds an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if `config` fails [`EngineConfig::validate`] or names the
    /// reserved, unimplemented `Custom` policy.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        if config.policy == PolicyKind::Custom {
            return Err(EngineError::UnsupportedPolicy);
        }

        info!(
            sets = config.sets,
            assoc = config.assoc,
            policy = ?config.policy,
            "constructing replacement engine"
        );

        let table = ReplTable::new(config.sets, config.assoc);

        // Every policy with a random-draw path gets its own `Rng`, seeded deterministically
        // from the configured seed but distinct per policy so that e.g. switching from DRRIP to
        // EAF at the same seed does not replay the same draw sequence.
        let core = match config.policy {
            PolicyKind::Lru => PolicyCore::Lru,
            PolicyKind::Srrip => PolicyCore::Srrip,
            PolicyKind::Random => PolicyCore::Random(Rng::new(config.seed)),
            PolicyKind::Drrip => {
                let monitor = DuelMonitor::new(PSEL_MAX, NUM_LEADER_SETS);
                PolicyCore::Drrip(monitor, Rng::new(config.seed ^ 0xD5D5_D5D5_D5D5_D5D5))
            }
            PolicyKind::Ship => PolicyCore::Ship(Shct::new()),
            PolicyKind::Eaf => {
                let mut rng = Rng::new(config.seed ^ 0xEAF0_EAF0_EAF0_EAF0);
                let monitor = DuelMonitor::new(PSEL_MAX, NUM_LEADER_SETS);
                let eaf = Eaf::new(&mut rng);
                PolicyCore::Eaf(monitor, eaf, rng)
            }
            PolicyKind::Custom => unreachable!("rejected above"),
        };

        Ok(Self {
            table,
            core,
            stats: ReplacementStats::default(),
            num_sets: config.sets,
            line_bytes: config.line_bytes,
        })
    }

    /// Chooses a victim way in `set_index` for installation.
    ///
    /// `vic_set` must have exactly as many entries as the engine's configured associativity,
    /// one per way, in way order. The engine trusts every entry to be meaningful when
    /// `valid` is set; it does not itself filter out invalid ways (see module docs).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `set_index` is out of range or `vic_set.len()` does not match
    /// the configured associativity.
    pub fn choose_victim(&mut self, set_index: usize, vic_set: &[LineView]) -> usize {
        debug_assert!(set_index < self.num_sets, "set index out of range");
        debug_assert_eq!(vic_set.len(), self.table.ways(), "vic_set/assoc mismatch");

        self.core
            .choose_victim(&mut self.table, set_index, vic_set, self.num_sets, self.line_bytes)
    }

    /// Updates replacement state after an access.
    ///
    /// `way` is the way just filled (miss) or the way that hit. `pc` feeds SHiP's signature;
    /// ignored by every other policy. `incoming` describes the line now occupying `way`
    /// (post-fill on a miss, unchanged on a hit) and feeds EAF's filter query. `access_type` is
    /// accepted as part of the host contract but not currently consumed by any policy's update
    /// rule, the same way the reference implementation accepts it without every policy reading
    /// it.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `set_index` or `way` is out of range.
    pub fn update(
        &mut self,
        set_index: usize,
        way: usize,
        pc: u64,
        incoming: LineView,
        access_type: AccessType,
        hit: bool,
    ) {
        let _ = access_type;
        debug_assert!(set_index < self.num_sets, "set index out of range");
        debug_assert!(way < self.table.ways(), "way index out of range");

        self.core.update(
            &mut self.table,
            &mut self.stats,
            set_index,
            way,
            pc,
            incoming,
            self.num_sets,
            self.line_bytes,
            hit,
        );

        if let PolicyCore::Eaf(monitor, eaf, _) = &self.core {
            if self.stats.eaf_resets != eaf.resets() {
                debug!(resets = eaf.resets(), "EAF wholesale reset");
                self.stats.eaf_resets = eaf.resets();
            }
            self.stats.psel_final = monitor.psel();
        }
        if let PolicyCore::Drrip(monitor, _) = &self.core {
            self.stats.psel_final = monitor.psel();
        }
    }

    /// Read-only access to accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &ReplacementStats {
        &self.stats
    }
}
