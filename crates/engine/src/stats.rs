//! Replacement engine statistics collection and reporting.
//!
//! Tracks the non-functional counters the policy core increments along the way: set-dueling
//! leader accounting for DRRIP and EAF, SHiP's good/bad insertion split, and EAF's own
//! good/bad insertion split under each duel arm.

/// Statistics accumulated by the replacement engine.
///
/// Only the fields relevant to the constructed policy are ever nonzero; e.g. an LRU engine's
/// `ship_*` and `eaf_*` counters stay at zero for its whole lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplacementStats {
    /// Misses in an SRRIP leader set (DRRIP).
    pub drrip_srrip_leader: u64,
    /// Misses in a BRRIP leader set (DRRIP).
    pub drrip_brrip_leader: u64,
    /// Fills inserted under the SRRIP arm (DRRIP).
    pub drrip_srrip_insert: u64,
    /// Fills inserted under the BRRIP arm (DRRIP).
    pub drrip_brrip_insert: u64,

    /// SHiP fills inserted as "distant" (predicted not to be reused).
    pub ship_bad_insert: u64,
    /// SHiP fills inserted as "long" (predicted to be reused).
    pub ship_good_insert: u64,

    /// Misses in an SEAF leader set.
    pub eaf_leader_static_insert: u64,
    /// Misses in a BEAF leader set.
    pub eaf_leader_bypass_insert: u64,
    /// SEAF fills inserted as "distant" (filter miss).
    pub eaf_static_bad_insert: u64,
    /// SEAF fills inserted as "long" (filter hit).
    pub eaf_static_good_insert: u64,
    /// BEAF fills inserted as "distant".
    pub eaf_bypass_bad_insert: u64,
    /// BEAF fills inserted as "long".
    pub eaf_bypass_good_insert: u64,

    /// Number of wholesale EAF resets observed so far.
    pub eaf_resets: u64,
    /// `PSEL` value at the time of the last report, for DRRIP/EAF engines.
    pub psel_final: u32,
}

impl ReplacementStats {
    /// Renders a human-readable report.
    ///
    /// Always includes the DRRIP section and the SHiP/EAF sections; fields that never moved
    /// from zero for a non-selected policy simply print as zero, same as the surrounding
    /// simulator's stats reports do for unused subsystems.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("==========================================================\n");
        out.push_str("REPLACEMENT ENGINE STATISTICS\n");
        out.push_str("==========================================================\n");
        out.push_str("DRRIP\n");
        out.push_str(&format!("  leader.srrip           {}\n", self.drrip_srrip_leader));
        out.push_str(&format!("  leader.brrip           {}\n", self.drrip_brrip_leader));
        out.push_str(&format!("  insert.srrip           {}\n", self.drrip_srrip_insert));
        out.push_str(&format!("  insert.brrip           {}\n", self.drrip_brrip_insert));
        out.push_str(&format!("  psel                   {}\n", self.psel_final));
        out.push_str("----------------------------------------------------------\n");
        out.push_str("SHiP\n");
        out.push_str(&format!("  insert.good            {}\n", self.ship_good_insert));
        out.push_str(&format!("  insert.bad             {}\n", self.ship_bad_insert));
        out.push_str("----------------------------------------------------------\n");
        out.push_str("EAF\n");
        out.push_str(&format!(
            "  leader.static          {}\n",
            self.eaf_leader_static_insert
        ));
        out.push_str(&format!(
            "  leader.bypass          {}\n",
            self.eaf_leader_bypass_insert
        ));
        out.push_str(&format!(
            "  static.good            {}\n",
            self.eaf_static_good_insert
        ));
        out.push_str(&format!(
            "  static.bad             {}\n",
            self.eaf_static_bad_insert
        ));
        out.push_str(&format!(
            "  bypass.good            {}\n",
            self.eaf_bypass_good_insert
        ));
        out.push_str(&format!(
            "  bypass.bad             {}\n",
            self.eaf_bypass_bad_insert
        ));
        out.push_str(&format!("  resets                 {}\n", self.eaf_resets));
        out.push_str("==========================================================\n");
        out
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{}", self.report());
    }
}
