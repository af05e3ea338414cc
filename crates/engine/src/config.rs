//! Configuration for the replacement engine.
//!
//! Defines the deserializable configuration surface: cache geometry and which of the six
//! policies to run. Construction validates it and turns bad input into [`EngineError`] rather
//! than panicking or silently clamping.
//!
//! Configuration is supplied as JSON (or anything else `serde` supports) or via
//! `EngineConfig::default()` for ad-hoc use (e.g. from the replay CLI).

use serde::Deserialize;

use crate::common::EngineError;

/// Default configuration constants.
///
/// These are the geometry defaults used when not explicitly overridden: a 1024-set,
/// 16-way, 64-byte-line last-level cache (1 MiB).
mod defaults {
    /// Default number of sets.
    pub const SETS: usize = 1024;

    /// Default associativity (ways per set).
    pub const ASSOC: usize = 16;

    /// Default cache line size in bytes.
    pub const LINE_BYTES: usize = 64;
}

/// Replacement policy selection.
///
/// Mirrors the six-policy enumeration (plus the reserved, unimplemented `Custom` slot) that the
/// policy core's construction paths dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// Least Recently Used.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Uniform random eviction.
    #[serde(alias = "Random")]
    Random,
    /// Static Re-Reference Interval Prediction.
    #[serde(alias = "Srrip")]
    Srrip,
    /// Dynamic RRIP (set-dueling SRRIP/BRRIP).
    #[serde(alias = "Drrip")]
    Drrip,
    /// Signature-based Hit Predictor.
    #[serde(alias = "Ship")]
    Ship,
    /// Evicted-Address Filter (set-dueling SEAF/BEAF).
    #[serde(alias = "Eaf")]
    Eaf,
    /// Reserved for a user-supplied policy; no construction path implements it.
    #[serde(alias = "Custom")]
    Custom,
}

/// Engine configuration: cache geometry plus policy selection.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Number of sets in the cache.
    #[serde(default = "EngineConfig::default_sets")]
    pub sets: usize,

    /// Associativity (ways per set).
    #[serde(default = "EngineConfig::default_assoc")]
    pub assoc: usize,

    /// Cache line size in bytes, used to reconstruct block addresses for the EAF.
    #[serde(default = "EngineConfig::default_line_bytes")]
    pub line_bytes: usize,

    /// Which replacement policy to run.
    #[serde(default)]
    pub policy: PolicyKind,

    /// Seed for the engine's shared PRNG (BRRIP/BEAF draws, H3 hash table init). Fixed by
    /// default so a default-configured engine is reproducible; override for Monte Carlo runs.
    #[serde(default = "EngineConfig::default_seed")]
    pub seed: u64,
}

impl EngineConfig {
    fn default_sets() -> usize {
        defaults::SETS
    }

    fn default_assoc() -> usize {
        defaults::ASSOC
    }

    fn default_line_bytes() -> usize {
        defaults::LINE_BYTES
    }

    fn default_seed() -> u64 {
        0x5EED_5EED_5EED_5EED
    }

    /// Validates the configuration, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ZeroSets`] or [`EngineError::ZeroAssoc`] if either is zero.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.sets == 0 {
            return Err(EngineError::ZeroSets);
        }
        if self.assoc == 0 {
            return Err(EngineError::ZeroAssoc);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sets: defaults::SETS,
            assoc: defaults::ASSOC,
            line_bytes: defaults::LINE_BYTES,
            policy: PolicyKind::default(),
            seed: Self::default_seed(),
        }
    }
}
