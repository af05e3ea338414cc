//! Pluggable last-level-cache replacement policy engine.
//!
//! This crate implements the cache-line replacement core of a last-level cache (LLC)
//! simulator: given a cache's geometry and a choice of policy, it decides which way to evict on
//! a miss and maintains whatever per-line and per-cache auxiliary state that policy needs.
//!
//! Six policies are supported:
//! 1. **LRU** — least-recently-used stack.
//! 2. **RANDOM** — uniform random eviction.
//! 3. **SRRIP** — static re-reference interval prediction.
//! 4. **DRRIP** — set-dueling shell over SRRIP and BRRIP.
//! 5. **SHiP** — SRRIP augmented with a PC-signature reuse predictor.
//! 6. **EAF** — set-dueling shell over SEAF/BEAF, each backed by an Evicted-Address Filter.
//!
//! The engine owns no knowledge of the cache's tag store, address decoding, or timing model —
//! it is handed read-only [`common::LineView`]s for the set under consideration and reports
//! back a way index. See [`engine::Engine`] for the two-call public contract.

/// Common types shared across the engine (line views, access types, errors).
pub mod common;
/// Engine configuration (geometry, policy selection).
pub mod config;
/// Evicted-Address Filter.
pub mod eaf;
/// Top-level `Engine` type and its public contract.
pub mod engine;
/// H3 universal hashing for the EAF.
pub mod hash;
/// Replacement policy implementations and their tagged-variant dispatch.
pub mod policies;
/// Set-Dueling monitor shared by DRRIP and EAF.
pub mod psel;
/// Shared pseudo-random source.
pub mod rng;
/// Signature History Counter Table for SHiP.
pub mod shct;
/// Per-line replacement state table.
pub mod state;
/// Statistics collection and reporting.
pub mod stats;

/// Access classification threaded through `Engine::update`.
pub use crate::common::AccessType;
/// Construction error type.
pub use crate::common::EngineError;
/// Line view handed to the engine by the host cache.
pub use crate::common::LineView;
/// Engine configuration type; use `EngineConfig::default()` or deserialize from JSON.
pub use crate::config::{EngineConfig, PolicyKind};
/// The replacement engine itself.
pub use crate::engine::Engine;
