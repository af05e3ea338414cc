//! Unit-level integration tests for the replacement engine.

/// The six worked end-to-end scenarios (LRU warm-up, SRRIP aging, DRRIP leader accounting,
/// SHiP cold insert, EAF reuse boost, EAF periodic reset).
pub mod engine_scenarios;

/// Property-based invariants that must hold for every policy across arbitrary access
/// sequences (LRU permutation, RRPV range, PSEL range, SHCT range).
pub mod invariants;
