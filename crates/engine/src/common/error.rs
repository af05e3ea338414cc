//! Construction-time error types.
//!
//! This module defines the error surface for the replacement engine. The hot path
//! (`choose_victim`/`update`) never returns a `Result` — an out-of-range set or way index from
//! the caller is a caller bug, caught with debug assertions in [`crate::engine`]. Construction,
//! however, takes untrusted configuration and reports mistakes through [`EngineError`].

use thiserror::Error;

/// Errors produced when constructing a replacement engine or its configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The configured number of sets was zero.
    #[error("number of sets must be nonzero")]
    ZeroSets,

    /// The configured associativity was zero.
    #[error("associativity (ways) must be nonzero")]
    ZeroAssoc,

    /// `PolicyKind::Custom` was selected; the slot is reserved but no construction path
    /// implements it.
    #[error("the CUSTOM policy is reserved and has no implementation")]
    UnsupportedPolicy,
}
