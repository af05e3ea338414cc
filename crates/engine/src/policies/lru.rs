//! Least Recently Used policy.
//!
//! Evicts the line at the bottom of the per-set recency stack and promotes the touched line to
//! the top on every access, hit or miss alike.

use crate::state::ReplTable;

/// Selects the LRU victim in `set`.
#[must_use]
pub fn victim(table: &ReplTable, set: usize) -> usize {
    table.lru_victim(set)
}

/// Promotes `way` to most-recently-used. Called identically on hit and on fill.
pub fn update(table: &mut ReplTable, set: usize, way: usize) {
    table.lru_promote(set, way);
}
