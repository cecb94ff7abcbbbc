//! Conflict policy applied when a fetched server item lands on a cached
//! slot.
//!
//! The policy is named and swappable so a real reconciliation strategy
//! (timestamps, versions) can replace it later without touching the
//! controller's control flow.

use crate::types::TodoItem;

/// Decides which value a cached slot takes when both a local and a server
/// copy of the same item are known.
pub trait ConflictPolicy {
    fn reconcile(&self, local: &TodoItem, server: TodoItem) -> TodoItem;
}

/// Blind overwrite: the server's copy wins unconditionally, no timestamp or
/// version comparison.
#[derive(Debug, Clone, Default)]
pub struct ServerWins;

impl ConflictPolicy for ServerWins {
    fn reconcile(&self, _local: &TodoItem, server: TodoItem) -> TodoItem {
        server
    }
}
