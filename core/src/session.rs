//! The local session store: one cached [`TodoList`] per user context.
//!
//! # Design
//! The original design reached a process-global singleton from every call
//! site. Here the session is an explicit value handed to the controller, so
//! the host decides its scope (one per user context, living for the app's
//! lifetime) and tests build a fresh fixture each time. Single-writer: there
//! is no internal locking, callers must not mutate concurrently.

use crate::types::TodoList;

/// Holder of the single cached [`TodoList`] for the current user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    list: TodoList,
}

impl Session {
    /// Empty session, as created lazily on first touch of a user context.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(list: TodoList) -> Self {
        Self { list }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Mutable access for in-place item mutation.
    pub fn list_mut(&mut self) -> &mut TodoList {
        &mut self.list
    }

    /// Replace the cached list wholesale with a server snapshot.
    pub fn replace(&mut self, list: TodoList) {
        self.list = list;
    }
}
