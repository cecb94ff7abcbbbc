//! Domain types and the per-operation result envelope.
//!
//! # Design
//! `TodoItem` ids are assigned by the server; an item that has not been
//! created remotely yet carries [`UNASSIGNED_ID`]. Lookup inside a
//! [`TodoList`] goes by id only — the structural `PartialEq` derives exist
//! for assertions, not for cache lookups. `TodoList` serializes as a plain
//! JSON array so it maps 1:1 onto the wire format of list-returning
//! endpoints.

use serde::{Deserialize, Serialize};

/// Sentinel id for items the server has not created yet.
pub const UNASSIGNED_ID: i64 = 0;

/// A single task record: identity, description, completion flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// A not-yet-created item; id stays [`UNASSIGNED_ID`] until the server
    /// assigns one.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            completed: false,
        }
    }
}

/// The ordered collection of a user's todo items.
///
/// Callers must keep ids unique within the list; the type does not enforce
/// it. Replaced wholesale whenever the server returns a fresh snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TodoList {
    pub items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Index of the item with `id`, matched by id only.
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn find(&self, id: i64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Remove and return the item with `id`, preserving the order of the
    /// remaining items.
    pub fn remove(&mut self, id: i64) -> Option<TodoItem> {
        let index = self.position_of(id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Uniform envelope returned by every controller operation.
///
/// `succeeded == false` means `data` must not be trusted.
/// `served_from_network == false` means the value (if present) came from the
/// local cache only and was not validated against the server in this call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult<T> {
    pub data: Option<T>,
    pub served_from_network: bool,
    pub succeeded: bool,
}

impl<T> OperationResult<T> {
    pub fn ok(data: T, served_from_network: bool) -> Self {
        Self {
            data: Some(data),
            served_from_network,
            succeeded: true,
        }
    }

    pub fn failed(served_from_network: bool) -> Self {
        Self {
            data: None,
            served_from_network,
            succeeded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            completed: false,
        }
    }

    #[test]
    fn new_item_carries_sentinel_id() {
        let todo = TodoItem::new("Buy milk");
        assert_eq!(todo.id, UNASSIGNED_ID);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn list_serializes_as_plain_array() {
        let list = TodoList::new(vec![item(1, "First")]);
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["title"], "First");
    }

    #[test]
    fn list_deserializes_from_plain_array() {
        let list: TodoList =
            serde_json::from_str(r#"[{"id":2,"title":"Second","completed":true}]"#).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].id, 2);
        assert!(list.items[0].completed);
    }

    #[test]
    fn lookup_is_by_id_only() {
        let list = TodoList::new(vec![item(1, "a"), item(7, "b")]);
        assert_eq!(list.position_of(7), Some(1));
        assert_eq!(list.find(7).unwrap().title, "b");
        assert!(list.find(99).is_none());
    }

    #[test]
    fn remove_preserves_order_of_remaining_items() {
        let mut list = TodoList::new(vec![item(1, "a"), item(2, "b"), item(3, "c")]);
        let removed = list.remove(2).unwrap();
        assert_eq!(removed.title, "b");
        let ids: Vec<i64> = list.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut list = TodoList::new(vec![item(1, "a")]);
        assert!(list.remove(9).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn failed_result_carries_no_data() {
        let result = OperationResult::<TodoItem>::failed(true);
        assert!(result.data.is_none());
        assert!(result.served_from_network);
        assert!(!result.succeeded);
    }
}
