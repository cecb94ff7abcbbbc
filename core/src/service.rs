//! The remote service seam the controller depends on.
//!
//! # Design
//! [`RemoteTodoService`] is the only shape the controller sees: five typed
//! endpoint calls with a blocking contract. It deliberately hides transport
//! detail — the controller only cares whether a call produced a usable body
//! (`Ok`) or not (`Err`, any variant). An implementation may run async I/O
//! internally as long as it blocks the caller until the call completes.
//!
//! [`HttpTodoService`] is the shipped implementation: it glues the stateless
//! [`TodoClient`] build/parse pair to an [`HttpTransport`] that executes the
//! round-trip. Tests substitute an in-memory `RemoteTodoService` fake
//! instead.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{TodoItem, TodoList};

/// Blocking, typed access to the five remote endpoints.
///
/// No retries; each call runs to completion or failure once.
pub trait RemoteTodoService {
    fn fetch_all(&self) -> Result<TodoList, ApiError>;

    fn fetch_by_id(&self, id: i64) -> Result<TodoItem, ApiError>;

    /// Full-item replacement. Returns the server's copy of the item.
    fn update_by_id(&self, id: i64, item: &TodoItem) -> Result<TodoItem, ApiError>;

    /// Returns the post-delete list snapshot.
    fn delete_by_id(&self, id: i64) -> Result<TodoList, ApiError>;

    /// The server assigns the item's id. Returns the post-create list
    /// snapshot.
    fn create(&self, item: &TodoItem) -> Result<TodoList, ApiError>;
}

/// Executes one HTTP round-trip, blocking until it completes.
///
/// Failures that never produced an HTTP response must map to
/// [`ApiError::Transport`]; non-2xx statuses are returned as data for the
/// parse step to interpret.
pub trait HttpTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// [`RemoteTodoService`] backed by a [`TodoClient`] and an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTodoService<T> {
    client: TodoClient,
    transport: T,
}

impl<T: HttpTransport> HttpTodoService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }
}

impl<T: HttpTransport> RemoteTodoService for HttpTodoService<T> {
    fn fetch_all(&self) -> Result<TodoList, ApiError> {
        let response = self.transport.execute(self.client.build_fetch_all())?;
        self.client.parse_fetch_all(response)
    }

    fn fetch_by_id(&self, id: i64) -> Result<TodoItem, ApiError> {
        let response = self.transport.execute(self.client.build_fetch_item(id))?;
        self.client.parse_fetch_item(response)
    }

    fn update_by_id(&self, id: i64, item: &TodoItem) -> Result<TodoItem, ApiError> {
        let request = self.client.build_update_item(id, item)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_item(response)
    }

    fn delete_by_id(&self, id: i64) -> Result<TodoList, ApiError> {
        let response = self.transport.execute(self.client.build_delete_item(id))?;
        self.client.parse_delete_item(response)
    }

    fn create(&self, item: &TodoItem) -> Result<TodoList, ApiError> {
        let request = self.client.build_create_item(item)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_item(response)
    }
}
