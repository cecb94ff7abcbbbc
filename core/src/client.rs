//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`],
//! keeping the crate deterministic and free of I/O.
//!
//! Wire contract: update echoes the updated item, while delete and create
//! return the full post-mutation list snapshot — the controller replaces its
//! cache with those snapshots instead of patching it locally. Success on
//! every endpoint requires a parseable body; an empty body fails the parse.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{TodoItem, TodoList};

/// Synchronous, stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The transport executes the round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_fetch_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Full-item replacement; the server echoes the stored item back.
    pub fn build_update_item(&self, id: i64, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(item).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The item's id field is a sentinel at this point; the server assigns
    /// the real one.
    pub fn build_create_item(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(item).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_fetch_all(&self, response: HttpResponse) -> Result<TodoList, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response.body)
    }

    pub fn parse_fetch_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response.body)
    }

    /// The delete response body is the post-delete list snapshot.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<TodoList, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response.body)
    }

    /// The create response body is the post-create list snapshot, including
    /// the server-assigned id of the new item.
    pub fn parse_create_item(&self, response: HttpResponse) -> Result<TodoList, ApiError> {
        check_status(&response, 201)?;
        parse_body(&response.body)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// A success status with an empty or malformed body is still a failure: the
/// caller needs the body as its new source of truth.
fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
