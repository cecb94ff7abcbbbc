//! Error types for the remote todo service.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." `Transport` covers calls that never produced an HTTP response at
//! all (DNS, refused connection, timeout); the controller treats every
//! variant the same way — the remote call yielded no usable body — and folds
//! it into the result envelope rather than surfacing it to callers.

use std::fmt;

/// Errors produced while talking to the remote todo service.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested item does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    /// Includes the empty-body case on endpoints that require one.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The request never produced an HTTP response.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failure: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
