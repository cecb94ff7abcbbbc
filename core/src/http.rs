//! HTTP messages as plain data.
//!
//! # Design
//! The core never opens a socket. [`crate::client::TodoClient`] builds
//! `HttpRequest` values and parses `HttpResponse` values; whatever executes
//! the round-trip in between (a blocking HTTP client, an async runtime
//! behind a blocking facade, a test harness) implements
//! [`crate::service::HttpTransport`]. Owned fields keep the values free of
//! lifetime ties to any transport internals.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, ready for a transport to
/// execute.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, produced by a transport and
/// consumed by `TodoClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
