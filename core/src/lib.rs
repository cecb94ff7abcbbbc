//! Local-first synchronization core for a single user's todo list.
//!
//! # Overview
//! Mediates between an in-memory session cache and a remote REST service:
//! offline, reads are served from cache and writes are rejected; online,
//! writes must succeed remotely before the cache changes and the server's
//! response becomes the new source of truth. Every operation returns a
//! uniform [`OperationResult`] envelope instead of raising.
//!
//! # Design
//! - [`SyncController`] owns the policy; all of its collaborators are traits
//!   ([`RemoteTodoService`], [`ConnectivityProbe`], [`ChangeNotifier`],
//!   [`ConflictPolicy`]) so hosts and tests plug in their own.
//! - The crate performs no I/O itself. [`TodoClient`] builds `HttpRequest`
//!   values and parses `HttpResponse` values; an [`HttpTransport`]
//!   implementation supplied by the host executes the round-trips behind the
//!   blocking [`RemoteTodoService`] contract.
//! - The [`Session`] cache is an explicit value, not a global; one per user
//!   context, single writer.

pub mod client;
pub mod connectivity;
pub mod controller;
pub mod error;
pub mod http;
pub mod notify;
pub mod policy;
pub mod service;
pub mod session;
pub mod types;

pub use client::TodoClient;
pub use connectivity::ConnectivityProbe;
pub use controller::{Capability, SyncController};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{ChangeNotifier, NullNotifier};
pub use policy::{ConflictPolicy, ServerWins};
pub use service::{HttpTodoService, HttpTransport, RemoteTodoService};
pub use session::Session;
pub use types::{OperationResult, TodoItem, TodoList, UNASSIGNED_ID};
