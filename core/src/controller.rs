//! The synchronization controller: per-operation offline/online policy over
//! the session cache and the remote service.
//!
//! # Policy
//! Offline: reads are served from cache (a list read always succeeds, even
//! on an empty cache) and every write is rejected before any network call.
//! Online: writes must succeed remotely before the cache changes, and the
//! server's response — often a full refreshed list snapshot — becomes the
//! new source of truth. Server state always wins over local state when both
//! are known; concurrent edits are never merged.
//!
//! Every operation blocks its caller for the duration of any network call it
//! issues and returns an [`OperationResult`] instead of an error; nothing
//! here retries. The session store has no internal locking — one logical
//! caller at a time.
//!
//! # Write ordering
//! The design this controller descends from applied local mutations before
//! confirming the remote write, so a failed remote update or delete silently
//! diverged the cache from the server. Update and delete here confirm the
//! remote call first and only then touch the cache, matching create's
//! ordering; a transport failure leaves the cache at the last known-good
//! state.

use tracing::{debug, warn};

use crate::connectivity::ConnectivityProbe;
use crate::notify::{ChangeNotifier, NullNotifier};
use crate::policy::{ConflictPolicy, ServerWins};
use crate::service::RemoteTodoService;
use crate::session::Session;
use crate::types::{OperationResult, TodoItem, TodoList};

/// Optional behaviors a host can query for before relying on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Refreshing the cached list off the caller's thread. Not provided;
    /// hosts poll [`SyncController::fetch_list`] instead.
    BackgroundRefresh,
}

/// CRUD mediator between the local [`Session`] cache and a
/// [`RemoteTodoService`].
///
/// Generic over its collaborators so tests substitute in-memory fakes; the
/// defaults drop notifications ([`NullNotifier`]) and resolve conflicts by
/// blind overwrite ([`ServerWins`]).
#[derive(Debug)]
pub struct SyncController<S, P, N = NullNotifier, C = ServerWins> {
    service: S,
    probe: P,
    notifier: N,
    policy: C,
    session: Session,
}

impl<S: RemoteTodoService, P: ConnectivityProbe> SyncController<S, P> {
    pub fn new(service: S, probe: P, session: Session) -> Self {
        Self {
            service,
            probe,
            notifier: NullNotifier,
            policy: ServerWins,
            session,
        }
    }
}

impl<S, P, N, C> SyncController<S, P, N, C>
where
    S: RemoteTodoService,
    P: ConnectivityProbe,
    N: ChangeNotifier,
    C: ConflictPolicy,
{
    pub fn with_notifier<N2: ChangeNotifier>(self, notifier: N2) -> SyncController<S, P, N2, C> {
        SyncController {
            service: self.service,
            probe: self.probe,
            notifier,
            policy: self.policy,
            session: self.session,
        }
    }

    pub fn with_policy<C2: ConflictPolicy>(self, policy: C2) -> SyncController<S, P, N, C2> {
        SyncController {
            service: self.service,
            probe: self.probe,
            notifier: self.notifier,
            policy,
            session: self.session,
        }
    }

    /// The session cache as this controller currently sees it.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hand the session back to the host, e.g. to persist it.
    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::BackgroundRefresh => false,
        }
    }

    /// Fetch the whole list.
    ///
    /// Offline the cache is always "valid": the current contents are
    /// returned with `succeeded == true`, even when empty. Online, a
    /// successful fetch replaces the cached item collection; a failed fetch
    /// leaves the stale cache untouched and reports failure.
    pub fn fetch_list(&mut self) -> OperationResult<TodoList> {
        if !self.probe.has_network() {
            return OperationResult::ok(self.session.list().clone(), false);
        }
        match self.service.fetch_all() {
            Ok(list) => {
                self.session.list_mut().items = list.items;
                self.notifier.list_updated();
                OperationResult::ok(self.session.list().clone(), true)
            }
            Err(err) => {
                warn!(error = %err, "list fetch failed, keeping stale cache");
                OperationResult::failed(true)
            }
        }
    }

    /// Fetch a single item by id.
    ///
    /// The cache is consulted first regardless of connectivity. Offline the
    /// local lookup is the result. Online the server's copy is fetched and,
    /// when the item is cached, reconciled into the same slot via the
    /// conflict policy; an item unknown to the cache is returned to the
    /// caller but never inserted.
    pub fn fetch_item(&mut self, id: i64) -> OperationResult<TodoItem> {
        let local = self.session.list().find(id).cloned();

        if !self.probe.has_network() {
            return match local {
                Some(item) => OperationResult::ok(item, false),
                None => OperationResult::failed(false),
            };
        }

        match self.service.fetch_by_id(id) {
            Ok(server_item) => {
                let index = self.session.list().position_of(id);
                let reconciled = match (local, index) {
                    (Some(local_item), Some(index)) => {
                        let merged = self.policy.reconcile(&local_item, server_item);
                        self.session.list_mut().items[index] = merged.clone();
                        merged
                    }
                    _ => server_item,
                };
                OperationResult::ok(reconciled, true)
            }
            Err(err) => {
                debug!(id, error = %err, "item fetch failed, cache unchanged");
                OperationResult::failed(true)
            }
        }
    }

    /// Replace the item with `id` by `new_item`.
    ///
    /// Rejected offline. Online, an id absent from the cache fails before
    /// any network call — the controller never updates an item it does not
    /// know about locally. The cached slot takes the server's echoed item
    /// only after the remote update returned a usable body.
    pub fn update_item(&mut self, id: i64, new_item: TodoItem) -> OperationResult<()> {
        if !self.probe.has_network() {
            debug!(id, "update rejected while offline");
            return OperationResult::failed(false);
        }

        let Some(index) = self.session.list().position_of(id) else {
            debug!(id, "update rejected, item not cached locally");
            return OperationResult::failed(false);
        };

        match self.service.update_by_id(id, &new_item) {
            Ok(echoed) => {
                self.session.list_mut().items[index] = echoed;
                self.notifier.list_updated();
                OperationResult::ok((), true)
            }
            Err(err) => {
                warn!(id, error = %err, "remote update failed, cache unchanged");
                OperationResult::failed(true)
            }
        }
    }

    /// Delete `item` (matched by id).
    ///
    /// Rejected offline; an id absent from the cache fails before any
    /// network call. On remote success the entire cached list is replaced by
    /// the server's post-delete snapshot, not merely the one slot removed.
    pub fn delete_item(&mut self, item: &TodoItem) -> OperationResult<()> {
        if !self.probe.has_network() {
            debug!(id = item.id, "delete rejected while offline");
            return OperationResult::failed(false);
        }

        if self.session.list().position_of(item.id).is_none() {
            debug!(id = item.id, "delete rejected, item not cached locally");
            return OperationResult::failed(false);
        }

        match self.service.delete_by_id(item.id) {
            Ok(snapshot) => {
                self.session.replace(snapshot);
                self.notifier.list_updated();
                OperationResult::ok((), true)
            }
            Err(err) => {
                warn!(id = item.id, error = %err, "remote delete failed, cache unchanged");
                OperationResult::failed(true)
            }
        }
    }

    /// Create `item` remotely.
    ///
    /// Rejected offline. The remote call always comes first — the server
    /// assigns the item's id, so no local mutation precedes it. On success
    /// the cached list is replaced by the server's post-create snapshot,
    /// which contains the new item under its assigned id.
    pub fn create_item(&mut self, item: TodoItem) -> OperationResult<()> {
        if !self.probe.has_network() {
            debug!("create rejected while offline");
            return OperationResult::failed(false);
        }

        match self.service.create(&item) {
            Ok(snapshot) => {
                self.session.replace(snapshot);
                self.notifier.list_updated();
                OperationResult::ok((), true)
            }
            Err(err) => {
                warn!(error = %err, "remote create failed, cache unchanged");
                OperationResult::failed(true)
            }
        }
    }
}
