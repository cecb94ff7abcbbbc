//! Change notification seam.
//!
//! Fire-and-forget: the controller signals observers (typically the UI)
//! after the cached list changes, but delivery is best effort and nothing in
//! the CRUD contract depends on it. Hosts wire this to their event bus;
//! [`NullNotifier`] is the default when nobody listens.

/// Observer channel for "the cached list changed" signals.
pub trait ChangeNotifier {
    fn list_updated(&self);
}

/// Notifier that drops every signal.
#[derive(Debug, Clone, Default)]
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn list_updated(&self) {}
}
