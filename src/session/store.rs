//! In-memory Session Store

use dashmap::DashMap;
use tracing::debug;

use super::models::{Session, SessionId};
use crate::catalog::ItemId;

/// Sessions keyed by id.
///
/// Each operation locks a single entry, so two requests of the same session
/// never lose an append, but their relative order is not defined.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, Session>,
}

impl SessionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session with empty state and returns its id.
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, Session::new());
        debug!(session = %id, "created session");
        id
    }

    /// Whether `id` names a live session
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Runs `f` against the session's state, holding its entry lock.
    ///
    /// A session missing from the store is recreated empty.
    pub fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut session = self.sessions.entry(*id).or_default();
        f(&mut session)
    }

    /// A copy of the session's cart, empty for unknown sessions.
    pub fn cart(&self, id: &SessionId) -> Vec<ItemId> {
        self.sessions
            .get(id)
            .map(|session| session.cart.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the session's pending notices.
    ///
    /// Unknown sessions have none; nothing is stored for them.
    pub fn take_flashes(&self, id: &SessionId) -> Vec<String> {
        self.sessions
            .get_mut(id)
            .map(|mut session| session.take_flashes())
            .unwrap_or_default()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_session_starts_empty() {
        let store = SessionStore::new();
        let id = store.create();

        assert!(store.contains(&id));
        assert!(store.cart(&id).is_empty());
        assert_eq!(store.with_session(&id, |session| session.clone()), Session::new());
    }

    #[test]
    fn test_sessions_do_not_share_carts() {
        let store = SessionStore::new();
        let first = store.create();
        let second = store.create();

        store.with_session(&first, |session| session.add_to_cart(1));
        store.with_session(&first, |session| session.add_to_cart(1));

        assert_eq!(store.cart(&first), vec![1, 1]);
        assert!(store.cart(&second).is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unknown_session_is_recreated_on_write() {
        let store = SessionStore::new();
        let id = SessionId::new();

        assert!(store.cart(&id).is_empty());
        store.with_session(&id, |session| session.add_to_cart(3));

        assert_eq!(store.cart(&id), vec![3]);
    }

    #[test]
    fn test_taking_flashes_of_unknown_session_stores_nothing() {
        let store = SessionStore::new();

        assert!(store.take_flashes(&SessionId::new()).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_take_flashes_drains_notices() {
        let store = SessionStore::new();
        let id = store.create();
        store.with_session(&id, |session| session.flash("Hello"));

        assert_eq!(store.take_flashes(&id), vec!["Hello"]);
        assert!(store.take_flashes(&id).is_empty());
    }
}
