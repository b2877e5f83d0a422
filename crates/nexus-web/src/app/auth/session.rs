//! Persisted session state.
//!
//! `SessionStore` is the only code that reads or writes the stored token, role
//! and user id. The three fields live together under one storage key, so
//! writing them is a single storage operation and a reader can never observe a
//! token without its role.

use nexus_types::auth::{Role, Session};

use crate::app::storage::{BrowserStorage, StorageBackend};

/// Storage key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "nexus_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStore<B = BrowserStorage> {
    backend: B,
}

impl SessionStore<BrowserStorage> {
    /// Store backed by `localStorage`, so sessions survive reloads.
    pub fn browser() -> Self {
        Self::new(BrowserStorage::local())
    }
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Current session; anonymous when nothing usable is stored.
    pub fn load(&self) -> Session {
        self.backend.get_json::<Session>(SESSION_KEY).unwrap_or_default()
    }

    pub fn get_token(&self) -> Option<String> {
        self.load().token().map(str::to_string)
    }

    pub fn get_role(&self) -> Option<Role> {
        self.load().role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_authenticated()
    }

    /// Persist credentials issued by the API. Storage failures are logged and
    /// otherwise ignored; the session then simply reads back as anonymous.
    pub fn set_auth(&self, token: &str, role: Option<Role>, user_id: &str) {
        let session = Session::new(token, role, user_id);
        match self.backend.set_json(SESSION_KEY, &session) {
            Ok(()) => tracing::debug!(role = ?role, "session stored"),
            Err(e) => tracing::warn!(error = %e, "failed to persist session"),
        }
    }

    /// Forget the stored session. Safe to call repeatedly.
    pub fn clear_auth(&self) {
        match self.backend.remove(SESSION_KEY) {
            Ok(()) => tracing::debug!("session cleared"),
            Err(e) => tracing::warn!(error = %e, "failed to clear session"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::storage::MemoryStorage;

    fn store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
        let backend = MemoryStorage::new();
        (SessionStore::new(backend.clone()), backend)
    }

    #[test]
    fn fresh_store_is_anonymous() {
        let (store, _) = store();
        assert!(!store.is_authenticated());
        assert_eq!(store.get_token(), None);
        assert_eq!(store.get_role(), None);
        assert_eq!(store.load(), Session::anonymous());
    }

    #[test]
    fn set_auth_then_is_authenticated() {
        let (store, _) = store();
        store.set_auth("t1", Some(Role::Admin), "u1");
        assert!(store.is_authenticated());
        assert_eq!(store.get_token().as_deref(), Some("t1"));
        assert_eq!(store.get_role(), Some(Role::Admin));
        assert_eq!(store.load().user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn set_auth_is_a_single_write() {
        let (store, backend) = store();
        store.set_auth("t1", Some(Role::User), "u1");
        assert_eq!(backend.len(), 1);
        store.set_auth("t2", Some(Role::Student), "u2");
        assert_eq!(backend.len(), 1);
        assert_eq!(store.get_role(), Some(Role::Student));
    }

    #[test]
    fn clear_auth_is_idempotent() {
        let (store, backend) = store();
        store.set_auth("t1", Some(Role::User), "u1");

        store.clear_auth();
        assert!(!store.is_authenticated());
        let after_once = store.load();

        store.clear_auth();
        assert!(!store.is_authenticated());
        assert_eq!(store.load(), after_once);
        assert!(backend.is_empty());
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let (store, _) = store();
        store.set_auth("", Some(Role::Admin), "u1");
        assert!(!store.is_authenticated());
        assert_eq!(store.get_token(), None);
        assert_eq!(store.get_role(), None);
    }

    #[test]
    fn corrupt_value_reads_as_anonymous() {
        let (store, backend) = store();
        backend.set(SESSION_KEY, "{\"token\": 42").unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn unavailable_storage_degrades_silently() {
        let store = SessionStore::new(MemoryStorage::unavailable());
        store.set_auth("t1", Some(Role::Admin), "u1");
        assert!(!store.is_authenticated());
        store.clear_auth();
        assert_eq!(store.get_role(), None);
    }
}
