use dioxus::prelude::*;
use nexus_types::auth::{AuthResponse, Role, Session};

use super::session::SessionStore;

/// Session handle shared through the component tree.
///
/// Provided once at the application root. Components read the session through
/// it and re-render when it changes; only `sign_in` and `sign_out` write, and
/// they go through [`SessionStore`] so the signal always mirrors what is
/// persisted.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: Signal<Session>,
    store: SessionStore,
}

/// Load the persisted session and provide it to descendants.
pub fn use_session_provider() -> SessionContext {
    let store = SessionStore::browser();
    let session = use_signal(move || store.load());
    use_context_provider(|| SessionContext { session, store })
}

/// Get the session handle from context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

impl SessionContext {
    /// Current session, subscribing the caller to changes.
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    pub fn is_admin(&self) -> bool {
        self.session.read().is_admin()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token().map(str::to_string)
    }

    /// Store credentials returned by login or registration.
    pub fn sign_in(&self, response: AuthResponse) {
        let role = response.role();
        if role.is_none() {
            tracing::warn!(role = %response.role, "API returned an unknown role");
        }
        self.store.set_auth(&response.token, role, &response.user_id);
        self.refresh();
    }

    pub fn sign_out(&self) {
        self.store.clear_auth();
        self.refresh();
    }

    fn refresh(&self) {
        let mut session = self.session;
        session.set(self.store.load());
    }
}
