//! Reactive auth context for Leptos components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges the [`AuthStore`] state machine into a `RwSignal<Session>` so the
//! navbar and route guards re-render on login/logout. Provided once by the
//! root component; pages obtain it with `expect_context::<AuthContext>()`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::ApiClient;
use crate::session::{AuthStore, DecodeError, Session};

/// Copyable handle to the tab's session and API client.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    store: StoredValue<AuthStore, LocalStorage>,
    api: StoredValue<ApiClient, LocalStorage>,
}

impl AuthContext {
    /// Mirror `store` into a signal. The store should already be initialized.
    pub fn new(store: AuthStore, api: ApiClient) -> Self {
        let session = RwSignal::new(store.current_session());
        store.subscribe(move |next| session.set(next.clone()));
        Self {
            session,
            store: StoredValue::new_local(store),
            api: StoredValue::new_local(api),
        }
    }

    /// Reactive read of the current session.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Reactive check used by the navbar and route guard.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Label for the signed-in user, when the token carries one.
    pub fn display_name(&self) -> Option<String> {
        self.session
            .with(|s| s.user().and_then(|claims| claims.display_name()).map(str::to_owned))
    }

    /// # Errors
    ///
    /// Returns [`DecodeError`] for a malformed token; the session is unchanged.
    pub fn login(&self, token: &str) -> Result<(), DecodeError> {
        self.store.with_value(|store| store.login(token)).map(|_| ())
    }

    pub fn logout(&self) {
        self.store.with_value(AuthStore::logout);
    }

    /// Clone of the shared API client for use inside spawned tasks.
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }
}
