//! Authentication state machine shared by every page in the tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` owns the live [`Session`] and the [`TokenStore`] behind it.
//! It is built once at startup, injected wherever it is needed, and mutated
//! only through `initialize`, `login` and `logout`.
//!
//! DESIGN
//! ======
//! Subscribers are invoked synchronously after the new session is stored, so
//! nothing can observe the previous value once a transition returns. The
//! subscriber list is snapshotted before dispatch, which lets callbacks read
//! the store or (un)subscribe without re-entrancy failures.

#[cfg(test)]
#[path = "auth_store_test.rs"]
mod auth_store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::claims::{self, Claims, DecodeError};
use super::token_store::TokenStore;
use crate::util::clock;

/// Current authentication state. Token and claims exist together or not at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { token: String, user: Claims },
}

impl Session {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&Claims> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Handle returned by [`AuthStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&Session)>;

struct Inner {
    tokens: Rc<dyn TokenStore>,
    session: RefCell<Session>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

/// Injectable auth state container. Clones share the same state.
#[derive(Clone)]
pub struct AuthStore {
    inner: Rc<Inner>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.inner.session.borrow().is_authenticated())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl AuthStore {
    /// Create an unauthenticated store. Call [`AuthStore::initialize`] before use.
    pub fn new(tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            inner: Rc::new(Inner {
                tokens,
                session: RefCell::new(Session::Unauthenticated),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Restore the session from the token store using the wall clock.
    pub fn initialize(&self) -> Session {
        self.initialize_at(clock::now_millis())
    }

    /// Restore the session from the token store as of `now_ms`.
    ///
    /// A token that fails to decode or has expired is removed from storage.
    pub fn initialize_at(&self, now_ms: i64) -> Session {
        let Some(token) = self.inner.tokens.read() else {
            log::debug!("no stored token; starting unauthenticated");
            self.set(Session::Unauthenticated);
            return Session::Unauthenticated;
        };

        let next = match claims::decode(&token) {
            Ok(user) if !claims::is_expired(&user, now_ms) => {
                log::info!("restored session (exp={})", user.exp);
                Session::Authenticated { token, user }
            }
            Ok(user) => {
                log::info!("stored token expired (exp={}); clearing", user.exp);
                self.inner.tokens.clear();
                Session::Unauthenticated
            }
            Err(err) => {
                log::warn!("stored token unreadable; clearing: {err}");
                self.inner.tokens.clear();
                Session::Unauthenticated
            }
        };
        self.set(next.clone());
        next
    }

    /// Start a session from a freshly issued token, replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the token is malformed; nothing is stored
    /// and the current session is left untouched.
    pub fn login(&self, token: &str) -> Result<Session, DecodeError> {
        let user = claims::decode(token)?;
        self.inner.tokens.save(token);
        let next = Session::Authenticated { token: token.to_owned(), user };
        log::info!("logged in");
        self.set(next.clone());
        Ok(next)
    }

    /// End the session. Safe to call when already logged out.
    pub fn logout(&self) {
        self.inner.tokens.clear();
        if self.inner.session.borrow().is_authenticated() {
            log::info!("logged out");
        }
        self.set(Session::Unauthenticated);
    }

    /// The live session value.
    #[must_use]
    pub fn current_session(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    /// The live token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.session.borrow().token().map(str::to_owned)
    }

    /// Register `callback` to run after every session change.
    pub fn subscribe(&self, callback: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    fn set(&self, next: Session) {
        {
            let mut current = self.inner.session.borrow_mut();
            if *current == next {
                return;
            }
            *current = next.clone();
        }
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(&next);
        }
    }
}
