//! Durable single-slot storage for the session token.
//!
//! The browser implementation writes to `localStorage`; the in-memory one
//! backs native builds and tests. Neither enforces expiry.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

/// A key-value cell holding at most one token.
pub trait TokenStore {
    /// Persist `token`, replacing any prior value.
    fn save(&self, token: &str);
    /// Current token, if any.
    fn read(&self) -> Option<String>;
    /// Remove the stored token.
    fn clear(&self);
}

/// Process-local token cell. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`, as if it survived a reload.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// `window.localStorage` under a fixed key.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

#[cfg(feature = "csr")]
impl LocalStorageTokenStore {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; session will not persist");
        }
        storage
    }
}

#[cfg(feature = "csr")]
impl TokenStore for LocalStorageTokenStore {
    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.set_item(self.key, token) {
            log::warn!("token save failed: {err:?}");
        }
    }

    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.remove_item(self.key) {
            log::warn!("token clear failed: {err:?}");
        }
    }
}

/// Token store appropriate for the current build target.
#[must_use]
pub fn default_token_store() -> Rc<dyn TokenStore> {
    #[cfg(feature = "csr")]
    {
        Rc::new(LocalStorageTokenStore::new(crate::config::TOKEN_STORAGE_KEY))
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(MemoryTokenStore::new())
    }
}
