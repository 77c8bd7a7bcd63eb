use std::cell::RefCell;
use std::rc::Rc;

use base64::{Engine as _, engine::general_purpose};

use super::*;
use crate::session::token_store::MemoryTokenStore;

const NOW_MS: i64 = 1_700_000_000_000;

fn token_expiring_at(exp: i64) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let body = general_purpose::URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp},"email":"ops@example.com"}}"#));
    format!("{header}.{body}.sig")
}

fn live_token() -> String {
    token_expiring_at(NOW_MS / 1000 + 3600)
}

fn expired_token() -> String {
    token_expiring_at(NOW_MS / 1000 - 1)
}

fn store_with(tokens: &MemoryTokenStore) -> AuthStore {
    AuthStore::new(Rc::new(tokens.clone()))
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_token_is_unauthenticated() {
    let tokens = MemoryTokenStore::new();
    let auth = store_with(&tokens);
    assert_eq!(auth.initialize_at(NOW_MS), Session::Unauthenticated);
}

#[test]
fn initialize_with_expired_token_clears_storage() {
    let tokens = MemoryTokenStore::with_token(&expired_token());
    let auth = store_with(&tokens);
    assert_eq!(auth.initialize_at(NOW_MS), Session::Unauthenticated);
    assert_eq!(auth.current_session(), Session::Unauthenticated);
    assert_eq!(tokens.read(), None);
}

#[test]
fn initialize_treats_exact_expiry_instant_as_expired() {
    let tokens = MemoryTokenStore::with_token(&token_expiring_at(NOW_MS / 1000));
    let auth = store_with(&tokens);
    assert!(!auth.initialize_at(NOW_MS).is_authenticated());
    assert_eq!(tokens.read(), None);
}

#[test]
fn initialize_with_malformed_token_clears_storage() {
    let tokens = MemoryTokenStore::with_token("garbage");
    let auth = store_with(&tokens);
    assert_eq!(auth.initialize_at(NOW_MS), Session::Unauthenticated);
    assert_eq!(tokens.read(), None);
}

#[test]
fn initialize_with_live_token_restores_claims() {
    let token = live_token();
    let tokens = MemoryTokenStore::with_token(&token);
    let auth = store_with(&tokens);
    let session = auth.initialize_at(NOW_MS);
    assert_eq!(session.token(), Some(token.as_str()));
    assert_eq!(session.user(), Some(&claims::decode(&token).expect("claims")));
    assert_eq!(tokens.read(), Some(token));
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_stores_token_and_sets_session() {
    let tokens = MemoryTokenStore::new();
    let auth = store_with(&tokens);
    let token = live_token();
    auth.login(&token).expect("login");
    let session = auth.current_session();
    assert_eq!(session.token(), Some(token.as_str()));
    assert_eq!(session.user().and_then(Claims::email), Some("ops@example.com"));
    assert_eq!(tokens.read(), Some(token));
}

#[test]
fn login_replaces_existing_session() {
    let tokens = MemoryTokenStore::new();
    let auth = store_with(&tokens);
    auth.login(&live_token()).expect("first login");
    let second = token_expiring_at(NOW_MS / 1000 + 7200);
    auth.login(&second).expect("second login");
    assert_eq!(auth.token(), Some(second.clone()));
    assert_eq!(tokens.read(), Some(second));
}

#[test]
fn login_with_malformed_token_changes_nothing() {
    let tokens = MemoryTokenStore::new();
    let auth = store_with(&tokens);
    let token = live_token();
    auth.login(&token).expect("login");
    assert!(auth.login("abc.def").is_err());
    assert_eq!(auth.token(), Some(token.clone()));
    assert_eq!(tokens.read(), Some(token));
}

#[test]
fn logout_is_idempotent() {
    let tokens = MemoryTokenStore::new();
    let auth = store_with(&tokens);
    auth.login(&live_token()).expect("login");
    auth.logout();
    let once = auth.current_session();
    auth.logout();
    assert_eq!(auth.current_session(), once);
    assert_eq!(once, Session::Unauthenticated);
    assert_eq!(tokens.read(), None);
}

#[test]
fn logout_then_reload_stays_unauthenticated() {
    let tokens = MemoryTokenStore::new();
    let auth = store_with(&tokens);
    auth.login(&live_token()).expect("login");
    auth.logout();

    let reloaded = store_with(&tokens);
    assert_eq!(reloaded.initialize_at(NOW_MS), Session::Unauthenticated);
}

// =============================================================
// subscriptions
// =============================================================

#[test]
fn subscribers_see_new_session_synchronously() {
    let auth = store_with(&MemoryTokenStore::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let reader = auth.clone();
    let sink = Rc::clone(&seen);
    auth.subscribe(move |session| {
        // The store must already hold the value being announced.
        assert_eq!(&reader.current_session(), session);
        sink.borrow_mut().push(session.is_authenticated());
    });

    auth.login(&live_token()).expect("login");
    auth.logout();
    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn unchanged_session_does_not_notify() {
    let auth = store_with(&MemoryTokenStore::new());
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    auth.subscribe(move |_| *counter.borrow_mut() += 1);

    auth.logout();
    auth.initialize_at(NOW_MS);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn unsubscribe_stops_notifications() {
    let auth = store_with(&MemoryTokenStore::new());
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let id = auth.subscribe(move |_| *counter.borrow_mut() += 1);
    auth.login(&live_token()).expect("login");
    auth.unsubscribe(id);
    auth.logout();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn subscriber_may_unsubscribe_itself_during_dispatch() {
    let auth = store_with(&MemoryTokenStore::new());
    let calls = Rc::new(RefCell::new(0));
    let id_slot: Rc<RefCell<Option<SubscriptionId>>> = Rc::new(RefCell::new(None));

    let handle = auth.clone();
    let counter = Rc::clone(&calls);
    let slot = Rc::clone(&id_slot);
    let id = auth.subscribe(move |_| {
        *counter.borrow_mut() += 1;
        if let Some(id) = *slot.borrow() {
            handle.unsubscribe(id);
        }
    });
    *id_slot.borrow_mut() = Some(id);

    auth.login(&live_token()).expect("login");
    auth.logout();
    assert_eq!(*calls.borrow(), 1);
}
