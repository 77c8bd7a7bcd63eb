//! Session lifecycle through the public API: restore, login, guard, logout.

use std::rc::Rc;

use base64::{Engine as _, engine::general_purpose};

use car_admin::session::{AuthStore, MemoryTokenStore, Session, TokenStore, decode};
use car_admin::util::auth::{AppRoute, RouteDecision, SIGN_IN_PATH, decide};

const NOW_MS: i64 = 1_717_000_000_000;

fn token(exp_secs: i64, email: &str) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp_secs},"email":"{email}"}}"#));
    format!("{header}.{payload}.signature")
}

fn store_over(tokens: &MemoryTokenStore) -> AuthStore {
    AuthStore::new(Rc::new(tokens.clone()))
}

// =============================================================
// Startup
// =============================================================

#[test]
fn expired_token_is_discarded_on_startup() {
    let tokens = MemoryTokenStore::with_token(&token(NOW_MS / 1000 - 60, "old@example.com"));
    let store = store_over(&tokens);

    assert_eq!(store.initialize_at(NOW_MS), Session::Unauthenticated);
    assert_eq!(tokens.read(), None);
    for route in AppRoute::ALL.into_iter().filter(|r| r.is_protected()) {
        assert_eq!(decide(route, &store.current_session()), RouteDecision::Redirect(SIGN_IN_PATH));
    }
}

#[test]
fn live_token_restores_session_and_opens_protected_routes() {
    let raw = token(NOW_MS / 1000 + 3600, "ops@example.com");
    let store = store_over(&MemoryTokenStore::with_token(&raw));

    let session = store.initialize_at(NOW_MS);
    assert_eq!(session.token(), Some(raw.as_str()));
    assert_eq!(session.user().and_then(|c| c.email()), Some("ops@example.com"));
    for route in AppRoute::ALL {
        assert_eq!(decide(route, &session), RouteDecision::Render);
    }
}

// =============================================================
// Full cycle
// =============================================================

#[test]
fn login_logout_then_restart_is_signed_out() {
    let tokens = MemoryTokenStore::new();
    let raw = token(NOW_MS / 1000 + 3600, "ops@example.com");

    let first = store_over(&tokens);
    first.initialize_at(NOW_MS);
    let session = first.login(&raw).expect("login");
    assert_eq!(session.user(), decode(&raw).ok().as_ref());
    first.logout();

    let restarted = store_over(&tokens);
    assert_eq!(restarted.initialize_at(NOW_MS), Session::Unauthenticated);
}

#[test]
fn login_survives_restart() {
    let tokens = MemoryTokenStore::new();
    let raw = token(NOW_MS / 1000 + 3600, "ops@example.com");
    store_over(&tokens).login(&raw).expect("login");

    let restarted = store_over(&tokens);
    assert!(restarted.initialize_at(NOW_MS).is_authenticated());
    assert_eq!(restarted.token(), Some(raw));
}

#[test]
fn subscribers_see_every_transition_in_order() {
    let store = store_over(&MemoryTokenStore::new());
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |session| sink.borrow_mut().push(session.is_authenticated()));

    store.login(&token(NOW_MS / 1000 + 3600, "a@example.com")).expect("login");
    store.logout();
    store.logout();

    assert_eq!(*seen.borrow(), vec![true, false]);
}
