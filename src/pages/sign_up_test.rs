use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::ApiClient;
use crate::net::mock::MockTransport;
use crate::session::{AuthStore, MemoryTokenStore};

fn service(transport: &MockTransport) -> AuthService {
    let store = AuthStore::new(Rc::new(MemoryTokenStore::new()));
    AuthService::new(ApiClient::new("http://api", store, Rc::new(transport.clone())))
}

#[test]
fn success_sends_trimmed_fields() {
    let transport = MockTransport::new();
    transport.reply(201, serde_json::json!({ "message": "User created" }));
    let form = SignUpRequest { name: " Ada ".to_owned(), email: "ada@example.com ".to_owned() };

    block_on(submit_sign_up(&service(&transport), &form)).expect("sign up");

    let sent = transport.last_request().expect("request");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap_or("")).expect("json");
    assert_eq!(body, serde_json::json!({ "name": "Ada", "email": "ada@example.com" }));
}

#[test]
fn conflict_surfaces_server_message() {
    let transport = MockTransport::new();
    transport.reply(409, serde_json::json!({ "message": "Email already registered" }));
    let err = block_on(submit_sign_up(&service(&transport), &SignUpRequest::default())).expect_err("409");
    assert_eq!(err, "Email already registered");
}

#[test]
fn failure_without_message_uses_fallback() {
    let transport = MockTransport::new();
    transport.reply_raw(500, "Internal Server Error");
    let err = block_on(submit_sign_up(&service(&transport), &SignUpRequest::default())).expect_err("500");
    assert_eq!(err, SIGN_UP_FAILED);
}
