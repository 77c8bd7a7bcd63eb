use super::*;

fn status(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, body: body.to_owned() }
}

#[test]
fn message_reads_server_message_field() {
    let err = status(400, r#"{"message":"Email already registered"}"#);
    assert_eq!(err.message().as_deref(), Some("Email already registered"));
    assert_eq!(err.user_message("Sign-up failed"), "Email already registered");
}

#[test]
fn user_message_falls_back_without_message() {
    assert_eq!(status(500, "").user_message("Login failed"), "Login failed");
    assert_eq!(status(500, "<html>oops</html>").user_message("Login failed"), "Login failed");
    assert_eq!(status(401, r#"{"error":"nope"}"#).user_message("Login failed"), "Login failed");
    assert_eq!(status(401, r#"{"message":"  "}"#).user_message("Login failed"), "Login failed");
}

#[test]
fn network_and_schema_errors_use_fallback() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("x"), "x");
    assert_eq!(ApiError::Schema("expected array".to_owned()).user_message("y"), "y");
}

#[test]
fn status_only_for_server_responses() {
    assert_eq!(status(404, "").status(), Some(404));
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}

#[test]
fn display_includes_status_code() {
    assert_eq!(status(403, "").to_string(), "request failed with status 403");
}
