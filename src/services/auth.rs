//! Account endpoints. Both are called without a session token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{SignInRequest, SignInResponse, SignUpRequest};
use crate::net::{ApiClient, ApiError};

pub const SIGN_UP_PATH: &str = "/auth/signup";
pub const SIGN_IN_PATH: &str = "/auth/signin";

#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Register an account. The server mails login details; no token is issued.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        self.api.post_discard(SIGN_UP_PATH, request).await
    }

    /// Exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ApiError> {
        self.api.post(SIGN_IN_PATH, request).await
    }
}
