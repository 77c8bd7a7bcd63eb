//! The single outbound request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call goes through [`ApiClient`]: it prefixes the configured base
//! address, attaches the current bearer token when one exists, serializes
//! JSON bodies and maps responses onto [`ApiError`]. There is no retry,
//! backoff or caching at this layer.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::session::AuthStore;

/// Shared HTTP client. Clones share the transport and auth state.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    auth: AuthStore,
    transport: Rc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, auth: AuthStore, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: Rc::from(crate::config::normalize_base_url(base_url)),
            auth,
            transport,
        }
    }

    /// Absolute URL for an API path such as `/cars/42`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Shape a request, attaching the bearer token if the session has one.
    #[must_use]
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(token) = self.auth.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: self.url(path), headers, body }
    }

    /// `GET path`, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(Method::Get, path, None).await?;
        decode_body(&resp)
    }

    /// `POST path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.execute(Method::Post, path, Some(encode_body(body)?)).await?;
        decode_body(&resp)
    }

    /// `POST path` with a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(Method::Post, path, Some(encode_body(body)?)).await?;
        Ok(())
    }

    /// `PUT path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.execute(Method::Put, path, Some(encode_body(body)?)).await?;
        decode_body(&resp)
    }

    /// `DELETE path`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None).await?;
        Ok(())
    }

    async fn execute(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body);
        log::debug!("{} {}", method.as_str(), request.url);
        let resp = self.transport.send(request).await.inspect_err(|err| {
            log::warn!("{} {path} failed: {err}", method.as_str());
        })?;
        if !resp.is_success() {
            log::warn!("{} {path} -> {}", method.as_str(), resp.status);
            return Err(ApiError::Status { status: resp.status, body: resp.body });
        }
        Ok(resp)
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Schema(format!("request body: {e}")))
}

fn decode_body<T: DeserializeOwned>(resp: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Schema(e.to_string()))
}
