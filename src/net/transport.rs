//! Wire abstraction under [`ApiClient`](super::client::ApiClient).
//!
//! Client-side (csr): real HTTP via `gloo-net`.
//! Native builds and tests plug in their own implementation.

use async_trait::async_trait;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully shaped outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Implementations report only failures to obtain a response, as
/// [`ApiError::Network`]; status interpretation happens in the client.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::RequestBuilder;

        let method = match request.method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Delete => gloo_net::http::Method::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = built.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Placeholder wire for builds without a browser; every request fails.
#[cfg(not(feature = "csr"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[cfg(not(feature = "csr"))]
#[async_trait(?Send)]
impl Transport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network(format!("no HTTP transport for {}", request.url)))
    }
}

/// Transport appropriate for the current build target.
#[must_use]
pub fn default_transport() -> std::rc::Rc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        std::rc::Rc::new(FetchTransport)
    }
    #[cfg(not(feature = "csr"))]
    {
        std::rc::Rc::new(OfflineTransport)
    }
}
