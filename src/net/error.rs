//! Request failure taxonomy shared by the HTTP client and services.
//!
//! ERROR HANDLING
//! ==============
//! Nothing below the page layer swallows an `ApiError`. Pages turn it into a
//! user-facing line with [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status. `body` is the raw payload.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Schema(String),
}

impl ApiError {
    /// HTTP status for server-side failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Schema(_) => None,
        }
    }

    /// Server-supplied `message` field from an error body, if present.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_owned)
    }

    /// The server message verbatim, or `fallback` when there is none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.message().unwrap_or_else(|| fallback.to_owned())
    }
}
