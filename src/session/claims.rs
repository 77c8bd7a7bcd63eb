//! JWT claim extraction without signature verification.
//!
//! DESIGN
//! ======
//! The client only reads the payload segment to learn the expiry and a few
//! identity fields for display. Signature checks belong to the server.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::{Engine as _, engine::general_purpose};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Decoded token payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry in whole seconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub exp: i64,
    /// Every other payload field, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Claims {
    /// Subject (`sub`) claim, if it is a string.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.str_field("sub")
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Best label for the signed-in user: name, then email, then subject.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name().or_else(|| self.email()).or_else(|| self.subject())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token must have 3 dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the payload segment of `token` into [`Claims`].
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not three dot-separated
/// segments, the payload is not base64url, or it is not a JSON object with a
/// numeric `exp`.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::Segments(segments.len()));
    }
    let payload = general_purpose::URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    Ok(serde_json::from_slice(&payload)?)
}

/// True once the expiry instant has been reached (`exp * 1000 <= now_ms`).
#[must_use]
pub fn is_expired(claims: &Claims, now_ms: i64) -> bool {
    claims.exp.saturating_mul(1000) <= now_ms
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible exp"))
        }
        _ => Err(D::Error::custom("expected numeric exp")),
    }
}
