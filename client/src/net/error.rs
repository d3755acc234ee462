//! Failure taxonomy for calls to the blog API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a request produced no usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection reset, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response body could not be decoded: {0}")]
    Decode(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    /// No HTTP stack outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for showing to the user.
    ///
    /// Prefers the `message` field of a JSON error body.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, body } => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
                .unwrap_or_else(|| format!("Request failed ({status})")),
            other => other.to_string(),
        }
    }
}
