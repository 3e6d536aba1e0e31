//! Typed failures for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP helper returns `ApiError` so pages can log the structured error
//! and hand a single human-readable line to the flash store.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Error returned by the REST helpers in [`crate::net::api`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status code {status}")]
    Status {
        status: u16,
        /// First `errors[].detail` entry from the response body, if any.
        detail: Option<String>,
    },
    /// A 2xx body that did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Called where no browser is available (SSR, native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: error_detail(body) }
    }

    /// Message suitable for showing to the user.
    ///
    /// Prefers the server-provided detail and falls back to the display text.
    pub fn human_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    detail: Option<String>,
}

/// Extract `errors[0].detail` from a JSON error body.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .and_then(|e| e.detail)
        .filter(|d| !d.trim().is_empty())
}
