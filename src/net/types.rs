//! Wire DTOs for the login checkpoint endpoint.
//!
//! DESIGN
//! ======
//! The server wraps payloads in a `data` envelope and spells fields in
//! snake case. These types mirror that shape so serde does the mapping and
//! the rest of the client only sees [`CheckpointResponse`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::checkpoint::CheckpointRequest;

/// JSON body for `POST /auth/login/checkpoint`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckpointPayload {
    pub confirmation_token: String,
    pub authentication_code: String,
    /// Omitted entirely when the user entered no recovery code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_token: Option<String>,
}

impl From<&CheckpointRequest> for CheckpointPayload {
    fn from(request: &CheckpointRequest) -> Self {
        Self {
            confirmation_token: request.token.clone(),
            authentication_code: request.code.clone(),
            recovery_token: Some(request.recovery_code.clone()).filter(|r| !r.is_empty()),
        }
    }
}

/// Result of a checkpoint verification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CheckpointResponse {
    /// Whether login is finished.
    pub complete: bool,
    /// Where to send the browser once login is finished.
    #[serde(default)]
    pub intended: Option<String>,
}

impl CheckpointResponse {
    /// Redirect target for a completed login, defaulting to `fallback`.
    pub fn redirect_target<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.intended
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(fallback)
    }
}

/// `{ "data": ... }` envelope used by the auth endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
