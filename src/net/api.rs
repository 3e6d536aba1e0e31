//! REST API helpers for the login checkpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the call returns
//! [`ApiError::Unavailable`] since the endpoint is only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result` instead of panics; non-2xx bodies are parsed
//! for a server-supplied detail message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{CheckpointPayload, CheckpointResponse};
use crate::config::ClientConfig;
use crate::state::checkpoint::CheckpointRequest;

/// Join the configured API base with an endpoint path.
///
/// An empty base yields a path relative to the page origin.
fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Verify a two-factor checkpoint via `POST /auth/login/checkpoint`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the request does not complete,
/// [`ApiError::Status`] for non-2xx responses, and [`ApiError::Decode`] when
/// the success body does not match the expected schema.
pub async fn login_checkpoint(url: &str, payload: &CheckpointPayload) -> Result<CheckpointResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::DataEnvelope;

        let resp = gloo_net::http::Request::post(url)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(resp.status(), &body));
        }
        let body: DataEnvelope<CheckpointResponse> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
        Err(ApiError::Unavailable)
    }
}

/// The verification capability consumed by the checkpoint screen.
#[async_trait::async_trait(?Send)]
pub trait CheckpointVerifier {
    async fn verify(&self, request: &CheckpointRequest) -> Result<CheckpointResponse, ApiError>;
}

/// [`CheckpointVerifier`] backed by the real HTTP endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCheckpointVerifier {
    url: String,
}

impl HttpCheckpointVerifier {
    pub fn new(config: &ClientConfig) -> Self {
        Self { url: endpoint_url(&config.api_base_url, &config.checkpoint_endpoint) }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait(?Send)]
impl CheckpointVerifier for HttpCheckpointVerifier {
    async fn verify(&self, request: &CheckpointRequest) -> Result<CheckpointResponse, ApiError> {
        login_checkpoint(&self.url, &CheckpointPayload::from(request)).await
    }
}
