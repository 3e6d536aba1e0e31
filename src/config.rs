//! Client route and endpoint configuration.
//!
//! The browser bundle has no runtime environment, so the only override is
//! read at build time:
//! - `CHECKPOINT_API_BASE_URL`: prefix for API calls (default: same origin)

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_CHECKPOINT_ENDPOINT: &str = "/auth/login/checkpoint";
pub const DEFAULT_REDIRECT: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported api base url '{0}' (expected '/path' or 'http(s)://host')")]
    InvalidBaseUrl(String),
}

/// Paths the checkpoint screen navigates between and calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Start of the login flow; target when no session token is present.
    pub login_path: String,
    pub checkpoint_endpoint: String,
    /// Where to go after login when the server names no intended URL.
    pub default_redirect: String,
    /// Normalized API prefix without a trailing `/`. Empty means same origin.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            checkpoint_endpoint: DEFAULT_CHECKPOINT_ENDPOINT.to_owned(),
            default_redirect: DEFAULT_REDIRECT.to_owned(),
            api_base_url: String::new(),
        }
    }
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    ///
    /// An invalid override is logged and ignored.
    pub fn from_build_env() -> Self {
        match Self::with_api_base(option_env!("CHECKPOINT_API_BASE_URL")) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{e}; using same-origin api base");
                Self::default()
            }
        }
    }

    /// Defaults with an optional API base override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the override is neither a
    /// path nor an http(s) URL.
    pub fn with_api_base(raw: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { api_base_url: parse_api_base(raw)?, ..Self::default() })
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(String::new());
    }
    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(value.to_owned()))
    }
}
