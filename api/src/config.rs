//! Where the API lives.

use crate::endpoint::Endpoint;

/// Environment variable consulted by native shells for the API base URL.
pub const BASE_URL_ENV: &str = "PRESENCE_API_URL";

/// Base URL used by native shells when nothing else is configured.
pub const DEFAULT_NATIVE_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Scheme and authority without a trailing slash. Empty means "same
    /// origin", which is what the browser build uses.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn same_origin() -> Self {
        Self::default()
    }

    /// Native configuration: `PRESENCE_API_URL` if set and non-empty,
    /// otherwise [`DEFAULT_NATIVE_BASE_URL`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::new(DEFAULT_NATIVE_BASE_URL),
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Resolve an asset URI handed out by the API (avatars are served as
    /// absolute paths on the backend host).
    pub fn resolve_asset(&self, uri: &str) -> String {
        if self.base_url.is_empty() || uri.contains("://") || !uri.starts_with('/') {
            uri.to_string()
        } else {
            format!("{}{uri}", self.base_url)
        }
    }
}
