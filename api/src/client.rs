//! HTTP implementation of [`PresenceSource`].
//!
//! The browser build goes through `gloo-net` (fetch API); native shells use
//! `reqwest`. Both funnel status handling through [`ApiError::from_status`].

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::source::PresenceSource;

#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
    #[cfg(not(target_arch = "wasm32"))]
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            inner: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(target_arch = "wasm32")]
    async fn get(&self, url: &str) -> ApiResult<Value> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if let Some(err) = ApiError::from_status(response.status()) {
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get(&self, url: &str) -> ApiResult<Value> {
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if let Some(err) = ApiError::from_status(response.status().as_u16()) {
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl PresenceSource for HttpClient {
    async fn fetch_json(&self, endpoint: Endpoint) -> ApiResult<Value> {
        let url = self.config.url(&endpoint);
        tracing::debug!(%url, "GET");
        let result = self.get(&url).await;
        match &result {
            Ok(_) => tracing::debug!(%url, "response ok"),
            Err(ApiError::NotFound) => tracing::debug!(%url, "no data"),
            Err(err) => tracing::warn!(%url, %err, "request failed"),
        }
        result
    }
}
