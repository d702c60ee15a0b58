//! reqwest-backed catalog transport.
//!
//! Compiles for native targets and for wasm32 (reqwest's fetch backend), so the
//! terminal client and the browser frontend share it.

use async_trait::async_trait;
use serde_json::Value;

use vitrine_catalog::{Transport, TransportResponse};
use vitrine_core::{TransportError, TransportResult};

use crate::config::ClientConfig;

/// Issues GET requests against `base_url`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new(base_url)
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        match &config.token {
            Some(token) => Self::with_token(config.api_url.clone(), token.clone()),
            None => Self::new(config.api_url.clone()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an absolute path without doubling the slash.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> TransportResult<TransportResponse> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let mut req = self.client.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(
                status.as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| TransportError::decode(e.to_string()))?;

        Ok(TransportResponse::new(data))
    }
}
