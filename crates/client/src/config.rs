//! Client configuration (environment first, flags override).

use thiserror::Error;

pub const API_URL_ENV: &str = "VITRINE_API_URL";
pub const AUTH_TOKEN_ENV: &str = "VITRINE_AUTH_TOKEN";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the catalog path is appended to.
    pub api_url: String,
    /// Optional bearer token sent with every request.
    pub token: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL {0:?}: expected an http:// or https:// URL")]
    InvalidApiUrl(String),
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Read `VITRINE_API_URL` / `VITRINE_AUTH_TOKEN` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: get(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: get(AUTH_TOKEN_ENV),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, token: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if token.is_some() {
            self.token = token;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_url.trim();
        let has_host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());

        if has_host {
            Ok(())
        } else {
            Err(ConfigError::InvalidApiUrl(self.api_url.clone()))
        }
    }
}
