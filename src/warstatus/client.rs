//! Async HTTP client for the war status API

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::core::config::WarStatusConfig;
use crate::core::error::{LoadoutError, Result};
use crate::warstatus::resolver::WarStatusSource;
use crate::warstatus::{Campaign, PlanetTable};

/// Read-only client for the community war status API
pub struct WarStatusClient {
    client: Client,
    base_url: String,
}

impl WarStatusClient {
    /// Create a client without a request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &WarStatusConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| LoadoutError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "Fetching war status");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadoutError::ResolverUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadoutError::ResolverUnavailable(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LoadoutError::ResolverUnavailable(format!("{}: {}", url, e)))
    }
}

impl WarStatusSource for WarStatusClient {
    async fn campaigns(&self) -> Result<Vec<Campaign>> {
        self.get_json("war/campaign").await
    }

    async fn planets(&self) -> Result<PlanetTable> {
        self.get_json("planets").await
    }
}
