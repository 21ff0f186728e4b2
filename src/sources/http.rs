//! HTTP status provider
//!
//! Fetches the tag snapshot as JSON from a status gateway endpoint. The
//! request carries an explicit timeout so a hung gateway cannot wedge the
//! scan loop.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::core::StatusProvider;
use crate::snapshot::Snapshot;

/// Default status gateway endpoint.
pub const DEFAULT_STATUS_URL: &str = "http://localhost:1880/factory/status";

/// Default per-request timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Status provider over HTTP + JSON.
pub struct HttpProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpProvider {
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatusProvider for HttpProvider {
    async fn fetch(&self) -> Result<Snapshot> {
        let payload: Value = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("requesting {}", self.url))?
            .error_for_status()?
            .json()
            .await
            .context("decoding status payload")?;

        Snapshot::from_value(payload)
    }
}
