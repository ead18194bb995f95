//! URL existence checks
//!
//! A URL "exists" when the server answers with anything other than 404.
//! Redirects are followed; server errors still count as existing.

use crate::error::ProbeError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default timeout for probe requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("get-changelogs/", env!("CARGO_PKG_VERSION"));

/// Trait for checking whether a URL resolves
#[async_trait]
pub trait UrlProbe: Send + Sync {
    /// Returns true unless the URL answers 404
    async fn exists(&self, url: &str) -> Result<bool, ProbeError>;
}

/// Probe backed by a reqwest client
#[derive(Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Create a probe with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| ProbeError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UrlProbe for HttpProbe {
    async fn exists(&self, url: &str) -> Result<bool, ProbeError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::timeout(url)
            } else {
                ProbeError::request(url, e.to_string())
            }
        })?;

        let status = response.status();
        debug!(url, %status, "probed");
        Ok(status != StatusCode::NOT_FOUND)
    }
}
