//! HTTP client for the Blockscout v2 REST API.
//!
//! [`ExplorerClient`] owns one `reqwest::Client` (and therefore one
//! connection pool). Cloning the client shares the pool.

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ExplorerError;
use crate::core::config::ExplorerConfig;

/// Client for the upstream explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl ExplorerClient {
    /// Build a client from configuration.
    ///
    /// The timeout applies to every request issued through the pool.
    pub fn new(config: &ExplorerConfig) -> Result<Self, ExplorerError> {
        let base_url = parse_base_url(&config.base_url)?;
        let timeout = Duration::from_secs(config.timeout_secs);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(ExplorerError::Transport)?;

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for the given path segments below the API base.
    pub fn endpoint_url(&self, segments: &[String]) -> Result<Url, ExplorerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ExplorerError::invalid_url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// `query` holds only the parameters that were actually supplied; an
    /// empty slice produces a URL without a query string.
    pub async fn request(
        &self,
        segments: &[String],
        query: &[(&str, String)],
    ) -> Result<Value, ExplorerError> {
        let url = self.endpoint_url(segments)?;
        debug!(url = %url, ?query, "GET explorer endpoint");

        let mut request = self.http.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "explorer request failed");
            ExplorerError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = %status, "explorer returned error status");
            return Err(ExplorerError::HttpStatus { status, body });
        }

        response.json::<Value>().await.map_err(ExplorerError::Decode)
    }
}

/// Parse and check that the base URL can carry path segments.
pub fn parse_base_url(raw: &str) -> Result<Url, ExplorerError> {
    let url = Url::parse(raw).map_err(|e| ExplorerError::invalid_url(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ExplorerError::invalid_url(format!(
            "{}: cannot be used as a base URL",
            raw
        )));
    }
    Ok(url)
}
