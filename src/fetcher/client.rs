//! HTTP fetcher implementation
//!
//! This module handles the single outbound request link-stacklog makes:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for the page being pushed
//! - Collapsing every failure into `FetchOutcome::Unavailable`

use crate::config::FetcherConfig;
use crate::fetcher::parser::parse_metadata;
use crate::fetcher::{FetchOutcome, PageMetadata};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use link_stacklog::config::FetcherConfig;
/// use link_stacklog::fetcher::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and extracts its metadata
///
/// Never fails: an unparseable URL, a non-HTTP scheme, a network error or
/// timeout, a non-2xx status, or an unreadable body all yield
/// `FetchOutcome::Unavailable`. The error text is for logging only.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_metadata(client: &Client, url: &str) -> FetchOutcome {
    match try_fetch(client, url).await {
        Ok(metadata) => {
            tracing::debug!("Fetched metadata for {}: {:?}", url, metadata);
            FetchOutcome::Fetched(metadata)
        }
        Err(error) => {
            tracing::warn!("Failed to fetch metadata for {}: {}", url, error);
            FetchOutcome::Unavailable { error }
        }
    }
}

async fn try_fetch(client: &Client, url: &str) -> Result<PageMetadata, String> {
    let parsed = Url::parse(url).map_err(|e| format!("Invalid URL: {}", e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("Unsupported URL scheme: {}", parsed.scheme()));
    }

    let response = client.get(parsed).send().await.map_err(|e| {
        if e.is_timeout() {
            "Request timeout".to_string()
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            e.to_string()
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP status {}", status));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {}", e))?;

    Ok(parse_metadata(&body))
}
