//! The push flow: fetch metadata, then write the link
//!
//! Everything else the command line does maps straight onto a `LinkStore`
//! call; pushing is the one operation that needs the network first.

use crate::fetcher::{fetch_metadata, FetchOutcome};
use crate::storage::{LinkStore, NewLink};
use crate::Result;
use reqwest::Client;

/// Log used when the caller does not name one
pub const DEFAULT_LOG_NAME: &str = "default";

/// Result of pushing a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The link was stored
    Pushed { id: i64, link: NewLink },

    /// Metadata could not be fetched, so nothing was stored
    Unavailable { url: String },
}

/// Fetches metadata for `url` and pushes it onto `log_name`
///
/// The store is only written when the fetch succeeds; an unavailable page is
/// reported back rather than stored with placeholder data.
///
/// # Arguments
///
/// * `store` - The link store to write to
/// * `client` - HTTP client used for the metadata fetch
/// * `log_name` - The log to push onto
/// * `url` - The URL to push
pub async fn push_url(
    store: &mut dyn LinkStore,
    client: &Client,
    log_name: &str,
    url: &str,
) -> Result<PushOutcome> {
    let metadata = match fetch_metadata(client, url).await {
        FetchOutcome::Fetched(metadata) => metadata,
        FetchOutcome::Unavailable { .. } => {
            return Ok(PushOutcome::Unavailable {
                url: url.to_string(),
            });
        }
    };

    let link = NewLink {
        url: url.to_string(),
        title: metadata.title,
        description: metadata.description,
    };
    let id = store.push(log_name, &link)?;
    tracing::info!("Pushed {} onto '{}'", url, log_name);

    Ok(PushOutcome::Pushed { id, link })
}
