//! Fetcher module for page metadata
//!
//! This module retrieves a page over HTTP and extracts:
//! - The page title
//! - The description meta tag

mod client;
mod parser;

pub use client::{build_http_client, fetch_metadata};
pub use parser::parse_metadata;

/// Title and description extracted from a page
///
/// `None` means the page had no such element, not that the fetch failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Result of a metadata fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was retrieved and parsed
    Fetched(PageMetadata),

    /// The page could not be retrieved or parsed, for any reason
    Unavailable {
        /// Error description, for logs
        error: String,
    },
}

impl FetchOutcome {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
