//! link-stacklog: a link backlog with a stack-style interface
//!
//! This crate keeps a persisted stack of URLs, partitioned into named logs,
//! and fetches each page's title and description before it is pushed.

pub mod config;
pub mod fetcher;
pub mod output;
pub mod stack;
pub mod storage;

use thiserror::Error;

/// Main error type for link-stacklog operations
#[derive(Debug, Error)]
pub enum StackError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for link-stacklog operations
pub type Result<T> = std::result::Result<T, StackError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetcher::{FetchOutcome, PageMetadata};
pub use stack::{push_url, PushOutcome, DEFAULT_LOG_NAME};
pub use storage::{Link, LinkStore, NewLink, PoppedLink, SqliteStore};
