//! Storage module for the link stacks
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Stack-ordered push/pop and ranged reads per log
//! - Search, count, id lookup and random sampling
//! - Data directory resolution and backups

pub mod location;
mod schema;
mod sqlite;
mod traits;

pub use location::{backup_database, database_path, user_dir, DATABASE_FILE, USER_PATH_ENV};
pub use sqlite::SqliteStore;
pub use traits::{LinkStore, StorageError, StorageResult};

use std::path::Path;

/// Number of links shown by `peek` when no count is given
pub const DEFAULT_PEEK_COUNT: usize = 1;

/// Number of links shown by `head` and `tail` when no count is given
pub const DEFAULT_LIST_COUNT: usize = 5;

/// Display fallback for a link without a title
pub const NO_TITLE: &str = "No Title";

/// Display fallback for a link without a description
pub const NO_DESCRIPTION: &str = "No Description";

/// Opens an existing, initialized link store
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStore)` - Successfully opened store
/// * `Err(StorageError::Unavailable)` - The database has not been initialized
pub fn open_store(path: &Path) -> StorageResult<SqliteStore> {
    SqliteStore::open(path)
}

/// A link as returned by read operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub timestamp: String,
}

impl Link {
    /// The title, or `"No Title"` when the page had none
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// The description, or `"No Description"` when the page had none
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}

/// A link removed from the top of a stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoppedLink {
    pub id: i64,
    pub link: Link,
}

/// Input for a push
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl NewLink {
    pub fn new(
        url: impl Into<String>,
        title: Option<impl Into<String>>,
        description: Option<impl Into<String>>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.map(Into::into),
            description: description.map(Into::into),
        }
    }
}
