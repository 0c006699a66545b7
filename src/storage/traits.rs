//! Storage traits and error types
//!
//! This module defines the trait interface for link store backends and
//! associated error types.

use crate::storage::{Link, NewLink, PoppedLink};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database not found at {}. Run 'link-stacklog init' first.", .path.display())]
    Unavailable { path: PathBuf },

    #[error("Could not determine a data directory; set LINK_STACKLOG_USER_PATH")]
    NoDataDir,

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for link store implementations
///
/// Every operation is scoped to a single log name. Within a log, ids define
/// append order and the record with the highest id is the top of the stack.
/// Empty logs are not errors: reads return `None` or an empty `Vec`.
pub trait LinkStore {
    /// Appends a link to the top of the log's stack
    ///
    /// Duplicate URLs are allowed.
    ///
    /// # Returns
    ///
    /// The id assigned to the new record
    fn push(&mut self, log_name: &str, link: &NewLink) -> StorageResult<i64>;

    /// Removes and returns the top of the log's stack
    fn pop(&mut self, log_name: &str) -> StorageResult<Option<PoppedLink>>;

    /// Returns the `n` most recent links, newest first, without removing them
    fn peek(&self, log_name: &str, n: usize) -> StorageResult<Vec<Link>>;

    /// Returns the `n` most recent links, newest first
    fn head(&self, log_name: &str, n: usize) -> StorageResult<Vec<Link>> {
        self.peek(log_name, n)
    }

    /// Returns the `n` oldest links, oldest first
    fn tail(&self, log_name: &str, n: usize) -> StorageResult<Vec<Link>>;

    /// Removes every link in the log
    ///
    /// # Returns
    ///
    /// The number of links removed (zero when the log was already empty)
    fn clear(&mut self, log_name: &str) -> StorageResult<usize>;

    /// Finds links whose title or description matches `query`
    ///
    /// The query is wrapped as `%query%` and matched with SQL `LIKE`, so `%`
    /// and `_` inside it act as wildcards. Matching is case-sensitive.
    /// Results are newest first.
    fn search(&self, log_name: &str, query: &str) -> StorageResult<Vec<Link>>;

    /// Counts the links in the log
    fn count(&self, log_name: &str) -> StorageResult<u64>;

    /// Looks up a link by id
    ///
    /// Returns `None` when the id does not exist or belongs to another log.
    fn get_by_id(&self, log_name: &str, id: i64) -> StorageResult<Option<Link>>;

    /// Picks one link from the log uniformly at random
    fn random(&self, log_name: &str) -> StorageResult<Option<Link>>;
}
