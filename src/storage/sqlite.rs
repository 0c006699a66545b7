//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the LinkStore trait.

use crate::storage::schema::{initialize_schema, is_initialized};
use crate::storage::traits::{LinkStore, StorageError, StorageResult};
use crate::storage::{Link, NewLink, PoppedLink};
use chrono::Utc;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row, TransactionBehavior};
use std::path::Path;
use std::time::Duration;

const LINK_COLUMNS: &str = "url, title, description, timestamp";

/// SQLite link store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens an existing, initialized database
    ///
    /// Never creates the file. A missing file, or one without the `links`
    /// table, is reported as `StorageError::Unavailable`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    pub fn open(path: &Path) -> StorageResult<Self> {
        if !path.is_file() {
            return Err(StorageError::Unavailable {
                path: path.to_path_buf(),
            });
        }

        let unavailable = |e: rusqlite::Error| {
            tracing::debug!("Failed to open {}: {}", path.display(), e);
            StorageError::Unavailable {
                path: path.to_path_buf(),
            }
        };

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;

        // A file that is not a SQLite database fails here, not at open
        if !is_initialized(&conn).map_err(unavailable)? {
            return Err(StorageError::Unavailable {
                path: path.to_path_buf(),
            });
        }

        configure(&conn).map_err(unavailable)?;
        tracing::debug!("Opened link store at {}", path.display());

        Ok(Self { conn })
    }

    /// Creates the database file and schema if needed, then opens it
    ///
    /// Safe to call on an already initialized database.
    pub fn init(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        configure(&conn)?;
        initialize_schema(&conn)?;
        tracing::info!("Initialized link store at {}", path.display());

        Ok(Self { conn })
    }

    /// Creates an initialized in-memory store
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Closes the underlying connection, reporting any error
    pub fn close(self) -> StorageResult<()> {
        self.conn.close().map_err(|(_, e)| StorageError::Sqlite(e))
    }
}

fn configure(conn: &Connection) -> Result<(), rusqlite::Error> {
    // Another process may hold the write lock during a pop
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(())
}

fn row_to_link(row: &Row<'_>) -> rusqlite::Result<Link> {
    Ok(Link {
        url: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        timestamp: row.get(3)?,
    })
}

fn limit_param(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Translates a substring query with `LIKE` wildcards into a `GLOB` pattern
///
/// `%` becomes `*` and `_` becomes `?`; characters special to `GLOB` are
/// bracketed so they match literally. `GLOB` is always case-sensitive,
/// unlike SQLite's `LIKE`.
fn like_query_to_glob(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('*');
    for c in query.chars() {
        match c {
            '%' => pattern.push('*'),
            '_' => pattern.push('?'),
            '*' => pattern.push_str("[*]"),
            '?' => pattern.push_str("[?]"),
            '[' => pattern.push_str("[[]"),
            other => pattern.push(other),
        }
    }
    pattern.push('*');
    pattern
}

impl SqliteStore {
    fn query_links(&self, sql: &str, params: impl rusqlite::Params) -> StorageResult<Vec<Link>> {
        let mut stmt = self.conn.prepare(sql)?;
        let links = stmt
            .query_map(params, row_to_link)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(links)
    }
}

impl LinkStore for SqliteStore {
    fn push(&mut self, log_name: &str, link: &NewLink) -> StorageResult<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO links (log_name, url, title, description, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![log_name, link.url, link.title, link.description, now],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!("Pushed {} onto '{}' as id {}", link.url, log_name, id);
        Ok(id)
    }

    fn pop(&mut self, log_name: &str) -> StorageResult<Option<PoppedLink>> {
        // Read and delete under one write lock so concurrent pops cannot
        // return the same record
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let top = tx
            .query_row(
                &format!(
                    "SELECT id, {} FROM links WHERE log_name = ?1 ORDER BY id DESC LIMIT 1",
                    LINK_COLUMNS
                ),
                params![log_name],
                |row| {
                    Ok(PoppedLink {
                        id: row.get(0)?,
                        link: Link {
                            url: row.get(1)?,
                            title: row.get(2)?,
                            description: row.get(3)?,
                            timestamp: row.get(4)?,
                        },
                    })
                },
            )
            .optional()?;

        if let Some(popped) = &top {
            tx.execute("DELETE FROM links WHERE id = ?1", params![popped.id])?;
        }
        tx.commit()?;

        match &top {
            Some(popped) => tracing::debug!("Popped id {} from '{}'", popped.id, log_name),
            None => tracing::debug!("Pop on empty log '{}'", log_name),
        }

        Ok(top)
    }

    fn peek(&self, log_name: &str, n: usize) -> StorageResult<Vec<Link>> {
        self.query_links(
            &format!(
                "SELECT {} FROM links WHERE log_name = ?1 ORDER BY id DESC LIMIT ?2",
                LINK_COLUMNS
            ),
            params![log_name, limit_param(n)],
        )
    }

    fn tail(&self, log_name: &str, n: usize) -> StorageResult<Vec<Link>> {
        self.query_links(
            &format!(
                "SELECT {} FROM links WHERE log_name = ?1 ORDER BY id ASC LIMIT ?2",
                LINK_COLUMNS
            ),
            params![log_name, limit_param(n)],
        )
    }

    fn clear(&mut self, log_name: &str) -> StorageResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM links WHERE log_name = ?1", params![log_name])?;
        tracing::debug!("Cleared {} links from '{}'", removed, log_name);
        Ok(removed)
    }

    fn search(&self, log_name: &str, query: &str) -> StorageResult<Vec<Link>> {
        let pattern = like_query_to_glob(query);
        self.query_links(
            &format!(
                "SELECT {} FROM links
                 WHERE log_name = ?1 AND (title GLOB ?2 OR description GLOB ?2)
                 ORDER BY id DESC",
                LINK_COLUMNS
            ),
            params![log_name, pattern],
        )
    }

    fn count(&self, log_name: &str) -> StorageResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM links WHERE log_name = ?1",
            params![log_name],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn get_by_id(&self, log_name: &str, id: i64) -> StorageResult<Option<Link>> {
        let link = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM links WHERE id = ?1 AND log_name = ?2",
                    LINK_COLUMNS
                ),
                params![id, log_name],
                row_to_link,
            )
            .optional()?;
        Ok(link)
    }

    fn random(&self, log_name: &str) -> StorageResult<Option<Link>> {
        // Single statement: uniform over surviving rows, gaps in ids don't matter
        let link = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM links WHERE log_name = ?1 ORDER BY RANDOM() LIMIT 1",
                    LINK_COLUMNS
                ),
                params![log_name],
                row_to_link,
            )
            .optional()?;
        Ok(link)
    }
}
