//! Database schema definitions
//!
//! This module contains the SQL schema for the link-stacklog database.

use rusqlite::{Connection, OptionalExtension};

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per pushed link; id order is stack order within a log
CREATE TABLE IF NOT EXISTS links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    log_name TEXT NOT NULL,
    url TEXT NOT NULL,
    title TEXT,
    description TEXT,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_links_log_id ON links(log_name, id);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.pragma_update(None, "user_version", get_schema_version())?;
    Ok(())
}

/// Checks whether the `links` table exists on this connection
pub fn is_initialized(conn: &Connection) -> Result<bool, rusqlite::Error> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'links'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Gets the current schema version
///
/// Stored in `PRAGMA user_version` so later migrations can detect old files.
pub fn get_schema_version() -> u32 {
    1
}
