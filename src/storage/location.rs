//! Data directory resolution and database backups

use crate::storage::traits::{StorageError, StorageResult};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const USER_PATH_ENV: &str = "LINK_STACKLOG_USER_PATH";

/// File name of the database inside the data directory
pub const DATABASE_FILE: &str = "linkstacklog.db";

const APP_DIR_NAME: &str = "link_stacklog";

/// Resolves the data directory, creating it if needed
///
/// Uses `LINK_STACKLOG_USER_PATH` when set and non-empty, otherwise the
/// platform data directory (e.g. `~/.local/share/link_stacklog` on Linux).
pub fn user_dir() -> StorageResult<PathBuf> {
    let path = match std::env::var_os(USER_PATH_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(StorageError::NoDataDir)?,
    };

    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// Path of the database file inside `dir`
pub fn database_path(dir: &Path) -> PathBuf {
    dir.join(DATABASE_FILE)
}

/// Copies the database to a timestamped sibling file
///
/// The copy is named `linkstacklog.db_backup_<timestamp>.db`, where the
/// timestamp is ISO-8601 basic format in local time. No old backups are
/// removed.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the new backup
/// * `Err(StorageError::Unavailable)` - There is no database to back up
pub fn backup_database(dir: &Path) -> StorageResult<PathBuf> {
    let source = database_path(dir);
    if !source.is_file() {
        return Err(StorageError::Unavailable { path: source });
    }

    let stamp = Local::now().format("%Y%m%dT%H%M%S%.6f");
    let backup = dir.join(format!("{}_backup_{}.db", DATABASE_FILE, stamp));
    std::fs::copy(&source, &backup)?;
    tracing::info!("Backed up {} to {}", source.display(), backup.display());

    Ok(backup)
}
