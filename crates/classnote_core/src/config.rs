//! Store configuration.
//!
//! The storage location is the only durable setting: a single SQLite file,
//! `students.db` in the working directory unless a caller overrides it.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Default database file name, relative to the working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "students.db";
/// Default log directory name, resolved against the working directory.
pub const DEFAULT_LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// Must be absolute before it is handed to `init_logging`.
    pub log_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: absolute_from_cwd(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl StoreConfig {
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = absolute_from_cwd(log_dir.into());
        self
    }

    pub fn with_log_level(mut self, log_level: &'static str) -> Self {
        self.log_level = log_level;
        self
    }
}

fn absolute_from_cwd(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}
