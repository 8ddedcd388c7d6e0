//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the record store.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No student or record data is read or written before migrations succeed.

use rusqlite::{ffi, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Which schema constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintViolation {
    Unique,
    ForeignKey,
    Other,
}

/// Classifies a SQLite constraint failure; `None` for any other error.
pub(crate) fn constraint_violation(err: &rusqlite::Error) -> Option<ConstraintViolation> {
    let rusqlite::Error::SqliteFailure(code, _) = err else {
        return None;
    };
    if code.code != ErrorCode::ConstraintViolation {
        return None;
    }
    Some(match code.extended_code {
        ffi::SQLITE_CONSTRAINT_UNIQUE => ConstraintViolation::Unique,
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintViolation::ForeignKey,
        _ => ConstraintViolation::Other,
    })
}

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
