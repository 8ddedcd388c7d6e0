//! Core record store for ClassNote.
//! Owns the student/record schema and every business invariant around it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{normalize_record_date, NewRecord, Record, RecordId};
pub use model::student::{normalize_student_name, Student, StudentId};
pub use model::ValidationError;
pub use repo::record_repo::{RecordRepository, SqliteRecordRepository};
pub use repo::student_repo::{
    AddStudentOutcome, RepoError, RepoResult, SqliteStudentRepository, StudentRepository,
};
pub use service::record_store::RecordStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
