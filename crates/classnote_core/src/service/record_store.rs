//! Record store facade.
//!
//! # Responsibility
//! - Sole owner of persistent student/record state.
//! - Open, use and drop one connection per operation.
//! - Emit metadata-only `store_*` log events.
//!
//! # Invariants
//! - No connection outlives the call that opened it, on success or error.
//! - Every operation first runs connection bootstrap, so migrations are
//!   applied before any read or write.
//! - Callers must re-fetch lists after a mutation; the store keeps no cache.

use crate::config::StoreConfig;
use crate::db::open_db;
use crate::model::record::{NewRecord, Record, RecordId};
use crate::model::student::{Student, StudentId};
use crate::repo::record_repo::{RecordRepository, SqliteRecordRepository};
use crate::repo::student_repo::{
    AddStudentOutcome, RepoResult, SqliteStudentRepository, StudentRepository,
};
use log::{debug, error, info, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File-backed student record store.
#[derive(Debug, Clone)]
pub struct RecordStore {
    db_path: PathBuf,
}

impl RecordStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.db_path.clone())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Ensures the database file and both tables exist.
    ///
    /// Safe on every start; existing students and records are kept.
    pub fn initialize(&self) -> RepoResult<()> {
        self.with_connection("store_initialize", |_| Ok(()))
    }

    /// Adds a student. A name already in use yields `Duplicate`.
    pub fn add_student(&self, name: &str) -> RepoResult<AddStudentOutcome> {
        let outcome = self.with_connection("store_add_student", |conn| {
            SqliteStudentRepository::new(conn).add_student(name)
        })?;
        match outcome {
            AddStudentOutcome::Added(id) => {
                info!("event=student_added module=store status=ok student_id={id}")
            }
            AddStudentOutcome::Duplicate => {
                warn!("event=student_added module=store status=duplicate")
            }
        }
        Ok(outcome)
    }

    /// Lists every student ordered by name ascending.
    pub fn list_students(&self) -> RepoResult<Vec<Student>> {
        self.with_connection("store_list_students", |conn| {
            SqliteStudentRepository::new(conn).list_students()
        })
    }

    /// Deletes a student together with all of its records.
    pub fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.with_connection("store_delete_student", |conn| {
            SqliteStudentRepository::new(conn).delete_student(id)
        })?;
        info!("event=student_deleted module=store status=ok student_id={id}");
        Ok(())
    }

    /// Adds one record for an existing student and returns its id.
    pub fn add_record(
        &self,
        student_id: StudentId,
        date: &str,
        content: &str,
    ) -> RepoResult<RecordId> {
        let record = NewRecord::new(student_id, date, content);
        let id = self.with_connection("store_add_record", |conn| {
            SqliteRecordRepository::new(conn).add_record(&record)
        })?;
        info!(
            "event=record_added module=store status=ok student_id={student_id} record_id={id} content_chars={}",
            content.chars().count()
        );
        Ok(id)
    }

    /// Lists a student's records, most recent date first.
    pub fn list_records(&self, student_id: StudentId) -> RepoResult<Vec<Record>> {
        self.with_connection("store_list_records", |conn| {
            SqliteRecordRepository::new(conn).list_records(student_id)
        })
    }

    /// Deletes one record; absent ids are ignored.
    pub fn delete_record(&self, id: RecordId) -> RepoResult<()> {
        self.with_connection("store_delete_record", |conn| {
            SqliteRecordRepository::new(conn).delete_record(id)
        })?;
        info!("event=record_deleted module=store status=ok record_id={id}");
        Ok(())
    }

    fn with_connection<T>(
        &self,
        event: &'static str,
        op: impl FnOnce(&Connection) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let started_at = Instant::now();
        let result = open_db(&self.db_path)
            .map_err(Into::into)
            .and_then(|conn| op(&conn));

        match &result {
            Ok(_) => debug!(
                "event={event} module=store status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={event} module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}
