//! Record repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/delete APIs over the `records` table.
//! - Surface a missing owner as `RepoError::StudentNotFound`.
//!
//! # Invariants
//! - Listing is ordered by `date DESC`, ties by insertion order (`id ASC`).
//! - A listing for an unknown student is empty, not an error.

use crate::db::{constraint_violation, ConstraintViolation};
use crate::model::record::{NewRecord, Record, RecordId};
use crate::model::student::StudentId;
use crate::repo::student_repo::{RepoError, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for record operations.
pub trait RecordRepository {
    fn add_record(&self, record: &NewRecord) -> RepoResult<RecordId>;
    fn list_records(&self, student_id: StudentId) -> RepoResult<Vec<Record>>;
    fn delete_record(&self, id: RecordId) -> RepoResult<()>;
}

/// SQLite-backed record repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn add_record(&self, record: &NewRecord) -> RepoResult<RecordId> {
        let record = record.normalized()?;

        let inserted = self.conn.execute(
            "INSERT INTO records (student_id, date, content) VALUES (?1, ?2, ?3);",
            params![record.student_id, record.date.as_str(), record.content.as_str()],
        );
        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if constraint_violation(&err) == Some(ConstraintViolation::ForeignKey) => {
                Err(RepoError::StudentNotFound(record.student_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn list_records(&self, student_id: StudentId) -> RepoResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, content
             FROM records
             WHERE student_id = ?1
             ORDER BY date DESC, id ASC;",
        )?;
        let mut rows = stmt.query([student_id])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(Record {
                id: row.get("id")?,
                date: row.get("date")?,
                content: row.get("content")?,
            });
        }
        Ok(records)
    }

    fn delete_record(&self, id: RecordId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM records WHERE id = ?1;", [id])?;
        Ok(())
    }
}
