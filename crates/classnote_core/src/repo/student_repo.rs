//! Student repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/delete APIs over the `students` table.
//! - Translate the unique-name constraint into an explicit outcome.
//!
//! # Invariants
//! - Names are normalized by `normalize_student_name` before insert.
//! - Listing is ordered by `name ASC` using binary (case-sensitive) collation.
//! - Deleting a student relies on `ON DELETE CASCADE` to remove its records.

use crate::db::{constraint_violation, ConstraintViolation, DbError};
use crate::model::student::{normalize_student_name, Student, StudentId};
use crate::model::ValidationError;
use rusqlite::Connection;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student/record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    /// Record insert referenced a student id that does not exist.
    StudentNotFound(StudentId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::StudentNotFound(id) => write!(f, "student not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::StudentNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of an add-student attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "id")]
pub enum AddStudentOutcome {
    /// A new student row exists with this fresh id.
    Added(StudentId),
    /// A student with the exact same name already exists; nothing changed.
    Duplicate,
}

impl AddStudentOutcome {
    pub fn is_added(self) -> bool {
        matches!(self, Self::Added(_))
    }

    pub fn student_id(self) -> Option<StudentId> {
        match self {
            Self::Added(id) => Some(id),
            Self::Duplicate => None,
        }
    }
}

/// Repository interface for student operations.
pub trait StudentRepository {
    fn add_student(&self, name: &str) -> RepoResult<AddStudentOutcome>;
    fn list_students(&self) -> RepoResult<Vec<Student>>;
    fn delete_student(&self, id: StudentId) -> RepoResult<()>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn add_student(&self, name: &str) -> RepoResult<AddStudentOutcome> {
        let name = normalize_student_name(name)?;

        match self
            .conn
            .execute("INSERT INTO students (name) VALUES (?1);", [name.as_str()])
        {
            Ok(_) => Ok(AddStudentOutcome::Added(self.conn.last_insert_rowid())),
            Err(err) if constraint_violation(&err) == Some(ConstraintViolation::Unique) => {
                Ok(AddStudentOutcome::Duplicate)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM students ORDER BY name ASC;")?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();
        while let Some(row) = rows.next()? {
            students.push(Student {
                id: row.get("id")?,
                name: row.get("name")?,
            });
        }
        Ok(students)
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM students WHERE id = ?1;", [id])?;
        Ok(())
    }
}
