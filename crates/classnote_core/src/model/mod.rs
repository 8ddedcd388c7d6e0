//! Domain model for students and their dated records.
//!
//! # Responsibility
//! - Define the two persisted entities and their write-side inputs.
//! - Normalize and validate user input before it reaches SQL.
//!
//! # Invariants
//! - Ids are assigned by storage and never reused by the caller.
//! - A record always belongs to exactly one student.

pub mod record;
pub mod student;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input rejected before any storage work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Student name is empty after trimming.
    EmptyStudentName,
    /// Record content has no non-whitespace character.
    EmptyRecordContent,
    /// Record date is not a `YYYY-MM-DD` calendar date.
    InvalidRecordDate(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStudentName => write!(f, "student name must not be empty"),
            Self::EmptyRecordContent => write!(f, "record content must not be empty"),
            Self::InvalidRecordDate(value) => {
                write!(f, "invalid record date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for ValidationError {}
