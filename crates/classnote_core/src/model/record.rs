//! Record entity: a dated free-text note owned by one student.
//!
//! # Invariants
//! - `date` is always stored in zero-padded `YYYY-MM-DD` form, so text
//!   ordering equals calendar ordering.
//! - `content` is stored verbatim, embedded line breaks included.

use super::student::StudentId;
use super::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Storage-assigned record identifier.
pub type RecordId = i64;

/// Persisted date format for `records.date`.
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Read model returned by record listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub date: String,
    pub content: String,
}

/// Write-side input for creating one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub student_id: StudentId,
    pub date: String,
    pub content: String,
}

impl NewRecord {
    pub fn new(student_id: StudentId, date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            student_id,
            date: date.into(),
            content: content.into(),
        }
    }

    /// Creates a record input from an already-typed calendar date.
    pub fn on(student_id: StudentId, date: NaiveDate, content: impl Into<String>) -> Self {
        Self::new(student_id, format_record_date(date), content)
    }

    /// Returns a copy with the date normalized, or the first validation failure.
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyRecordContent);
        }
        let date = normalize_record_date(&self.date)?;
        Ok(Self {
            student_id: self.student_id,
            date,
            content: self.content.clone(),
        })
    }
}

/// Parses a calendar date and re-formats it as zero-padded `YYYY-MM-DD`.
pub fn normalize_record_date(value: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidRecordDate(value.to_string());
    let date =
        NaiveDate::parse_from_str(value.trim(), RECORD_DATE_FORMAT).map_err(|_| invalid())?;
    // Four-digit years only; a sign or a fifth digit breaks text ordering.
    if !(0..=9999).contains(&date.year()) {
        return Err(invalid());
    }
    Ok(format_record_date(date))
}

pub fn format_record_date(date: NaiveDate) -> String {
    date.format(RECORD_DATE_FORMAT).to_string()
}
