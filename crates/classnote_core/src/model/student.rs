//! Student entity.

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Storage-assigned student identifier.
pub type StudentId = i64;

/// One registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    /// Unique, case-sensitive, stored trimmed.
    pub name: String,
}

/// Trims surrounding whitespace and rejects empty names.
///
/// Inner whitespace and letter case are preserved, so `"Amy"` and `"amy"`
/// remain distinct students.
pub fn normalize_student_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyStudentName);
    }
    Ok(trimmed.to_string())
}
