//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for students and records.
//! - Isolate SQLite query details from the store facade.
//!
//! # Invariants
//! - Write paths normalize and validate input before SQL mutations.
//! - Deletes of absent ids are silent no-ops, never `NotFound` errors.
//! - A duplicate student name is an outcome, not an error.

pub mod record_repo;
pub mod student_repo;
