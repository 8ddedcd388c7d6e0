//! Store facade used by UI shells.
//!
//! # Responsibility
//! - Expose the record store operations as synchronous calls.
//! - Own connection scope: one connection per operation.

pub mod record_store;
