//! Record shapes held by the in-memory stores.
//!
//! # Responsibility
//! - Define the `Record` contract used by the generic store.
//! - Define the student, to-do and vehicle record shapes and their wire names.
//!
//! # Invariants
//! - Every record is keyed by a string identifier unique within its store.
//! - Shape validation lives here; stores never re-validate.

pub mod record;
pub mod student;
pub mod todo;
pub mod vehicle;
