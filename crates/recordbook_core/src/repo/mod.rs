//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage details behind the `RecordRepository` trait.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`Conflict`, `NotFound`) only.

pub mod record_store;
