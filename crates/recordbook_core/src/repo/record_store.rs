//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide batch-create, list, get, replace and delete over keyed records.
//! - Enforce identifier uniqueness and existence preconditions.
//!
//! # Invariants
//! - Identifiers are unique within one store at all times.
//! - `create_batch` inserts in input order and stops at the first conflict;
//!   records inserted before the conflict stay inserted.
//! - `get`, `replace` and `delete` fail with `NotFound` for absent ids.
//! - The store never validates record shape; callers do that first.

use crate::model::record::{Record, RecordId};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure for keyed record operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Create attempted with an identifier already present.
    Conflict(RecordId),
    /// Get/replace/delete referenced an absent identifier.
    NotFound(RecordId),
}

impl StoreError {
    /// Identifier the failed operation referenced.
    pub fn record_id(&self) -> &str {
        match self {
            Self::Conflict(id) | Self::NotFound(id) => id,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict(id) => write!(f, "record id `{id}` already exists"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Repository interface for keyed record CRUD operations.
pub trait RecordRepository<R: Record> {
    /// Inserts `records` in order, failing on the first duplicate identifier.
    fn create_batch(&mut self, records: Vec<R>) -> StoreResult<Vec<R>>;
    /// Returns a snapshot of every stored record in unspecified order.
    fn list_all(&self) -> Vec<R>;
    fn get(&self, id: &str) -> StoreResult<R>;
    /// Folds `update` into the record stored under `id` and returns the result.
    fn replace(&mut self, id: &str, update: R::Update) -> StoreResult<R>;
    /// Removes and returns the record stored under `id`.
    fn delete(&mut self, id: &str) -> StoreResult<R>;
    fn contains(&self, id: &str) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime record store backed by a `HashMap`.
///
/// Each instance is independent; nothing is shared between stores.
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore<R> {
    records: HashMap<RecordId, R>,
}

impl<R> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordRepository<R> for InMemoryRecordStore<R> {
    fn create_batch(&mut self, records: Vec<R>) -> StoreResult<Vec<R>> {
        let mut created = Vec::with_capacity(records.len());

        for record in records {
            let id = record.record_id().to_string();
            if self.records.contains_key(&id) {
                return Err(StoreError::Conflict(id));
            }
            self.records.insert(id, record.clone());
            created.push(record);
        }

        Ok(created)
    }

    fn list_all(&self) -> Vec<R> {
        self.records.values().cloned().collect()
    }

    fn get(&self, id: &str) -> StoreResult<R> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn replace(&mut self, id: &str, update: R::Update) -> StoreResult<R> {
        let stored = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        stored.apply_update(update);
        Ok(stored.clone())
    }

    fn delete(&mut self, id: &str) -> StoreResult<R> {
        self.records
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
