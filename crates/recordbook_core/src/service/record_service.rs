//! Record use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for transport and CLI callers.
//! - Validate record shape before delegating to a repository.
//! - Emit metadata-only log events for every operation.
//!
//! # Invariants
//! - A batch is validated as a whole before any record is inserted.
//! - Service APIs never bypass repository uniqueness/existence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::record::{Record, RecordValidationError};
use crate::model::student::Student;
use crate::model::todo::TodoItem;
use crate::model::vehicle::Vehicle;
use crate::repo::record_store::{InMemoryRecordStore, RecordRepository, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Student service over the in-memory store.
pub type StudentService = RecordService<Student>;
/// To-do item service over the in-memory store.
pub type TodoService = RecordService<TodoItem>;
/// Vehicle service over the in-memory store.
pub type VehicleService = RecordService<Vehicle>;

/// Service error for record use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Payload rejected before reaching the store.
    Validation {
        kind: &'static str,
        error: RecordValidationError,
    },
    /// Store-level conflict or not-found.
    Store {
        kind: &'static str,
        error: StoreError,
    },
}

impl ServiceError {
    fn store<R: Record>(error: StoreError) -> Self {
        Self::Store {
            kind: R::KIND,
            error,
        }
    }

    fn validation<R: Record>(error: RecordValidationError) -> Self {
        Self::Validation {
            kind: R::KIND,
            error,
        }
    }

    /// Returns the store error, if this failure came from the store.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store { error, .. } => Some(error),
            Self::Validation { .. } => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self.store_error(), Some(StoreError::Conflict(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.store_error(), Some(StoreError::NotFound(_)))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { kind, error } => write!(f, "invalid {kind}: {error}"),
            Self::Store {
                kind,
                error: StoreError::Conflict(id),
            } => write!(f, "{kind} id `{id}` already exists"),
            Self::Store {
                kind,
                error: StoreError::NotFound(id),
            } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { error, .. } => Some(error),
            Self::Store { error, .. } => Some(error),
        }
    }
}

/// Use-case service wrapper for one record kind.
#[derive(Debug)]
pub struct RecordService<R: Record, S: RecordRepository<R> = InMemoryRecordStore<R>> {
    repo: S,
    _record: PhantomData<R>,
}

impl<R: Record> RecordService<R> {
    /// Creates a service over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRecordStore::new())
    }
}

impl<R: Record> Default for RecordService<R> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: Record, S: RecordRepository<R>> RecordService<R, S> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: S) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    /// Validates and inserts a batch of records.
    ///
    /// # Contract
    /// - Any shape failure rejects the whole batch before insertion.
    /// - The first duplicate id fails with a conflict; earlier records of
    ///   the batch remain stored.
    pub fn create_batch(&mut self, records: Vec<R>) -> ServiceResult<Vec<R>> {
        for record in &records {
            if let Err(err) = record.validate() {
                warn!(
                    "event=record_create module=service status=error kind={} error_code=validation error={}",
                    R::KIND,
                    err
                );
                return Err(ServiceError::validation::<R>(err));
            }
        }

        let requested = records.len();
        match self.repo.create_batch(records) {
            Ok(created) => {
                for record in &created {
                    info!(
                        "event=record_create module=service status=ok kind={} id={}",
                        R::KIND,
                        record.record_id()
                    );
                }
                Ok(created)
            }
            Err(err) => {
                warn!(
                    "event=record_create module=service status=error kind={} requested={} error_code={} id={}",
                    R::KIND,
                    requested,
                    store_error_code(&err),
                    err.record_id()
                );
                Err(ServiceError::store::<R>(err))
            }
        }
    }

    /// Lists every stored record.
    pub fn list_all(&self) -> Vec<R> {
        let records = self.repo.list_all();
        info!(
            "event=record_list module=service status=ok kind={} count={}",
            R::KIND,
            records.len()
        );
        records
    }

    /// Gets one record by id.
    pub fn get(&self, id: &str) -> ServiceResult<R> {
        self.repo
            .get(id)
            .map(|record| {
                info!(
                    "event=record_get module=service status=ok kind={} id={id}",
                    R::KIND
                );
                record
            })
            .map_err(|err| self.log_store_error("record_get", err))
    }

    /// Replaces or merges the record stored under `id`.
    ///
    /// The policy is fixed per record kind by `Record::REPLACE_POLICY`.
    pub fn replace(&mut self, id: &str, update: R::Update) -> ServiceResult<R> {
        if let Err(err) = R::validate_update(&update) {
            warn!(
                "event=record_replace module=service status=error kind={} id={id} error_code=validation error={}",
                R::KIND,
                err
            );
            return Err(ServiceError::validation::<R>(err));
        }

        match self.repo.replace(id, update) {
            Ok(record) => {
                info!(
                    "event=record_replace module=service status=ok kind={} id={id} policy={}",
                    R::KIND,
                    R::REPLACE_POLICY.as_str()
                );
                Ok(record)
            }
            Err(err) => Err(self.log_store_error("record_replace", err)),
        }
    }

    /// Removes and returns the record stored under `id`.
    pub fn delete(&mut self, id: &str) -> ServiceResult<R> {
        match self.repo.delete(id) {
            Ok(record) => {
                info!(
                    "event=record_delete module=service status=ok kind={} id={id} remaining={}",
                    R::KIND,
                    self.repo.len()
                );
                Ok(record)
            }
            Err(err) => Err(self.log_store_error("record_delete", err)),
        }
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.repo.contains(id)
    }

    fn log_store_error(&self, event: &str, err: StoreError) -> ServiceError {
        warn!(
            "event={event} module=service status=error kind={} error_code={} id={}",
            R::KIND,
            store_error_code(&err),
            err.record_id()
        );
        ServiceError::store::<R>(err)
    }
}

fn store_error_code(err: &StoreError) -> &'static str {
    match err {
        StoreError::Conflict(_) => "conflict",
        StoreError::NotFound(_) => "not_found",
    }
}
