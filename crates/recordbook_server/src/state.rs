//! Shared application state.
//!
//! One mutex guards each record store; a guard is held for exactly one
//! service call and never across an `.await`.

use crate::web::{Error, Result};
use recordbook_core::{Record, RecordService, Student, TodoItem, Vehicle};
use std::sync::{Arc, Mutex, MutexGuard};

pub type SharedService<R> = Arc<Mutex<RecordService<R>>>;

#[derive(Clone, Default)]
pub struct AppState {
    pub students: SharedService<Student>,
    pub todos: SharedService<TodoItem>,
    pub vehicles: SharedService<Vehicle>,
}

impl AppState {
    /// Creates state with three empty stores.
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn lock<R: Record>(
    service: &SharedService<R>,
) -> Result<MutexGuard<'_, RecordService<R>>> {
    service.lock().map_err(|_| Error::StoreUnavailable(R::KIND))
}
