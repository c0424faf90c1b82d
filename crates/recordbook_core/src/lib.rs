//! Core record-keeping logic for recordbook.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use model::record::{Record, RecordId, RecordValidationError, ReplacePolicy};
pub use model::student::Student;
pub use model::todo::{TodoItem, TodoPriority, TodoStatus};
pub use model::vehicle::{Vehicle, VehicleDraft, VehiclePatch};
pub use repo::record_store::{InMemoryRecordStore, RecordRepository, StoreError, StoreResult};
pub use service::record_service::{
    RecordService, ServiceError, ServiceResult, StudentService, TodoService, VehicleService,
};

/// Minimal health-check API for collaborator smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
