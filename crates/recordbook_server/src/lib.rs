//! HTTP transport for the recordbook stores.
//!
//! # Responsibility
//! - Expose the student, to-do and vehicle services over JSON request/response.
//! - Map service errors to HTTP statuses and `{"detail": ...}` bodies.
//!
//! # Invariants
//! - Handlers hold a store lock for one service call only.

pub mod config;
mod error;
pub mod state;
pub mod web;

pub use self::config::{config, Config, ConfigError};
pub use self::error::{Error, Result};
pub use self::state::AppState;

/// Builds the application router over fresh or shared state.
pub fn app(state: AppState) -> axum::Router {
    web::routes(state)
}
