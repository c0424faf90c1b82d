mod error;
mod json;
mod mw_log;
pub mod records;
pub mod vehicles;

pub use self::error::{ClientError, Error, Result};
pub use self::json::Json;

use crate::state::AppState;
use axum::routing::get;
use axum::{middleware, Router};
use serde_json::{json, Value};

/// Builds the full router over `state`.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(records::routes("/students/", state.students))
        .merge(records::routes("/todolist/", state.todos))
        .merge(vehicles::routes(state.vehicles))
        .layer(middleware::from_fn(mw_log::mw_log_request))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": recordbook_core::core_version(),
    }))
}
