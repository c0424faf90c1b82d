//! Vehicle routes: single-draft registration plus the shared CRUD handlers.

use crate::state::{lock, SharedService};
use crate::web::records::{delete_one, get_one, list_all, replace};
use crate::web::{Json, Result};
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use recordbook_core::{Vehicle, VehicleDraft};

pub fn routes(service: SharedService<Vehicle>) -> Router {
    Router::new()
        .route("/vehicles", post(register).get(list_all::<Vehicle>))
        .route(
            "/vehicles/{id}",
            get(get_one::<Vehicle>)
                .put(replace::<Vehicle>)
                .delete(delete_one::<Vehicle>),
        )
        .with_state(service)
}

async fn register(
    State(service): State<SharedService<Vehicle>>,
    Json(draft): Json<VehicleDraft>,
) -> Result<Json<Vehicle>> {
    let vehicle = lock(&service)?.register_vehicle(draft)?;
    Ok(Json(vehicle))
}
