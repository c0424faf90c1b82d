//! Generic CRUD handlers shared by every record resource.

use crate::state::{lock, SharedService};
use crate::web::{Json, Result};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;
use recordbook_core::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Routes batch-create/list at `base` and get/replace/delete at `{base}{id}`.
///
/// `base` must end with `/`, matching the student and to-do API paths. The
/// collection is also served without the trailing slash.
pub fn routes<R>(base: &str, service: SharedService<R>) -> Router
where
    R: Record + Serialize + DeserializeOwned + Send + Sync + 'static,
    R::Update: DeserializeOwned + Send + 'static,
{
    Router::new()
        .route(base, post(create_batch::<R>).get(list_all::<R>))
        .route(
            base.trim_end_matches('/'),
            post(create_batch::<R>).get(list_all::<R>),
        )
        .route(
            &format!("{base}{{id}}"),
            get(get_one::<R>)
                .put(replace::<R>)
                .delete(delete_one::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_batch<R>(
    State(service): State<SharedService<R>>,
    Json(records): Json<Vec<R>>,
) -> Result<Json<Vec<R>>>
where
    R: Record + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let created = lock(&service)?.create_batch(records)?;
    Ok(Json(created))
}

pub(crate) async fn list_all<R>(State(service): State<SharedService<R>>) -> Result<Json<Vec<R>>>
where
    R: Record + Serialize + Send + Sync + 'static,
{
    let records = lock(&service)?.list_all();
    Ok(Json(records))
}

pub(crate) async fn get_one<R>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>>
where
    R: Record + Serialize + Send + Sync + 'static,
{
    let record = lock(&service)?.get(&id)?;
    Ok(Json(record))
}

pub(crate) async fn replace<R>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
    Json(update): Json<R::Update>,
) -> Result<Json<R>>
where
    R: Record + Serialize + Send + Sync + 'static,
    R::Update: DeserializeOwned + Send + 'static,
{
    let record = lock(&service)?.replace(&id, update)?;
    Ok(Json(record))
}

pub(crate) async fn delete_one<R>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>>
where
    R: Record + Serialize + Send + Sync + 'static,
{
    let record = lock(&service)?.delete(&id)?;
    Ok(Json(record))
}
