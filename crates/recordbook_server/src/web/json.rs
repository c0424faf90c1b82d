//! JSON extractor whose rejections use the crate error envelope.

use crate::web::Error;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};

/// `axum::Json`, but malformed bodies answer with `{"detail", "error"}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
