use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use recordbook_core::ServiceError;
use serde_json::json;
use std::fmt::{Display, Formatter};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, strum_macros::AsRefStr)]
pub enum Error {
    Service(ServiceError),
    /// A store mutex was poisoned by a panicking request.
    StoreUnavailable(&'static str),
    /// The request body was not valid JSON for the expected shape.
    JsonRejection(JsonRejection),
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        match self {
            Self::JsonRejection(rejection) => (rejection.status(), ClientError::VALIDATION_FAILED),
            Self::Service(ServiceError::Validation { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ClientError::VALIDATION_FAILED)
            }
            Self::Service(err) if err.is_conflict() => {
                (StatusCode::BAD_REQUEST, ClientError::ID_CONFLICT)
            }
            Self::Service(err) if err.is_not_found() => {
                (StatusCode::NOT_FOUND, ClientError::NOT_FOUND)
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, client_error) = self.client_status_and_error();
        let body = json!({
            "detail": self.to_string(),
            "error": client_error.as_ref(),
        });
        debug!(
            "event=http_error module=web status={} error_type={} client_error={}",
            status.as_u16(),
            self.as_ref(),
            client_error.as_ref()
        );
        (status, Json(body)).into_response()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::StoreUnavailable(kind) => write!(f, "{kind} store is unavailable"),
            Self::JsonRejection(rejection) => write!(f, "{}", rejection.body_text()),
        }
    }
}

impl std::error::Error for Error {}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Self::JsonRejection(value)
    }
}

impl From<ServiceError> for Error {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    VALIDATION_FAILED,
    ID_CONFLICT,
    NOT_FOUND,
    SERVICE_ERROR,
}
