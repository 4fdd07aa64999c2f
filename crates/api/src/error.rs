use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ludoteca_core::ServiceError;
use serde::Serialize;

/// A single rejected request field.
///
/// `path` is the dotted camelCase location, e.g. `players` or `releaseYear`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// An error that already knows its transport status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so every failure leaves the server as a JSON
/// `{ "message": ... }` body, plus an `errors` list for validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request failed schema validation.
    #[error("Validation error")]
    Validation(Vec<FieldError>),

    /// A use case rejected the request.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// An error carrying its own status code.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Anything unexpected. The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match &self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(errors.as_slice()),
            ),
            AppError::Service(err) => (StatusCode::BAD_REQUEST, err.message(), None),
            AppError::Http(err) => {
                if err.status().is_server_error() {
                    tracing::error!(status = %err.status(), error = %err, "HTTP error");
                }
                (err.status(), err.message(), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE, None)
            }
        };

        (status, Json(ErrorBody { message, errors })).into_response()
    }
}

/// Turn a caught handler panic into the generic 500 response.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
