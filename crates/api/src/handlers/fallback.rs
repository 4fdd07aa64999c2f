//! Responses for requests no handler accepts.

use axum::http::StatusCode;

use crate::error::{AppError, HttpError};

/// Unknown path.
pub async fn not_found() -> AppError {
    HttpError::not_found().into()
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    HttpError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into()
}
