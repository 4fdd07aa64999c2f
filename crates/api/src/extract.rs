//! Request extractors with JSON error bodies.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::{AppError, FieldError, HttpError};

/// Like [`axum::Json`], but rejections become [`AppError`]s.
///
/// Bodies that are not valid JSON, or do not fit `T`, are reported as a
/// validation error at path `body`; everything else (missing content type,
/// unreadable body) keeps axum's status code.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(JsonBody(dto): JsonBody<AddGameDto>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Validation(vec![FieldError::new("body", err.body_text())])
            }
            JsonRejection::JsonSyntaxError(err) => {
                AppError::Validation(vec![FieldError::new("body", err.body_text())])
            }
            other => AppError::Http(HttpError::new(other.status(), other.body_text())),
        }
    }
}
