//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use ludoteca_api::error::{panic_response, AppError, FieldError, HttpError};
use ludoteca_core::{EntityError, ServiceError};
use serde_json::json;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400_with_field_list() {
    let err = AppError::Validation(vec![
        FieldError::new("name", "Name is required"),
        FieldError::new("players", "Minimum players must be less than or equal to maximum players"),
    ]);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Validation error");
    assert_eq!(json["errors"][0], json!({ "path": "name", "message": "Name is required" }));
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn bare_service_error_returns_400_with_its_message() {
    let (status, json) = error_to_response(ServiceError::new("Game not found").into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "message": "Game not found" }));
}

#[tokio::test]
async fn wrapped_service_error_keeps_composed_message() {
    let cause = EntityError::new("Game", "Name is required");
    let err = AppError::from(ServiceError::wrap("Error adding game", cause));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Error adding game - Game: Name is required");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn http_error_uses_its_own_status() {
    let err = AppError::from(HttpError::new(StatusCode::CONFLICT, "Already exists"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json, json!({ "message": "Already exists" }));
}

#[tokio::test]
async fn not_found_http_error_returns_404() {
    let (status, json) = error_to_response(HttpError::not_found().into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Not found");
}

#[tokio::test]
async fn internal_error_hides_its_detail() {
    let err = AppError::InternalError("pool exhausted at 10.0.0.3".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "message": "Internal server error" }));
}

#[tokio::test]
async fn panic_payload_becomes_generic_500() {
    let response = panic_response(Box::new("boom"));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, json!({ "message": "Internal server error" }));
}
