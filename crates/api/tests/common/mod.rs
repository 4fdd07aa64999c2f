//! Shared helpers for the API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use ludoteca_core::{Game, GameId, GameRepository, RepositoryError};
use ludoteca_db::repositories::InMemoryGameRepository;
use tower::ServiceExt;

use ludoteca_api::config::ServerConfig;
use ludoteca_api::router::build_app_router;
use ludoteca_api::state::{AppState, StorageKind};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Full application router over the given repository and configuration.
pub fn build_test_app_with_config(
    repository: Arc<dyn GameRepository>,
    config: ServerConfig,
) -> Router {
    let state = AppState::new(repository, StorageKind::Memory, config.clone());
    build_app_router(state, &config)
}

/// Full application router over the given repository.
pub fn build_test_app_with(repository: Arc<dyn GameRepository>) -> Router {
    build_test_app_with_config(repository, test_config())
}

/// Full application router over an empty in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryGameRepository::new()))
}

/// A repository whose every call fails with a storage error.
pub struct FailingRepository;

#[async_trait]
impl GameRepository for FailingRepository {
    async fn save(&self, _game: &Game) -> Result<Game, RepositoryError> {
        Err(RepositoryError::storage("save", "connection refused"))
    }

    async fn save_all(&self, _games: &[Game]) -> Result<(), RepositoryError> {
        Err(RepositoryError::storage("save_all", "connection refused"))
    }

    async fn find_by_id(&self, _id: GameId) -> Result<Option<Game>, RepositoryError> {
        Err(RepositoryError::storage("find_by_id", "connection refused"))
    }

    async fn find_all(&self) -> Result<Vec<Game>, RepositoryError> {
        Err(RepositoryError::storage("find_all", "connection refused"))
    }

    async fn delete(&self, _game: &Game) -> Result<(), RepositoryError> {
        Err(RepositoryError::storage("delete", "connection refused"))
    }
}

/// A repository that panics on every call.
pub struct PanickingRepository;

#[async_trait]
impl GameRepository for PanickingRepository {
    async fn save(&self, _game: &Game) -> Result<Game, RepositoryError> {
        panic!("storage exploded")
    }

    async fn save_all(&self, _games: &[Game]) -> Result<(), RepositoryError> {
        panic!("storage exploded")
    }

    async fn find_by_id(&self, _id: GameId) -> Result<Option<Game>, RepositoryError> {
        panic!("storage exploded")
    }

    async fn find_all(&self) -> Result<Vec<Game>, RepositoryError> {
        panic!("storage exploded")
    }

    async fn delete(&self, _game: &Game) -> Result<(), RepositoryError> {
        panic!("storage exploded")
    }
}

/// A repository that takes far longer than any test timeout to answer.
pub struct StalledRepository;

#[async_trait]
impl GameRepository for StalledRepository {
    async fn save(&self, game: &Game) -> Result<Game, RepositoryError> {
        stall().await;
        Ok(game.clone())
    }

    async fn save_all(&self, _games: &[Game]) -> Result<(), RepositoryError> {
        stall().await;
        Ok(())
    }

    async fn find_by_id(&self, _id: GameId) -> Result<Option<Game>, RepositoryError> {
        stall().await;
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<Game>, RepositoryError> {
        stall().await;
        Ok(vec![])
    }

    async fn delete(&self, _game: &Game) -> Result<(), RepositoryError> {
        stall().await;
        Ok(())
    }
}

async fn stall() {
    tokio::time::sleep(std::time::Duration::from_secs(60)).await;
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn catan() -> serde_json::Value {
    serde_json::json!({
        "name": "Catan",
        "releaseYear": 1995,
        "players": { "min": 3, "max": 4 },
        "publisher": "Kosmos",
        "expansions": [],
        "standalone": true,
        "type": "BaseGame"
    })
}
