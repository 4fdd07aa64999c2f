use std::sync::Arc;

use ludoteca_core::GameRepository;
use serde::Serialize;

use crate::config::ServerConfig;

/// Which storage backend the repository talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Postgres,
    Memory,
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Game persistence port shared by every service.
    pub repository: Arc<dyn GameRepository>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Backend behind `repository`, reported by the health check.
    pub storage: StorageKind,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn GameRepository>,
        storage: StorageKind,
        config: ServerConfig,
    ) -> Self {
        Self {
            repository,
            config: Arc::new(config),
            storage,
        }
    }
}
