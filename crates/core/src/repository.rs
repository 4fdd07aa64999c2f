//! Persistence port for games.
//!
//! Services depend only on [`GameRepository`]; concrete storage lives in
//! `ludoteca-db`.

use async_trait::async_trait;

use crate::error::EntityError;
use crate::game::Game;
use crate::types::GameId;

/// Failures a storage backend may report.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backend rejected or could not complete the operation.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// A stored document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A stored document decoded but no longer satisfies the game invariants.
    #[error(transparent)]
    InvalidDocument(#[from] EntityError),
}

impl RepositoryError {
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Storage contract for the `Game` aggregate.
///
/// `save` writes the whole document (insert or replace); there is no version
/// check, so concurrent saves of the same id are last-write-wins.
/// `save_all` is all-or-nothing: on error none of the games are stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn save(&self, game: &Game) -> Result<Game, RepositoryError>;
    async fn save_all(&self, games: &[Game]) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Game>, RepositoryError>;
    async fn delete(&self, game: &Game) -> Result<(), RepositoryError>;
}
