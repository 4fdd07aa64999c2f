use std::sync::Arc;

use crate::error::ServiceError;
use crate::game::Game;
use crate::repository::GameRepository;
use crate::types::GameId;

use super::{fail, GAME_NOT_FOUND};

const CONTEXT: &str = "Error getting game by id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetGameByIdInput {
    pub id: GameId,
}

/// Fetches a single game.
pub struct GetGameByIdService {
    repository: Arc<dyn GameRepository>,
}

impl GetGameByIdService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: GetGameByIdInput) -> Result<Game, ServiceError> {
        self.repository
            .find_by_id(input.id)
            .await
            .map_err(|e| fail(CONTEXT, e))?
            .ok_or_else(|| ServiceError::new(GAME_NOT_FOUND))
    }
}
