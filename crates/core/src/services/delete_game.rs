use std::sync::Arc;

use crate::error::ServiceError;
use crate::game::Game;
use crate::repository::GameRepository;
use crate::types::GameId;

use super::{fail, GAME_NOT_FOUND};

const CONTEXT: &str = "Error deleting game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteGameInput {
    pub game_id: GameId,
}

/// Removes a game from the catalog and returns what was removed.
pub struct DeleteGameService {
    repository: Arc<dyn GameRepository>,
}

impl DeleteGameService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: DeleteGameInput) -> Result<Game, ServiceError> {
        let game = self
            .repository
            .find_by_id(input.game_id)
            .await
            .map_err(|e| fail(CONTEXT, e))?
            .ok_or_else(|| ServiceError::new(GAME_NOT_FOUND))?;

        self.repository
            .delete(&game)
            .await
            .map_err(|e| fail(CONTEXT, e))?;

        tracing::info!(game_id = game.id(), "Game deleted");
        Ok(game)
    }
}
