use std::sync::Arc;

use crate::error::ServiceError;
use crate::game::{Game, GamePatch};
use crate::repository::GameRepository;
use crate::types::GameId;

use super::{fail, GAME_NOT_FOUND};

const CONTEXT: &str = "Error updating game";
const GAME_ID_REQUIRED: &str = "Game ID is required";

/// Target id plus the fields to change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateGameInput {
    /// `None` and `Some(0)` are both treated as a missing id.
    pub game_id: Option<GameId>,
    pub patch: GamePatch,
}

/// Applies a partial update to a stored game.
pub struct UpdateGameService {
    repository: Arc<dyn GameRepository>,
}

impl UpdateGameService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: UpdateGameInput) -> Result<Game, ServiceError> {
        let game_id = input
            .game_id
            .filter(|&id| id != 0)
            .ok_or_else(|| ServiceError::new(GAME_ID_REQUIRED))?;

        let mut game = self
            .repository
            .find_by_id(game_id)
            .await
            .map_err(|e| fail(CONTEXT, e))?
            .ok_or_else(|| ServiceError::new(GAME_NOT_FOUND))?;

        game.update(input.patch).map_err(|e| fail(CONTEXT, e))?;

        let saved = self
            .repository
            .save(&game)
            .await
            .map_err(|e| fail(CONTEXT, e))?;
        tracing::info!(game_id = saved.id(), "Game updated");
        Ok(saved)
    }
}
