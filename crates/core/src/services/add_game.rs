use std::sync::Arc;

use crate::error::ServiceError;
use crate::game::{Game, GameProps};
use crate::repository::GameRepository;

use super::fail;

const CONTEXT: &str = "Error adding game";

/// A new game is described by its complete property set.
pub type AddGameInput = GameProps;

/// Validates a new game and persists it.
pub struct AddGameService {
    repository: Arc<dyn GameRepository>,
}

impl AddGameService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: AddGameInput) -> Result<Game, ServiceError> {
        let game = Game::create(input, None).map_err(|e| fail(CONTEXT, e))?;
        let saved = self
            .repository
            .save(&game)
            .await
            .map_err(|e| fail(CONTEXT, e))?;
        tracing::info!(game_id = saved.id(), name = saved.name(), "Game added");
        Ok(saved)
    }
}
