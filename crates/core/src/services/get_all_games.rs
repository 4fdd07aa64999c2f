use std::sync::Arc;

use crate::error::ServiceError;
use crate::game::Game;
use crate::repository::GameRepository;

use super::fail;

const CONTEXT: &str = "Error getting all games";

/// Lists every game in the catalog.
pub struct GetAllGamesService {
    repository: Arc<dyn GameRepository>,
}

impl GetAllGamesService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Game>, ServiceError> {
        let games = self
            .repository
            .find_all()
            .await
            .map_err(|e| fail(CONTEXT, e))?;
        tracing::debug!(count = games.len(), "Listed games");
        Ok(games)
    }
}
