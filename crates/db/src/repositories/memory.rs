//! Process-local game repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use ludoteca_core::{Game, GameId, GameRepository, RepositoryError};
use tokio::sync::RwLock;

/// Keeps games in an ordered map; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: RwLock<BTreeMap<GameId, Game>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `games` already stored.
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        Self {
            games: RwLock::new(games.into_iter().map(|g| (g.id(), g)).collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn save(&self, game: &Game) -> Result<Game, RepositoryError> {
        self.games.write().await.insert(game.id(), game.clone());
        Ok(game.clone())
    }

    async fn save_all(&self, games: &[Game]) -> Result<(), RepositoryError> {
        let mut stored = self.games.write().await;
        stored.extend(games.iter().map(|g| (g.id(), g.clone())));
        Ok(())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Game>, RepositoryError> {
        Ok(self.games.read().await.values().cloned().collect())
    }

    async fn delete(&self, game: &Game) -> Result<(), RepositoryError> {
        self.games.write().await.remove(&game.id());
        Ok(())
    }
}
