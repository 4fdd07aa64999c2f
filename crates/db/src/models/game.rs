//! Row model for the `games` table.
//!
//! The `document` column holds the camelCase property set (everything but
//! the id, which is the row key):
//!
//! ```json
//! { "name": "Catan", "releaseYear": 1995, "players": { "min": 3, "max": 4 },
//!   "publisher": "Kosmos", "expansions": [], "standalone": true,
//!   "type": "BaseGame" }
//! ```

use ludoteca_core::{Game, GameId, GameProps, RepositoryError};
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: GameId,
    pub document: serde_json::Value,
}

impl GameRow {
    /// Rehydrate the aggregate, re-checking every invariant.
    pub fn into_game(self) -> Result<Game, RepositoryError> {
        let props: GameProps = serde_json::from_value(self.document).map_err(|e| {
            RepositoryError::serialization(format!("game {}: {e}", self.id))
        })?;
        Ok(Game::create(props, Some(self.id))?)
    }
}

/// Encode a game's property set as a stored document.
pub fn to_document(game: &Game) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(game.props()).map_err(RepositoryError::serialization)
}
