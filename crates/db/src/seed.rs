//! Bulk-load games from a JSON file.
//!
//! The file is a JSON array of game documents, each carrying its own `id`:
//!
//! ```json
//! [{ "id": 1, "name": "Catan", "releaseYear": 1995,
//!    "players": { "min": 3, "max": 4 }, "publisher": "Kosmos",
//!    "expansions": [2], "standalone": true, "type": "BaseGame" }]
//! ```
//!
//! Every entry is validated and ids must be unique before anything is
//! written. The games are then stored in a single all-or-nothing write, so a
//! failed run leaves storage untouched.

use std::collections::HashSet;
use std::path::Path;

use ludoteca_core::{EntityError, Game, GameId, GameProps, GameRepository, RepositoryError};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed entry {id} is invalid: {source}")]
    InvalidGame {
        id: GameId,
        #[source]
        source: EntityError,
    },

    #[error("Seed entry {0} appears more than once")]
    DuplicateId(GameId),

    #[error("Failed to store seed entries: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Deserialize)]
struct SeedEntry {
    id: GameId,
    #[serde(flatten)]
    props: GameProps,
}

/// Parse and validate seed data.
pub fn parse_seed(json: &str) -> Result<Vec<Game>, SeedError> {
    let entries: Vec<SeedEntry> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .map(|entry| {
            if !seen.insert(entry.id) {
                return Err(SeedError::DuplicateId(entry.id));
            }
            Game::create(entry.props, Some(entry.id))
                .map_err(|source| SeedError::InvalidGame { id: entry.id, source })
        })
        .collect()
}

/// Store every game in one write, returning how many were written.
pub async fn seed_games(
    repository: &dyn GameRepository,
    games: &[Game],
) -> Result<usize, SeedError> {
    repository.save_all(games).await?;
    for game in games {
        tracing::debug!(game_id = game.id(), name = game.name(), "Seeded game");
    }
    Ok(games.len())
}

/// Read, validate, and store the games in `path`.
pub async fn seed_from_file(
    repository: &dyn GameRepository,
    path: &Path,
) -> Result<usize, SeedError> {
    tracing::info!(path = %path.display(), "Reading seed data");
    let json = tokio::fs::read_to_string(path).await?;
    let games = parse_seed(&json)?;
    tracing::info!(count = games.len(), "Seed data validated");
    seed_games(repository, &games).await
}
