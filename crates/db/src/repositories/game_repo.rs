//! PostgreSQL-backed game repository.

use async_trait::async_trait;
use ludoteca_core::{Game, GameId, GameRepository, RepositoryError};
use sqlx::PgPool;

use crate::models::game::{to_document, GameRow};

/// Stores each game as one JSONB document keyed by id.
#[derive(Debug, Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const UPSERT: &str = "INSERT INTO games (id, document)
     VALUES ($1, $2)
     ON CONFLICT (id) DO UPDATE
        SET document = EXCLUDED.document,
            updated_at = NOW()
     RETURNING id, document";

fn db_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        tracing::error!(error = %err, operation, "Game repository query failed");
        RepositoryError::storage(operation, err)
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    /// Insert or fully replace the document for `game.id()`.
    async fn save(&self, game: &Game) -> Result<Game, RepositoryError> {
        let document = to_document(game)?;
        let row = sqlx::query_as::<_, GameRow>(UPSERT)
            .bind(game.id())
            .bind(&document)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("save"))?;
        row.into_game()
    }

    /// Upsert every game in one transaction; any failure rolls all of them back.
    async fn save_all(&self, games: &[Game]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error("save_all"))?;
        for game in games {
            let document = to_document(game)?;
            sqlx::query(UPSERT)
                .bind(game.id())
                .bind(&document)
                .execute(&mut *tx)
                .await
                .map_err(db_error("save_all"))?;
        }
        tx.commit().await.map_err(db_error("save_all"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        let row = sqlx::query_as::<_, GameRow>("SELECT id, document FROM games WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("find_by_id"))?;
        row.map(GameRow::into_game).transpose()
    }

    /// All games ordered by id, i.e. roughly by creation time.
    async fn find_all(&self) -> Result<Vec<Game>, RepositoryError> {
        let rows = sqlx::query_as::<_, GameRow>("SELECT id, document FROM games ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("find_all"))?;
        rows.into_iter().map(GameRow::into_game).collect()
    }

    async fn delete(&self, game: &Game) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(game.id())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete"))?;
        Ok(())
    }
}
