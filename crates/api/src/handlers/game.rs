//! Handlers for the `/games` resource.
//!
//! The `{id}` segment is taken as a raw string and validated here so a bad
//! id produces the same `Validation error` body as a bad payload.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ludoteca_core::services::{
    AddGameService, DeleteGameInput, DeleteGameService, GetAllGamesService, GetGameByIdInput,
    GetGameByIdService, UpdateGameService,
};
use ludoteca_core::Game;

use crate::dto::{parse_game_id, AddGameDto, UpdateGameDto};
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /api/v1/games
pub async fn create(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<AddGameDto>,
) -> AppResult<(StatusCode, Json<Game>)> {
    let input = dto.into_input()?;
    let game = AddGameService::new(state.repository.clone())
        .execute(input)
        .await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/v1/games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GetAllGamesService::new(state.repository.clone())
        .execute()
        .await?;
    Ok(Json(games))
}

/// GET /api/v1/games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Game>> {
    let id = parse_game_id(&id)?;
    let game = GetGameByIdService::new(state.repository.clone())
        .execute(GetGameByIdInput { id })
        .await?;
    Ok(Json(game))
}

/// PUT /api/v1/games/{id}
///
/// Partial update: only the fields present in the body change. Send
/// `"baseGame": null` to clear the base game reference.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(dto): JsonBody<UpdateGameDto>,
) -> AppResult<Json<Game>> {
    let input = dto.into_input(&id)?;
    let game = UpdateGameService::new(state.repository.clone())
        .execute(input)
        .await?;
    Ok(Json(game))
}

/// DELETE /api/v1/games/{id}
///
/// Responds with the game that was removed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Game>> {
    let game_id = parse_game_id(&id)?;
    let game = DeleteGameService::new(state.repository.clone())
        .execute(DeleteGameInput { game_id })
        .await?;
    Ok(Json(game))
}
