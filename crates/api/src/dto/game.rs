use chrono::Datelike;
use ludoteca_core::services::{AddGameInput, UpdateGameInput};
use ludoteca_core::{GameId, GamePatch, GameProps, GameType, Players};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use super::{collect_field_errors, into_result};
use crate::error::{AppError, FieldError};

const PLAYER_RANGE: &str = "Minimum players must be less than or equal to maximum players";
const BASE_GAME_REQUIRED: &str = "Base game ID is required for expansions";

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PlayersDto {
    #[validate(range(min = 1, message = "Number must be greater than or equal to 1"))]
    pub min: i32,
    #[validate(range(min = 1, message = "Number must be greater than or equal to 1"))]
    pub max: i32,
}

impl PlayersDto {
    /// Field rules first; the range is only compared once both bounds pass.
    fn check(&self, out: &mut Vec<FieldError>) {
        match self.validate() {
            Ok(()) if self.min > self.max => out.push(FieldError::new("players", PLAYER_RANGE)),
            Ok(()) => {}
            Err(errors) => collect_field_errors(Some("players"), &errors, out),
        }
    }
}

impl From<PlayersDto> for Players {
    fn from(dto: PlayersDto) -> Self {
        Players::new(dto.min, dto.max)
    }
}

/// Body of `POST /api/v1/games`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddGameDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 1900, message = "Number must be greater than or equal to 1900"))]
    pub release_year: i32,
    pub players: PlayersDto,
    #[validate(length(min = 1, message = "Publisher is required"))]
    pub publisher: String,
    pub expansions: Vec<GameId>,
    pub standalone: Option<bool>,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub base_game: Option<GameId>,
}

impl AddGameDto {
    /// Validate and convert into the add-game use case input.
    pub fn into_input(self) -> Result<AddGameInput, AppError> {
        let mut errors = Vec::new();
        if let Err(e) = self.validate() {
            collect_field_errors(None, &e, &mut errors);
        }
        check_not_future(self.release_year, &mut errors);
        self.players.check(&mut errors);
        into_result(errors)?;

        Ok(GameProps {
            name: self.name,
            release_year: self.release_year,
            players: self.players.into(),
            publisher: self.publisher,
            expansions: self.expansions,
            standalone: self.standalone,
            game_type: self.game_type,
            base_game: self.base_game,
        })
    }
}

/// Body of `PUT /api/v1/games/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(range(min = 1900, message = "Number must be greater than or equal to 1900"))]
    pub release_year: Option<i32>,
    pub players: Option<PlayersDto>,
    #[validate(length(min = 1, message = "Publisher is required"))]
    pub publisher: Option<String>,
    pub expansions: Option<Vec<GameId>>,
    pub standalone: Option<bool>,
    #[serde(rename = "type")]
    pub game_type: Option<GameType>,
    /// Absent leaves the reference alone; `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub base_game: Option<Option<GameId>>,
}

impl UpdateGameDto {
    /// Validate together with the raw path id and convert into the
    /// update use case input.
    pub fn into_input(self, raw_id: &str) -> Result<UpdateGameInput, AppError> {
        let mut errors = Vec::new();
        let game_id = match check_game_id(raw_id) {
            Ok(id) => Some(id),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if let Err(e) = self.validate() {
            collect_field_errors(None, &e, &mut errors);
        }
        if let Some(year) = self.release_year {
            check_not_future(year, &mut errors);
        }
        if let Some(players) = &self.players {
            players.check(&mut errors);
        }
        if self.game_type == Some(GameType::Expansion) && !matches!(self.base_game, Some(Some(_)))
        {
            errors.push(FieldError::new("baseGame", BASE_GAME_REQUIRED));
        }
        into_result(errors)?;

        Ok(UpdateGameInput {
            game_id,
            patch: GamePatch {
                name: self.name,
                release_year: self.release_year,
                players: self.players.map(Players::from),
                publisher: self.publisher,
                expansions: self.expansions,
                standalone: self.standalone,
                game_type: self.game_type,
                base_game: self.base_game,
            },
        })
    }
}

/// Parse the `{id}` path segment; it must be a positive integer.
pub fn parse_game_id(raw: &str) -> Result<GameId, AppError> {
    check_game_id(raw).map_err(|e| AppError::Validation(vec![e]))
}

fn check_game_id(raw: &str) -> Result<GameId, FieldError> {
    match raw.trim().parse::<GameId>() {
        Ok(id) if id >= 1 => Ok(id),
        Ok(_) => Err(FieldError::new(
            "gameId",
            "Number must be greater than or equal to 1",
        )),
        Err(_) => Err(FieldError::new("gameId", "Expected an integer")),
    }
}

fn check_not_future(year: i32, out: &mut Vec<FieldError>) {
    let current = chrono::Utc::now().year();
    if year > current {
        out.push(FieldError::new(
            "releaseYear",
            format!("Number must be less than or equal to {current}"),
        ));
    }
}

/// Distinguish a present `null` from an absent field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn catan_body() -> serde_json::Value {
        json!({
            "name": "Catan",
            "releaseYear": 1995,
            "players": { "min": 3, "max": 4 },
            "publisher": "Kosmos",
            "expansions": [],
            "standalone": true,
            "type": "BaseGame"
        })
    }

    fn add(body: serde_json::Value) -> Result<AddGameInput, AppError> {
        serde_json::from_value::<AddGameDto>(body).unwrap().into_input()
    }

    fn update(body: serde_json::Value, id: &str) -> Result<UpdateGameInput, AppError> {
        serde_json::from_value::<UpdateGameDto>(body)
            .unwrap()
            .into_input(id)
    }

    fn paths(err: AppError) -> Vec<(String, String)> {
        match err {
            AppError::Validation(errors) => {
                errors.into_iter().map(|e| (e.path, e.message)).collect()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_create_body_converts() {
        let input = add(catan_body()).unwrap();

        assert_eq!(input.name, "Catan");
        assert_eq!(input.players, Players::new(3, 4));
        assert_eq!(input.standalone, Some(true));
        assert_eq!(input.base_game, None);
    }

    #[test]
    fn create_reports_every_violation_sorted() {
        let mut body = catan_body();
        body["name"] = json!("");
        body["publisher"] = json!("");
        body["releaseYear"] = json!(1850);

        let errors = paths(add(body).unwrap_err());

        assert_eq!(
            errors,
            vec![
                ("name".into(), "Name is required".into()),
                ("publisher".into(), "Publisher is required".into()),
                (
                    "releaseYear".into(),
                    "Number must be greater than or equal to 1900".into()
                ),
            ]
        );
    }

    #[test]
    fn inverted_player_range_is_reported_on_players() {
        let mut body = catan_body();
        body["players"] = json!({ "min": 3, "max": 2 });

        assert_eq!(
            paths(add(body).unwrap_err()),
            vec![("players".into(), PLAYER_RANGE.into())]
        );
    }

    #[test]
    fn zero_player_bound_is_reported_on_the_bound() {
        let mut body = catan_body();
        body["players"] = json!({ "min": 0, "max": 4 });

        let errors = paths(add(body).unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "players.min");
    }

    #[test]
    fn future_release_year_is_rejected() {
        let mut body = catan_body();
        body["releaseYear"] = json!(chrono::Utc::now().year() + 1);

        let errors = paths(add(body).unwrap_err());
        assert_eq!(errors[0].0, "releaseYear");
        assert!(errors[0].1.starts_with("Number must be less than or equal to"));
    }

    #[test]
    fn missing_expansions_fails_to_deserialize() {
        let mut body = catan_body();
        body.as_object_mut().unwrap().remove("expansions");

        assert!(serde_json::from_value::<AddGameDto>(body).is_err());
    }

    #[test]
    fn empty_update_body_is_valid() {
        let input = update(json!({}), "12").unwrap();

        assert_eq!(input.game_id, Some(12));
        assert_eq!(input.patch, GamePatch::default());
    }

    #[test]
    fn update_distinguishes_null_from_absent_base_game() {
        let cleared = update(json!({ "baseGame": null }), "3").unwrap();
        assert_eq!(cleared.patch.base_game, Some(None));

        let untouched = update(json!({ "name": "Catan" }), "3").unwrap();
        assert_eq!(untouched.patch.base_game, None);

        let set = update(json!({ "baseGame": 7 }), "3").unwrap();
        assert_eq!(set.patch.base_game, Some(Some(7)));
    }

    #[test]
    fn expansion_update_needs_base_game_in_same_request() {
        let errors = paths(update(json!({ "type": "Expansion" }), "3").unwrap_err());
        assert_eq!(errors, vec![("baseGame".into(), BASE_GAME_REQUIRED.into())]);

        assert!(update(json!({ "type": "Expansion", "baseGame": 1 }), "3").is_ok());
    }

    #[test]
    fn bad_path_id_is_listed_with_body_errors() {
        let errors = paths(update(json!({ "name": "" }), "0").unwrap_err());

        let fields: Vec<_> = errors.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(fields, vec!["gameId", "name"]);
    }

    #[test]
    fn game_id_must_be_a_positive_integer() {
        assert_eq!(parse_game_id("42").unwrap(), 42);
        assert_matches!(parse_game_id("0"), Err(AppError::Validation(_)));
        assert_matches!(parse_game_id("-5"), Err(AppError::Validation(_)));
        assert_matches!(parse_game_id("abc"), Err(AppError::Validation(_)));
    }
}
