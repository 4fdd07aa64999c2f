//! Invariant check for game property sets.
//!
//! Rules run in a fixed order and the first violation is returned, so the
//! reported reason is deterministic when several fields are wrong at once.

use crate::error::EntityError;
use crate::game::{GameProps, GameType};

const ENTITY: &str = "Game";

/// Check every game invariant over a complete property set.
pub fn validate(props: &GameProps) -> Result<(), EntityError> {
    if props.name.is_empty() {
        return Err(violation("Name is required"));
    }

    if props.players.min < 1 {
        return Err(violation("Minimum players must be greater than 0"));
    }

    if props.players.max < props.players.min {
        return Err(violation(
            "Maximum players must be greater than minimum players",
        ));
    }

    if props.publisher.is_empty() {
        return Err(violation("Publisher is required"));
    }

    if props.expansions.iter().any(|&id| id < 1) {
        return Err(violation("Expansion must be greater than 0"));
    }

    match props.game_type {
        GameType::BaseGame if has_base_game(props) => {
            Err(violation("Base game cannot have a base game"))
        }
        GameType::Expansion if !has_base_game(props) => {
            Err(violation("Expansion must have a base game"))
        }
        _ => Ok(()),
    }
}

/// A zero reference is not a game id and counts as absent.
fn has_base_game(props: &GameProps) -> bool {
    props.base_game.is_some_and(|id| id != 0)
}

fn violation(reason: &str) -> EntityError {
    EntityError::new(ENTITY, reason)
}
