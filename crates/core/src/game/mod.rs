//! The `Game` aggregate.
//!
//! A game is built only through [`Game::create`] and changed only through
//! [`Game::update`]; both run the full invariant check in
//! [`validator::validate`] over the complete property set. There are no
//! public fields and no setters.

mod id;
pub mod validator;

use serde::{Deserialize, Serialize};

use crate::error::EntityError;
use crate::types::GameId;

pub use id::next_game_id;

/// Whether a catalog entry is a standalone base game or an expansion of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    BaseGame,
    Expansion,
}

/// Supported player count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub min: i32,
    pub max: i32,
}

impl Players {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// The full, mutable property set of a game.
///
/// This is a plain input value; invariants are only guaranteed once it has
/// gone through [`Game::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProps {
    pub name: String,
    pub release_year: i32,
    pub players: Players,
    pub publisher: String,
    /// Ids of this game's expansions, in insertion order.
    #[serde(default)]
    pub expansions: Vec<GameId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standalone: Option<bool>,
    #[serde(rename = "type")]
    pub game_type: GameType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_game: Option<GameId>,
}

/// A subset of game properties to merge into an existing game.
///
/// `None` leaves a field untouched. `base_game` is tri-state: `None` leaves
/// the reference, `Some(Some(id))` sets it, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamePatch {
    pub name: Option<String>,
    pub release_year: Option<i32>,
    pub players: Option<Players>,
    pub publisher: Option<String>,
    pub expansions: Option<Vec<GameId>>,
    pub standalone: Option<bool>,
    pub game_type: Option<GameType>,
    pub base_game: Option<Option<GameId>>,
}

impl GamePatch {
    /// Produce the merged property set without touching `current`.
    fn merge_into(self, current: &GameProps) -> GameProps {
        GameProps {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            release_year: self.release_year.unwrap_or(current.release_year),
            players: self.players.unwrap_or(current.players),
            publisher: self.publisher.unwrap_or_else(|| current.publisher.clone()),
            expansions: self
                .expansions
                .unwrap_or_else(|| current.expansions.clone()),
            standalone: self.standalone.or(current.standalone),
            game_type: self.game_type.unwrap_or(current.game_type),
            base_game: self.base_game.unwrap_or(current.base_game),
        }
    }
}

/// Aggregate root of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    id: GameId,
    #[serde(flatten)]
    props: GameProps,
}

impl Game {
    /// Validate `props` and build a game.
    ///
    /// `id` is supplied when rehydrating from storage; otherwise a fresh
    /// process-unique id is generated.
    pub fn create(props: GameProps, id: Option<GameId>) -> Result<Self, EntityError> {
        validator::validate(&props)?;
        Ok(Self {
            id: id.unwrap_or_else(next_game_id),
            props,
        })
    }

    /// Merge `patch` into the current properties and revalidate.
    ///
    /// All-or-nothing: if the merged set violates an invariant the game is
    /// left exactly as it was.
    pub fn update(&mut self, patch: GamePatch) -> Result<(), EntityError> {
        let merged = patch.merge_into(&self.props);
        validator::validate(&merged)?;
        self.props = merged;
        Ok(())
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.props.name
    }

    pub fn release_year(&self) -> i32 {
        self.props.release_year
    }

    pub fn players(&self) -> Players {
        self.props.players
    }

    pub fn publisher(&self) -> &str {
        &self.props.publisher
    }

    pub fn expansions(&self) -> &[GameId] {
        &self.props.expansions
    }

    pub fn standalone(&self) -> Option<bool> {
        self.props.standalone
    }

    pub fn game_type(&self) -> GameType {
        self.props.game_type
    }

    pub fn base_game(&self) -> Option<GameId> {
        self.props.base_game
    }

    /// The complete property set, as persisted by storage adapters.
    pub fn props(&self) -> &GameProps {
        &self.props
    }
}
