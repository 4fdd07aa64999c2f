//! Property sets shared by the unit tests in this crate.

use crate::game::{GameProps, GameType, Players};

pub(crate) fn catan() -> GameProps {
    GameProps {
        name: "Catan".into(),
        release_year: 1995,
        players: Players::new(3, 4),
        publisher: "Kosmos".into(),
        expansions: vec![],
        standalone: Some(true),
        game_type: GameType::BaseGame,
        base_game: None,
    }
}

pub(crate) fn seafarers() -> GameProps {
    GameProps {
        name: "Catan: Seafarers".into(),
        release_year: 1997,
        players: Players::new(3, 4),
        publisher: "Kosmos".into(),
        expansions: vec![],
        standalone: Some(false),
        game_type: GameType::Expansion,
        base_game: Some(123),
    }
}
