/// Game identifiers are positive integers, stored as BIGINT.
pub type GameId = i64;
