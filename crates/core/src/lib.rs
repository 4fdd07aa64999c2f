//! Catalog domain: the `Game` aggregate, its invariants, the repository
//! port, and one service per catalog use case.
//!
//! Nothing in this crate performs I/O. Storage adapters live in
//! `ludoteca-db`; the HTTP surface lives in `ludoteca-api`.

pub mod error;
pub mod game;
pub mod repository;
pub mod services;
pub mod types;

pub use error::{EntityError, ServiceError};
pub use game::{Game, GamePatch, GameProps, GameType, Players};
pub use repository::{GameRepository, RepositoryError};
pub use types::GameId;

#[cfg(test)]
pub(crate) mod test_fixtures;
