//! Implementations of [`ludoteca_core::GameRepository`].

pub mod game_repo;
pub mod memory;

pub use game_repo::PgGameRepository;
pub use memory::InMemoryGameRepository;
