//! One stateless service per catalog use case.
//!
//! Every `execute` returns `Result<_, ServiceError>`: entity and repository
//! failures are folded into a [`ServiceError`] carrying the use-case context,
//! and the expected "not found" / "missing id" outcomes are bare service
//! errors with no cause.

mod add_game;
mod delete_game;
mod get_all_games;
mod get_game_by_id;
mod update_game;

use std::error::Error as StdError;

pub use add_game::{AddGameInput, AddGameService};
pub use delete_game::{DeleteGameInput, DeleteGameService};
pub use get_all_games::GetAllGamesService;
pub use get_game_by_id::{GetGameByIdInput, GetGameByIdService};
pub use update_game::{UpdateGameInput, UpdateGameService};

use crate::error::ServiceError;

pub(crate) const GAME_NOT_FOUND: &str = "Game not found";

/// Wrap a failure under `context`, logging it on the way out.
fn fail<E>(context: &'static str, err: E) -> ServiceError
where
    E: StdError + Send + Sync + 'static,
{
    tracing::warn!(error = %err, context, "Game service failure");
    ServiceError::wrap(context, err)
}
