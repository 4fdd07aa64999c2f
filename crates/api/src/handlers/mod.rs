//! Request handlers.
//!
//! Handlers validate the request into a use case input, run the matching
//! service from `ludoteca_core::services`, and map failures via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod fallback;
pub mod game;
pub mod health;
