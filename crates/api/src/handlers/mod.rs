//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the persistence gateway or the card generator and
//! map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod cards;
pub mod generate;
pub mod personas;
pub mod public;
pub mod review;
