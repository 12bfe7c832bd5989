//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- caller from a JWT Bearer token; rejects without one.
//! - [`auth::MaybeAuthUser`] -- same, but a missing header yields `None`.
//! - [`rbac::RequireReviewer`] -- requires the `reviewer` role.

pub mod auth;
pub mod rbac;
