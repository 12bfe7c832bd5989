//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jokester_core::error::CoreError;
use jokester_core::session::Session;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Profile id from `claims.sub`; the owner id on saved cards.
    pub profile_id: String,
    /// Role name (`"user"` or `"reviewer"`).
    pub role: String,
    pub display_name: Option<String>,
}

impl AuthUser {
    /// The per-request session handed to the persistence gateway.
    pub fn session(&self) -> Session {
        Session::new(self.profile_id.clone(), self.display_name.clone())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state)?.ok_or_else(|| {
            AppError::Core(CoreError::AuthRequired(
                "Missing Authorization header".into(),
            ))
        })
    }
}

/// Optional caller. A missing `Authorization` header yields `None`; a
/// present but invalid token is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn session(&self) -> Option<Session> {
        self.0.as_ref().map(AuthUser::session)
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(authenticate(parts, state)?))
    }
}

fn authenticate(parts: &Parts, state: &AppState) -> AppResult<Option<AuthUser>> {
    let Some(auth_header) = parts.headers.get("authorization") else {
        return Ok(None);
    };

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Core(CoreError::AuthRequired(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

    let claims = validate_token(token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::AuthRequired("Invalid or expired token".into()))
    })?;

    Ok(Some(AuthUser {
        profile_id: claims.sub,
        role: claims.role,
        display_name: claims.name,
    }))
}
