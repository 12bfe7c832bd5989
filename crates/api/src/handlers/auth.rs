//! Handlers for the `/auth` resource (anonymous and reviewer sessions).

use axum::extract::State;
use axum::Json;
use jokester_core::error::CoreError;
use jokester_core::roles::{ROLE_REVIEWER, ROLE_USER};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Longest display name accepted on an anonymous session.
const MAX_DISPLAY_NAME_LEN: usize = 50;

/// Subject of every reviewer token.
const REVIEWER_SUBJECT: &str = "reviewer";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/anonymous`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousSessionRequest {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Request body for `POST /auth/reviewer`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerSessionRequest {
    pub access_key: String,
}

/// Issued session token.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub profile_id: String,
    pub role: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/anonymous
///
/// Start an anonymous session. Every call mints a new profile id.
pub async fn anonymous_session(
    State(state): State<AppState>,
    Json(input): Json<AnonymousSessionRequest>,
) -> AppResult<Json<SessionResponse>> {
    let display_name = input
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());
    if display_name.is_some_and(|n| n.chars().count() > MAX_DISPLAY_NAME_LEN) {
        return Err(AppError::BadRequest(format!(
            "Display name must be at most {MAX_DISPLAY_NAME_LEN} characters"
        )));
    }

    let profile_id = Uuid::new_v4().to_string();
    let response = issue(&state, profile_id, ROLE_USER, display_name)?;

    tracing::info!(profile_id = %response.profile_id, "Anonymous session started");
    Ok(Json(response))
}

/// POST /api/v1/auth/reviewer
///
/// Exchange the shared reviewer access key for a reviewer token.
pub async fn reviewer_session(
    State(state): State<AppState>,
    Json(input): Json<ReviewerSessionRequest>,
) -> AppResult<Json<SessionResponse>> {
    let Some(expected) = state.config.reviewer_access_key.as_deref() else {
        return Err(AppError::Core(CoreError::Forbidden(
            "Reviewer access is disabled".into(),
        )));
    };

    let given = input.access_key.as_bytes();
    let expected = expected.as_bytes();
    if given.len() != expected.len() || given.ct_eq(expected).unwrap_u8() != 1 {
        tracing::warn!("Rejected reviewer login with a wrong access key");
        return Err(AppError::Core(CoreError::AuthRequired(
            "Invalid reviewer access key".into(),
        )));
    }

    let response = issue(&state, REVIEWER_SUBJECT.to_string(), ROLE_REVIEWER, None)?;
    tracing::info!("Reviewer session started");
    Ok(Json(response))
}

fn issue(
    state: &AppState,
    profile_id: String,
    role: &'static str,
    display_name: Option<&str>,
) -> AppResult<SessionResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(&profile_id, role, display_name, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    Ok(SessionResponse {
        access_token,
        token_type: "Bearer",
        expires_in: jwt.access_token_expiry_mins * 60,
        profile_id,
        role,
    })
}
