//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jokester_core::error::CoreError;
use jokester_core::roles::ROLE_REVIEWER;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `reviewer` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn review_only(RequireReviewer(user): RequireReviewer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireReviewer(pub AuthUser);

impl FromRequestParts<AppState> for RequireReviewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_REVIEWER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Reviewer role required".into(),
            )));
        }
        Ok(RequireReviewer(user))
    }
}
