use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Session routes mounted at `/auth`.
///
/// ```text
/// POST /anonymous  -> anonymous_session
/// POST /reviewer   -> reviewer_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/anonymous", post(auth::anonymous_session))
        .route("/reviewer", post(auth::reviewer_session))
}
