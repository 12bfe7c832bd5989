use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Reviewer routes mounted at `/review`.
///
/// ```text
/// GET  /submissions  -> list_submissions
/// POST /cards/{id}   -> review_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(review::list_submissions))
        .route("/cards/{id}", post(review::review_card))
}
