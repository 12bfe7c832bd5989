use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public pages, mounted at the root (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/card/{id}", get(public::card_page))
        .route("/leaderboard", get(public::leaderboard))
        .route("/sitemap.xml", get(public::sitemap_xml))
}
