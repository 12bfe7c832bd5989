//! Route definitions for sharing cards.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cards;
use crate::state::AppState;

/// Card routes mounted at `/cards`.
///
/// ```text
/// POST /                 -> save_card
/// GET  /draft            -> draft_card
/// POST /render           -> render_card
/// GET  /mine             -> list_my_cards
/// GET  /{id}             -> get_card
/// POST /{id}/views       -> record_view
/// POST /{id}/shares      -> record_share
/// POST /{id}/submission  -> submit_for_feature
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(cards::save_card))
        .route("/draft", get(cards::draft_card))
        .route("/render", post(cards::render_card))
        .route("/mine", get(cards::list_my_cards))
        .route("/{id}", get(cards::get_card))
        .route("/{id}/views", post(cards::record_view))
        .route("/{id}/shares", post(cards::record_share))
        .route("/{id}/submission", post(cards::submit_for_feature))
}
