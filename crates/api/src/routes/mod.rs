pub mod auth;
pub mod cards;
pub mod generate;
pub mod health;
pub mod personas;
pub mod public;
pub mod review;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/anonymous                  start anonymous session (POST)
/// /auth/reviewer                   exchange reviewer key (POST)
///
/// /personas                        list catalog (GET)
/// /personas/{id}                   get persona (GET)
/// /personas/{id}/counter           counter persona or null (GET)
///
/// /cards                           save card (POST, session)
/// /cards/draft                     fresh card (?counter=)
/// /cards/render                    render unsaved card (POST)
/// /cards/mine                      caller's cards (GET, session)
/// /cards/{id}                      get card (GET)
/// /cards/{id}/views                count a view (POST)
/// /cards/{id}/shares               record a share (POST)
/// /cards/{id}/submission           submit for feature (POST, owner)
///
/// /generate/wit                    satirical line (POST)
/// /generate/image                  satirized portrait (POST)
/// /generate/products               product suggestions (POST)
///
/// /review/submissions              submission queue (?status=&limit=, reviewer)
/// /review/cards/{id}               approve or reject (POST, reviewer)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/personas", personas::router())
        .nest("/cards", cards::router())
        .nest("/generate", generate::router())
        .nest("/review", review::router())
}
