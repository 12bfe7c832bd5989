use axum::routing::get;
use axum::Router;

use crate::handlers::personas;
use crate::state::AppState;

/// Persona catalog routes mounted at `/personas`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(personas::list_personas))
        .route("/{id}", get(personas::get_persona))
        .route("/{id}/counter", get(personas::get_counter_persona))
}
