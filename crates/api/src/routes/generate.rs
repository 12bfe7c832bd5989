use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Generative adapter routes mounted at `/generate`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/wit", post(generate::generate_wit))
        .route("/image", post(generate::satirize_image))
        .route("/products", post(generate::suggest_products))
}
