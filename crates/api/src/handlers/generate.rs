//! Handlers for the generative adapters.
//!
//! Each request makes exactly one model call. Failures surface as
//! `GENERATION_FAILED` (502) or, for refused portraits,
//! `MODERATION_REJECTED` (422).

use axum::extract::State;
use axum::Json;
use jokester_genai::{
    ImageRequest, ImageResponse, ProductRequest, ProductsResponse, WitRequest, WitResponse,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/generate/wit
pub async fn generate_wit(
    State(state): State<AppState>,
    Json(input): Json<WitRequest>,
) -> AppResult<Json<DataResponse<WitResponse>>> {
    if input.name.trim().is_empty() || input.title.trim().is_empty() {
        return Err(AppError::BadRequest("Name and title are required".into()));
    }
    let wit = state.generator.generate_wit(&input).await?;
    Ok(Json(DataResponse { data: wit }))
}

/// POST /api/v1/generate/image
pub async fn satirize_image(
    State(state): State<AppState>,
    Json(input): Json<ImageRequest>,
) -> AppResult<Json<DataResponse<ImageResponse>>> {
    let image = state.generator.satirize_image(&input).await?;
    Ok(Json(DataResponse { data: image }))
}

/// POST /api/v1/generate/products
pub async fn suggest_products(
    State(state): State<AppState>,
    Json(input): Json<ProductRequest>,
) -> AppResult<Json<DataResponse<ProductsResponse>>> {
    let products = state.generator.suggest_products(&input).await?;
    Ok(Json(DataResponse { data: products }))
}
