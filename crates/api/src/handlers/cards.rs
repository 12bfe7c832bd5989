//! Handlers for the `/cards` resource.
//!
//! Drafting and rendering are pure and need no session. Saving, listing
//! one's own cards and feature submission go through the persistence
//! gateway with the caller's session.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jokester_core::card::CardData;
use jokester_core::persona::{self, Persona};
use jokester_core::render::{self, CardLayout};
use jokester_core::types::CardId;
use jokester_db::models::card::{RecordShare, SavedCard, SubmitForFeature};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::CounterParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A saved card joined with its live persona and rendered layout.
#[derive(Debug, Serialize)]
pub struct CardView {
    pub card: SavedCard,
    pub persona: Persona,
    pub layout: CardLayout,
}

impl CardView {
    pub fn new(card: SavedCard) -> Self {
        let data = card.to_card_data();
        let layout = render::render_card(&data, Some(&card.analytics()));
        Self {
            persona: data.persona,
            layout,
            card,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCardResponse {
    pub doc_id: CardId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewCountResponse {
    pub view_count: i64,
}

// ---------------------------------------------------------------------------
// Unsaved cards
// ---------------------------------------------------------------------------

/// GET /api/v1/cards/draft?counter=
///
/// A fresh card. With `counter`, the persona is that persona's counter when
/// it has one, otherwise a random different persona.
pub async fn draft_card(Query(params): Query<CounterParams>) -> Json<DataResponse<CardData>> {
    let chosen = persona::pick_default(params.counter.as_deref(), &mut rand::rng());
    Json(DataResponse {
        data: CardData::draft(chosen.clone()),
    })
}

/// POST /api/v1/cards/render
///
/// Lay out an unsaved card. No analytics bar.
pub async fn render_card(Json(card): Json<CardData>) -> Json<DataResponse<CardLayout>> {
    Json(DataResponse {
        data: render::render_card(&card, None),
    })
}

// ---------------------------------------------------------------------------
// Saved cards
// ---------------------------------------------------------------------------

/// POST /api/v1/cards
///
/// Save a card under the caller's session. Every call creates a new card.
pub async fn save_card(
    State(state): State<AppState>,
    user: MaybeAuthUser,
    Json(card): Json<CardData>,
) -> AppResult<impl IntoResponse> {
    let session = user.session();
    let saved = state.gateway.save_card(session.as_ref(), card).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SaveCardResponse { doc_id: saved.id },
        }),
    ))
}

/// GET /api/v1/cards/mine
pub async fn list_my_cards(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<SavedCard>>>> {
    let cards = state
        .gateway
        .list_cards_by_owner(Some(&user.session()))
        .await?;
    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/cards/{id}
///
/// Read a card without counting a view.
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<CardId>,
) -> AppResult<Json<DataResponse<CardView>>> {
    let card = state.gateway.get_card(id).await?;
    Ok(Json(DataResponse {
        data: CardView::new(card),
    }))
}

/// POST /api/v1/cards/{id}/views
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<CardId>,
) -> AppResult<Json<DataResponse<ViewCountResponse>>> {
    let view_count = state.gateway.increment_view_count(id).await?;
    Ok(Json(DataResponse {
        data: ViewCountResponse { view_count },
    }))
}

/// POST /api/v1/cards/{id}/shares
///
/// The body is optional; without one the share is credited to "Anonymous".
pub async fn record_share(
    State(state): State<AppState>,
    Path(id): Path<CardId>,
    input: Option<Json<RecordShare>>,
) -> AppResult<Json<DataResponse<SavedCard>>> {
    let shared_by = input.and_then(|Json(share)| share.shared_by);
    let card = state
        .gateway
        .record_share(id, shared_by.as_deref())
        .await?;
    Ok(Json(DataResponse { data: card }))
}

/// POST /api/v1/cards/{id}/submission
///
/// Submit the caller's card for the feature review.
pub async fn submit_for_feature(
    State(state): State<AppState>,
    user: MaybeAuthUser,
    Path(id): Path<CardId>,
    Json(input): Json<SubmitForFeature>,
) -> AppResult<Json<DataResponse<SavedCard>>> {
    let session = user.session();
    let card = state
        .gateway
        .submit_card_for_feature(session.as_ref(), id, &input.story)
        .await?;
    Ok(Json(DataResponse { data: card }))
}
