//! Root-level public pages: the shared card page, the leaderboard and the
//! sitemap.

use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use jokester_core::sitemap;
use jokester_core::types::CardId;
use jokester_db::leaderboard;
use jokester_db::models::card::SavedCard;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::cards::CardView;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// One leaderboard row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub card: SavedCard,
}

#[derive(Debug, Serialize)]
pub struct Leaderboard {
    pub limit: i64,
    pub entries: Vec<LeaderboardEntry>,
}

/// GET /card/{id}
///
/// Public card page. Counts one view, then renders the card with the
/// updated analytics.
pub async fn card_page(
    State(state): State<AppState>,
    Path(id): Path<CardId>,
) -> AppResult<Json<DataResponse<CardView>>> {
    let mut card = state.gateway.get_card(id).await?;
    card.view_count = state.gateway.increment_view_count(id).await?;

    Ok(Json(DataResponse {
        data: CardView::new(card),
    }))
}

/// GET /leaderboard?limit=
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Leaderboard>>> {
    let limit = leaderboard::clamp_limit(params.limit);
    let cards = state.gateway.top_cards(Some(limit)).await?;

    let entries = cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| LeaderboardEntry { rank: i + 1, card })
        .collect();

    Ok(Json(DataResponse {
        data: Leaderboard { limit, entries },
    }))
}

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stamps: Vec<(CardId, _)> = state
        .gateway
        .card_stamps()
        .await?
        .into_iter()
        .map(|s| (s.id, s.created_at))
        .collect();

    let entries = sitemap::entries(&state.config.public_base_url, chrono::Utc::now(), &stamps);
    let xml = sitemap::to_xml(&entries)?;
    tracing::debug!(urls = entries.len(), "Sitemap generated");

    Ok((
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    ))
}
