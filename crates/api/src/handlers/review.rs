//! Reviewer-only handlers for the feature submission queue.

use axum::extract::{Path, Query, State};
use axum::Json;
use jokester_core::submission::{ReviewDecision, SubmissionStatus};
use jokester_core::types::CardId;
use jokester_db::models::card::SavedCard;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireReviewer;
use crate::query::SubmissionQueueParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /review/cards/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub decision: ReviewDecision,
}

/// GET /api/v1/review/submissions?status=&limit=
///
/// Cards in a submission state, oldest first. Defaults to `pending`.
pub async fn list_submissions(
    RequireReviewer(_reviewer): RequireReviewer,
    State(state): State<AppState>,
    Query(params): Query<SubmissionQueueParams>,
) -> AppResult<Json<DataResponse<Vec<SavedCard>>>> {
    let status = params.status.unwrap_or(SubmissionStatus::Pending);
    let cards = state.gateway.list_submissions(status, params.limit).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// POST /api/v1/review/cards/{id}
///
/// Approve or reject a pending submission.
pub async fn review_card(
    RequireReviewer(reviewer): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<CardId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<Json<DataResponse<SavedCard>>> {
    let card = state.gateway.review_submission(id, input.decision).await?;
    tracing::info!(
        card_id = %id,
        reviewer = %reviewer.profile_id,
        decision = %card.submission_status,
        "Submission settled",
    );
    Ok(Json(DataResponse { data: card }))
}
