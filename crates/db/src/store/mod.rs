//! Card document store abstraction.
//!
//! [`CardStore`] is the seam between the persistence gateway and the
//! backing database. Two backends exist:
//!
//! - [`PgCardStore`] -- PostgreSQL via [`CardRepo`](crate::repositories::CardRepo).
//! - [`MemoryCardStore`] -- process-local, for development and tests.
//!
//! Access rules live here rather than in the gateway: a feature submission
//! is rejected with `Forbidden` by the store when the caller does not own
//! the card.

mod memory;
mod postgres;

use async_trait::async_trait;
use jokester_core::error::CoreError;
use jokester_core::submission::{ReviewDecision, SubmissionStatus};
use jokester_core::types::CardId;

use crate::models::card::{CardStamp, NewCard, SavedCard};

pub use memory::MemoryCardStore;
pub use postgres::PgCardStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level failure (not found, forbidden, conflict, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait CardStore: Send + Sync {
    /// Create a document. Every call creates a new document.
    async fn create(&self, card: &NewCard) -> StoreResult<SavedCard>;

    async fn get(&self, id: CardId) -> StoreResult<Option<SavedCard>>;

    /// Atomically add one view and return the new count. Fails with
    /// `NotFound` when the card does not exist.
    async fn increment_views(&self, id: CardId) -> StoreResult<i64>;

    /// Atomically record a share. Fails with `NotFound` when absent.
    async fn record_share(&self, id: CardId, shared_by: &str) -> StoreResult<SavedCard>;

    /// `none -> pending` for the card's owner. `NotFound`, `Forbidden` for a
    /// non-owner, `Conflict` for any other status.
    async fn submit_for_feature(
        &self,
        id: CardId,
        owner: &str,
        story: &str,
    ) -> StoreResult<SavedCard>;

    /// `pending -> approved | rejected`. `NotFound` or `Conflict` otherwise.
    async fn review(&self, id: CardId, decision: ReviewDecision) -> StoreResult<SavedCard>;

    /// Up to `limit` cards by descending views. Ties go to the older card,
    /// then the lower id.
    async fn top_by_views(&self, limit: i64) -> StoreResult<Vec<SavedCard>>;

    /// Cards owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: &str) -> StoreResult<Vec<SavedCard>>;

    /// Up to `limit` cards in `status`, oldest first.
    async fn list_by_submission_status(
        &self,
        status: SubmissionStatus,
        limit: i64,
    ) -> StoreResult<Vec<SavedCard>>;

    async fn list_stamps(&self) -> StoreResult<Vec<CardStamp>>;

    async fn health_check(&self) -> StoreResult<()>;
}

/// Explain why a conditional submission update matched nothing.
fn submission_failure(card: Option<SavedCard>, id: CardId, owner: &str) -> StoreError {
    match card {
        None => CoreError::card_not_found(id).into(),
        Some(card) if card.user_profile_id != owner => {
            CoreError::Forbidden("Only the card's owner can submit it".into()).into()
        }
        Some(card) => match card.submission_status.submit() {
            Err(e) => e.into(),
            Ok(_) => CoreError::Internal(format!("Submission update for card {id} matched nothing"))
                .into(),
        },
    }
}

/// Explain why a conditional review update matched nothing.
fn review_failure(card: Option<SavedCard>, id: CardId, decision: ReviewDecision) -> StoreError {
    match card {
        None => CoreError::card_not_found(id).into(),
        Some(card) => match card.submission_status.review(decision) {
            Err(e) => e.into(),
            Ok(_) => CoreError::Internal(format!("Review update for card {id} matched nothing"))
                .into(),
        },
    }
}
