use async_trait::async_trait;
use jokester_core::error::CoreError;
use jokester_core::submission::{ReviewDecision, SubmissionStatus};
use jokester_core::types::CardId;

use super::{review_failure, submission_failure, CardStore, StoreResult};
use crate::models::card::{CardStamp, NewCard, SavedCard};
use crate::repositories::CardRepo;
use crate::DbPool;

/// [`CardStore`] backed by the `sharing_cards` table.
#[derive(Clone)]
pub struct PgCardStore {
    pool: DbPool,
}

impl PgCardStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn create(&self, card: &NewCard) -> StoreResult<SavedCard> {
        Ok(CardRepo::create(&self.pool, card).await?)
    }

    async fn get(&self, id: CardId) -> StoreResult<Option<SavedCard>> {
        Ok(CardRepo::find_by_id(&self.pool, id).await?)
    }

    async fn increment_views(&self, id: CardId) -> StoreResult<i64> {
        CardRepo::increment_view_count(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::card_not_found(id).into())
    }

    async fn record_share(&self, id: CardId, shared_by: &str) -> StoreResult<SavedCard> {
        CardRepo::record_share(&self.pool, id, shared_by)
            .await?
            .ok_or_else(|| CoreError::card_not_found(id).into())
    }

    async fn submit_for_feature(
        &self,
        id: CardId,
        owner: &str,
        story: &str,
    ) -> StoreResult<SavedCard> {
        if let Some(card) = CardRepo::submit_for_feature(&self.pool, id, owner, story).await? {
            return Ok(card);
        }
        let current = CardRepo::find_by_id(&self.pool, id).await?;
        Err(submission_failure(current, id, owner))
    }

    async fn review(&self, id: CardId, decision: ReviewDecision) -> StoreResult<SavedCard> {
        let status = SubmissionStatus::from(decision);
        if let Some(card) = CardRepo::settle_submission(&self.pool, id, status).await? {
            return Ok(card);
        }
        let current = CardRepo::find_by_id(&self.pool, id).await?;
        Err(review_failure(current, id, decision))
    }

    async fn top_by_views(&self, limit: i64) -> StoreResult<Vec<SavedCard>> {
        Ok(CardRepo::list_top_by_views(&self.pool, limit).await?)
    }

    async fn list_by_owner(&self, owner: &str) -> StoreResult<Vec<SavedCard>> {
        Ok(CardRepo::list_by_owner(&self.pool, owner).await?)
    }

    async fn list_by_submission_status(
        &self,
        status: SubmissionStatus,
        limit: i64,
    ) -> StoreResult<Vec<SavedCard>> {
        Ok(CardRepo::list_by_submission_status(&self.pool, status, limit).await?)
    }

    async fn list_stamps(&self) -> StoreResult<Vec<CardStamp>> {
        Ok(CardRepo::list_stamps(&self.pool).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
