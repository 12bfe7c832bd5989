//! Persistence gateway: the write and read operations the service performs
//! on saved cards.
//!
//! Write operations take the caller's [`Session`] explicitly; a missing
//! session fails with `AuthRequired` before the store is touched. Each
//! operation reaches the store exactly once (plus a re-read where the store
//! needs to explain a failed conditional update). Nothing is retried.

use std::sync::Arc;

use jokester_core::card::CardData;
use jokester_core::error::CoreError;
use jokester_core::persona::{self, Persona};
use jokester_core::session::{Session, ANONYMOUS_NAME};
use jokester_core::submission::{self, ReviewDecision, SubmissionStatus};
use jokester_core::types::CardId;

use crate::leaderboard;
use crate::models::card::{CardStamp, NewCard, SavedCard};
use crate::store::{CardStore, StoreResult};

/// Default page size for submission review queues.
pub const DEFAULT_SUBMISSION_PAGE: i64 = 50;

#[derive(Clone)]
pub struct PersistenceGateway {
    store: Arc<dyn CardStore>,
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn CardStore {
        self.store.as_ref()
    }

    /// Save a finalized card as a new document owned by the caller.
    ///
    /// There is no idempotency key: saving the same card twice creates two
    /// documents. The persona must exist in the catalog; the stored snapshot
    /// is taken from the catalog entry, never from the client's copy.
    pub async fn save_card(
        &self,
        session: Option<&Session>,
        card: CardData,
    ) -> StoreResult<SavedCard> {
        let session = require_session(session, "You must be logged in to save a card.")?;
        let mut card = card.normalized()?;
        card.persona = catalog_persona(&card.persona.id)?.clone();
        let new_card = NewCard::from_card_data(card, session);

        let saved = self.store.create(&new_card).await?;
        tracing::info!(
            card_id = %saved.id,
            persona_id = %saved.persona_id,
            user_profile_id = %saved.user_profile_id,
            "Sharing card saved",
        );
        Ok(saved)
    }

    /// Fetch a card by id. A missing card is an error.
    pub async fn get_card(&self, id: CardId) -> StoreResult<SavedCard> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CoreError::card_not_found(id).into())
    }

    /// Atomically add one view. Returns the new count.
    pub async fn increment_view_count(&self, id: CardId) -> StoreResult<i64> {
        let views = self.store.increment_views(id).await?;
        tracing::debug!(card_id = %id, views, "View recorded");
        Ok(views)
    }

    /// Record a share event. `shared_by` defaults to `"Anonymous"`.
    pub async fn record_share(&self, id: CardId, shared_by: Option<&str>) -> StoreResult<SavedCard> {
        let shared_by = shared_by
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(ANONYMOUS_NAME);
        let card = self.store.record_share(id, shared_by).await?;
        tracing::info!(card_id = %id, shares = card.share_count, "Share recorded");
        Ok(card)
    }

    /// Submit a card for the feature review. Ownership is enforced by the
    /// store's access rules, not here.
    pub async fn submit_card_for_feature(
        &self,
        session: Option<&Session>,
        id: CardId,
        story: &str,
    ) -> StoreResult<SavedCard> {
        let session = require_session(session, "You must be logged in to submit a card.")?;
        submission::validate_story(story)?;

        let card = self
            .store
            .submit_for_feature(id, &session.user_profile_id, story)
            .await?;
        tracing::info!(card_id = %id, "Card submitted for feature review");
        Ok(card)
    }

    /// Settle a pending submission.
    pub async fn review_submission(
        &self,
        id: CardId,
        decision: ReviewDecision,
    ) -> StoreResult<SavedCard> {
        let card = self.store.review(id, decision).await?;
        tracing::info!(card_id = %id, status = %card.submission_status, "Submission reviewed");
        Ok(card)
    }

    /// The caller's own cards, newest first.
    pub async fn list_cards_by_owner(&self, session: Option<&Session>) -> StoreResult<Vec<SavedCard>> {
        let session = require_session(session, "You must be logged in to list your cards.")?;
        self.store.list_by_owner(&session.user_profile_id).await
    }

    pub async fn list_submissions(
        &self,
        status: SubmissionStatus,
        limit: Option<i64>,
    ) -> StoreResult<Vec<SavedCard>> {
        let limit = limit.unwrap_or(DEFAULT_SUBMISSION_PAGE).clamp(1, 200);
        self.store.list_by_submission_status(status, limit).await
    }

    /// Leaderboard query; see [`leaderboard::get_top_cards`].
    pub async fn top_cards(&self, limit: Option<i64>) -> StoreResult<Vec<SavedCard>> {
        leaderboard::get_top_cards(self.store.as_ref(), limit).await
    }

    pub async fn card_stamps(&self) -> StoreResult<Vec<CardStamp>> {
        self.store.list_stamps().await
    }
}

fn require_session<'a>(session: Option<&'a Session>, message: &str) -> Result<&'a Session, CoreError> {
    session.ok_or_else(|| CoreError::AuthRequired(message.to_string()))
}

fn catalog_persona(id: &str) -> Result<&'static Persona, CoreError> {
    persona::find(id).ok_or_else(|| CoreError::Validation(format!("Unknown persona '{id}'")))
}
