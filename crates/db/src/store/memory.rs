use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use jokester_core::error::CoreError;
use jokester_core::submission::{ReviewDecision, SubmissionStatus};
use jokester_core::types::CardId;
use tokio::sync::RwLock;

use super::{CardStore, StoreResult};
use crate::models::card::{CardStamp, NewCard, SavedCard};

/// Process-local [`CardStore`]. Every mutation happens under one write lock,
/// which makes counter updates atomic. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryCardStore {
    cards: RwLock<HashMap<CardId, SavedCard>>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.cards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cards.read().await.is_empty()
    }
}

fn rank(cards: &mut [SavedCard]) {
    cards.sort_by_key(|c| (Reverse(c.view_count), c.created_at, c.id));
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn create(&self, card: &NewCard) -> StoreResult<SavedCard> {
        let saved = SavedCard {
            id: uuid::Uuid::now_v7(),
            name: card.name.clone(),
            persona_id: card.persona_id.clone(),
            persona_name: card.persona_name.clone(),
            image_url: card.image_url.clone(),
            theme: card.theme,
            satirical_wit: card.satirical_wit.clone(),
            bio: card.bio.clone(),
            is_evolved: card.is_evolved,
            custom_quote: card.custom_quote.clone(),
            user_profile_id: card.user_profile_id.clone(),
            created_at: chrono::Utc::now(),
            share_count: 0,
            engagement_score: 0,
            last_shared_by: card.last_shared_by.clone(),
            view_count: 0,
            submission_status: SubmissionStatus::None,
            inspirational_story: None,
        };
        self.cards.write().await.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn get(&self, id: CardId) -> StoreResult<Option<SavedCard>> {
        Ok(self.cards.read().await.get(&id).cloned())
    }

    async fn increment_views(&self, id: CardId) -> StoreResult<i64> {
        let mut cards = self.cards.write().await;
        let card = cards.get_mut(&id).ok_or_else(|| CoreError::card_not_found(id))?;
        card.view_count += 1;
        Ok(card.view_count)
    }

    async fn record_share(&self, id: CardId, shared_by: &str) -> StoreResult<SavedCard> {
        let mut cards = self.cards.write().await;
        let card = cards.get_mut(&id).ok_or_else(|| CoreError::card_not_found(id))?;
        card.share_count += 1;
        card.engagement_score += 1;
        card.last_shared_by = shared_by.to_string();
        Ok(card.clone())
    }

    async fn submit_for_feature(
        &self,
        id: CardId,
        owner: &str,
        story: &str,
    ) -> StoreResult<SavedCard> {
        let mut cards = self.cards.write().await;
        let card = cards.get_mut(&id).ok_or_else(|| CoreError::card_not_found(id))?;
        if card.user_profile_id != owner {
            return Err(CoreError::Forbidden("Only the card's owner can submit it".into()).into());
        }
        card.submission_status = card.submission_status.submit()?;
        card.inspirational_story = Some(story.to_string());
        Ok(card.clone())
    }

    async fn review(&self, id: CardId, decision: ReviewDecision) -> StoreResult<SavedCard> {
        let mut cards = self.cards.write().await;
        let card = cards.get_mut(&id).ok_or_else(|| CoreError::card_not_found(id))?;
        card.submission_status = card.submission_status.review(decision)?;
        Ok(card.clone())
    }

    async fn top_by_views(&self, limit: i64) -> StoreResult<Vec<SavedCard>> {
        let mut all: Vec<SavedCard> = self.cards.read().await.values().cloned().collect();
        rank(&mut all);
        all.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(all)
    }

    async fn list_by_owner(&self, owner: &str) -> StoreResult<Vec<SavedCard>> {
        let mut mine: Vec<SavedCard> = self
            .cards
            .read()
            .await
            .values()
            .filter(|c| c.user_profile_id == owner)
            .cloned()
            .collect();
        mine.sort_by_key(|c| Reverse((c.created_at, c.id)));
        Ok(mine)
    }

    async fn list_by_submission_status(
        &self,
        status: SubmissionStatus,
        limit: i64,
    ) -> StoreResult<Vec<SavedCard>> {
        let mut matching: Vec<SavedCard> = self
            .cards
            .read()
            .await
            .values()
            .filter(|c| c.submission_status == status)
            .cloned()
            .collect();
        matching.sort_by_key(|c| (c.created_at, c.id));
        matching.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(matching)
    }

    async fn list_stamps(&self) -> StoreResult<Vec<CardStamp>> {
        let mut stamps: Vec<CardStamp> = self
            .cards
            .read()
            .await
            .values()
            .map(|c| CardStamp {
                id: c.id,
                created_at: c.created_at,
            })
            .collect();
        stamps.sort_by_key(|s| (s.created_at, s.id));
        Ok(stamps)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
