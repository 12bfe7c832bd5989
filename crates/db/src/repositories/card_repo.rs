//! Repository for the `sharing_cards` table.
//!
//! Counter updates are single `UPDATE ... SET x = x + 1` statements so
//! concurrent viewers never lose increments.

use jokester_core::submission::SubmissionStatus;
use jokester_core::types::CardId;
use sqlx::PgPool;

use crate::models::card::{CardStamp, NewCard, SavedCard};

/// Column list for `sharing_cards` queries.
const COLUMNS: &str = "\
    id, name, persona_id, persona_name, image_url, theme, satirical_wit, \
    bio, is_evolved, custom_quote, user_profile_id, created_at, share_count, \
    engagement_score, last_shared_by, view_count, submission_status, \
    inspirational_story";

/// Leaderboard ordering. Ties on views go to the older card, then the id.
const RANK_ORDER: &str = "view_count DESC, created_at ASC, id ASC";

/// Provides data access for saved sharing cards.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new card. Counters start at zero and `created_at` is the
    /// database clock.
    pub async fn create(pool: &PgPool, dto: &NewCard) -> Result<SavedCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO sharing_cards \
                 (name, persona_id, persona_name, image_url, theme, satirical_wit, \
                  bio, is_evolved, custom_quote, user_profile_id, last_shared_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(&dto.name)
            .bind(&dto.persona_id)
            .bind(&dto.persona_name)
            .bind(&dto.image_url)
            .bind(dto.theme.as_str())
            .bind(&dto.satirical_wit)
            .bind(&dto.bio)
            .bind(dto.is_evolved)
            .bind(&dto.custom_quote)
            .bind(&dto.user_profile_id)
            .bind(&dto.last_shared_by)
            .fetch_one(pool)
            .await
    }

    /// Find a card by id.
    pub async fn find_by_id(pool: &PgPool, id: CardId) -> Result<Option<SavedCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sharing_cards WHERE id = $1");
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically add one view. Returns the new count, or `None` if the card
    /// does not exist.
    pub async fn increment_view_count(
        pool: &PgPool,
        id: CardId,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE sharing_cards SET view_count = view_count + 1 \
             WHERE id = $1 RETURNING view_count",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Atomically record a share: bumps `share_count` and `engagement_score`
    /// and overwrites `last_shared_by`.
    pub async fn record_share(
        pool: &PgPool,
        id: CardId,
        shared_by: &str,
    ) -> Result<Option<SavedCard>, sqlx::Error> {
        let query = format!(
            "UPDATE sharing_cards SET \
                 share_count = share_count + 1, \
                 engagement_score = engagement_score + 1, \
                 last_shared_by = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(id)
            .bind(shared_by)
            .fetch_optional(pool)
            .await
    }

    /// Move an owner's card from `none` to `pending` and store the story.
    ///
    /// Returns `None` when no row matched (missing card, other owner, or a
    /// status other than `none`); callers re-read the row to tell which.
    pub async fn submit_for_feature(
        pool: &PgPool,
        id: CardId,
        owner: &str,
        story: &str,
    ) -> Result<Option<SavedCard>, sqlx::Error> {
        let query = format!(
            "UPDATE sharing_cards SET \
                 submission_status = 'pending', \
                 inspirational_story = $3 \
             WHERE id = $1 AND user_profile_id = $2 AND submission_status = 'none' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(id)
            .bind(owner)
            .bind(story)
            .fetch_optional(pool)
            .await
    }

    /// Settle a pending submission. Returns `None` when the card is missing
    /// or not pending.
    pub async fn settle_submission(
        pool: &PgPool,
        id: CardId,
        status: SubmissionStatus,
    ) -> Result<Option<SavedCard>, sqlx::Error> {
        let query = format!(
            "UPDATE sharing_cards SET submission_status = $2 \
             WHERE id = $1 AND submission_status = 'pending' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// The `limit` most viewed cards.
    pub async fn list_top_by_views(pool: &PgPool, limit: i64) -> Result<Vec<SavedCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sharing_cards ORDER BY {RANK_ORDER} LIMIT $1");
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All cards saved by `owner`, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner: &str) -> Result<Vec<SavedCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sharing_cards \
             WHERE user_profile_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(owner)
            .fetch_all(pool)
            .await
    }

    /// Cards in a given submission state, oldest first.
    pub async fn list_by_submission_status(
        pool: &PgPool,
        status: SubmissionStatus,
        limit: i64,
    ) -> Result<Vec<SavedCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sharing_cards \
             WHERE submission_status = $1 \
             ORDER BY created_at ASC, id ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, SavedCard>(&query)
            .bind(status.as_str())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Id and creation time of every card.
    pub async fn list_stamps(pool: &PgPool) -> Result<Vec<CardStamp>, sqlx::Error> {
        sqlx::query_as::<_, CardStamp>(
            "SELECT id, created_at FROM sharing_cards ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
