//! Sharing card models and DTOs.
//!
//! A saved card is the editable [`CardData`] with its persona flattened to an
//! `(id, name)` snapshot, plus ownership, a creation timestamp and analytics
//! counters.

use jokester_core::card::{CardData, CardTheme};
use jokester_core::persona::{self, Persona};
use jokester_core::render::CardAnalytics;
use jokester_core::session::Session;
use jokester_core::submission::SubmissionStatus;
use jokester_core::types::{CardId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `sharing_cards` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCard {
    pub id: CardId,
    pub name: String,
    pub persona_id: String,
    pub persona_name: String,
    pub image_url: String,
    #[sqlx(try_from = "String")]
    pub theme: CardTheme,
    pub satirical_wit: String,
    pub bio: Option<String>,
    pub is_evolved: bool,
    pub custom_quote: Option<String>,
    pub user_profile_id: String,
    pub created_at: Timestamp,
    pub share_count: i64,
    pub engagement_score: i64,
    pub last_shared_by: String,
    pub view_count: i64,
    #[sqlx(try_from = "String")]
    pub submission_status: SubmissionStatus,
    pub inspirational_story: Option<String>,
}

impl SavedCard {
    /// The live catalog persona for this card. Unknown ids resolve to the
    /// first catalog entry; the stored `persona_name` is only a snapshot.
    pub fn persona(&self) -> &'static Persona {
        if persona::find(&self.persona_id).is_none() {
            tracing::warn!(
                card_id = %self.id,
                persona_id = %self.persona_id,
                "Unknown persona on saved card, falling back to default",
            );
        }
        persona::resolve(&self.persona_id)
    }

    /// Re-join the persona snapshot against the catalog.
    pub fn to_card_data(&self) -> CardData {
        CardData {
            name: self.name.clone(),
            persona: self.persona().clone(),
            image_url: self.image_url.clone(),
            theme: self.theme,
            satirical_wit: self.satirical_wit.clone(),
            bio: self.bio.clone(),
            is_evolved: self.is_evolved,
            custom_quote: self.custom_quote.clone(),
        }
    }

    pub fn analytics(&self) -> CardAnalytics {
        CardAnalytics {
            view_count: self.view_count,
            share_count: self.share_count,
            engagement_score: self.engagement_score,
            last_shared_by: self.last_shared_by.clone(),
        }
    }
}

/// Id and creation time of a card, for sitemap generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct CardStamp {
    pub id: CardId,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Insert payload for a new card. Counters, status and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCard {
    pub name: String,
    pub persona_id: String,
    pub persona_name: String,
    pub image_url: String,
    pub theme: CardTheme,
    pub satirical_wit: String,
    pub bio: Option<String>,
    pub is_evolved: bool,
    pub custom_quote: Option<String>,
    pub user_profile_id: String,
    pub last_shared_by: String,
}

impl NewCard {
    /// Flatten `card` for storage under `session`'s ownership. Only the
    /// persona's id and name survive; the rest is re-joined on read.
    pub fn from_card_data(card: CardData, session: &Session) -> Self {
        let CardData {
            name,
            persona,
            image_url,
            theme,
            satirical_wit,
            bio,
            is_evolved,
            custom_quote,
        } = card;

        Self {
            name,
            persona_id: persona.id,
            persona_name: persona.name,
            image_url,
            theme,
            satirical_wit,
            bio,
            is_evolved,
            custom_quote,
            user_profile_id: session.user_profile_id.clone(),
            last_shared_by: session.display_name_or_anonymous().to_string(),
        }
    }
}

/// Request body for a feature submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitForFeature {
    pub story: String,
}

/// Request body for recording a share event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordShare {
    pub shared_by: Option<String>,
}
