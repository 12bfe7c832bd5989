//! Leaderboard query: the most viewed saved cards.

use crate::models::card::SavedCard;
use crate::store::{CardStore, StoreResult};

/// Cards shown when the caller does not ask for a size.
pub const DEFAULT_LIMIT: i64 = 5;

/// Largest leaderboard a caller may request.
pub const MAX_LIMIT: i64 = 50;

/// Clamp a requested leaderboard size into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Top cards by descending `view_count`. Ties go to the older card, then
/// the lower id. An empty store yields an empty list.
pub async fn get_top_cards(store: &dyn CardStore, limit: Option<i64>) -> StoreResult<Vec<SavedCard>> {
    store.top_by_views(clamp_limit(limit)).await
}
