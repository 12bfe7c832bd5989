//! Shared query parameter types for API handlers.

use jokester_core::submission::SubmissionStatus;
use serde::Deserialize;

/// `?limit=`; clamped by the leaderboard query.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?counter=<persona id>` on the draft endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CounterParams {
    pub counter: Option<String>,
}

/// `?status=&limit=` on the review queue. Defaults to `pending`.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionQueueParams {
    pub status: Option<SubmissionStatus>,
    pub limit: Option<i64>,
}
