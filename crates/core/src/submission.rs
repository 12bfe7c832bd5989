//! Feature submission workflow.
//!
//! A saved card starts at `none`. Its owner may submit it once with an
//! inspirational story (`none -> pending`), after which a reviewer settles
//! it (`pending -> approved | rejected`). Transitions only move forward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length (in characters) of an inspirational story.
pub const MAX_STORY_LEN: usize = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

/// Outcome a reviewer may record for a pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::None => "none",
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    /// Status after the owner submits the card for feature review.
    pub fn submit(self) -> Result<SubmissionStatus, CoreError> {
        match self {
            SubmissionStatus::None => Ok(SubmissionStatus::Pending),
            other => Err(CoreError::Conflict(format!(
                "Card has already been submitted (status: {other})"
            ))),
        }
    }

    /// Status after a reviewer records `decision`.
    pub fn review(self, decision: ReviewDecision) -> Result<SubmissionStatus, CoreError> {
        match self {
            SubmissionStatus::Pending => Ok(decision.into()),
            other => Err(CoreError::Conflict(format!(
                "Only pending submissions can be reviewed (status: {other})"
            ))),
        }
    }
}

impl From<ReviewDecision> for SubmissionStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => SubmissionStatus::Approved,
            ReviewDecision::Rejected => SubmissionStatus::Rejected,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SubmissionStatus::None),
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid submission status '{other}'. Must be one of: none, pending, approved, rejected"
            ))),
        }
    }
}

impl TryFrom<String> for SubmissionStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Validate an inspirational story. The story is stored verbatim, so no
/// trimming happens here; only blank or oversized stories are rejected.
pub fn validate_story(story: &str) -> Result<(), CoreError> {
    if story.trim().is_empty() {
        return Err(CoreError::Validation("Story must not be empty".into()));
    }
    if story.chars().count() > MAX_STORY_LEN {
        return Err(CoreError::Validation(format!(
            "Story must be at most {MAX_STORY_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn submit_moves_none_to_pending() {
        assert_eq!(SubmissionStatus::None.submit().unwrap(), SubmissionStatus::Pending);
    }

    #[test]
    fn submit_from_any_other_state_conflicts() {
        for s in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            assert_matches!(s.submit(), Err(CoreError::Conflict(_)));
        }
    }

    #[test]
    fn review_settles_pending() {
        let p = SubmissionStatus::Pending;
        assert_eq!(p.review(ReviewDecision::Approved).unwrap(), SubmissionStatus::Approved);
        assert_eq!(p.review(ReviewDecision::Rejected).unwrap(), SubmissionStatus::Rejected);
    }

    #[test]
    fn review_never_moves_backwards() {
        assert_matches!(
            SubmissionStatus::None.review(ReviewDecision::Approved),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            SubmissionStatus::Approved.review(ReviewDecision::Rejected),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn status_strings_round_trip() {
        for s in ["none", "pending", "approved", "rejected"] {
            assert_eq!(s.parse::<SubmissionStatus>().unwrap().as_str(), s);
        }
        assert!("archived".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn story_validation() {
        assert!(validate_story("  I once replied-all to the CEO.  ").is_ok());
        assert_matches!(validate_story("   "), Err(CoreError::Validation(_)));
        assert_matches!(
            validate_story(&"a".repeat(MAX_STORY_LEN + 1)),
            Err(CoreError::Validation(_))
        );
    }
}
