//! Per-request caller identity.

/// The authenticated caller of a write operation.
///
/// Built by the HTTP layer from a session token and passed explicitly to
/// whatever needs to know who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Stable owner id stamped onto saved cards.
    pub user_profile_id: String,
    /// Name recorded as `last_shared_by` when the caller saves a card.
    pub display_name: Option<String>,
}

/// Shown wherever a caller has not given a name.
pub const ANONYMOUS_NAME: &str = "Anonymous";

impl Session {
    pub fn new(user_profile_id: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            user_profile_id: user_profile_id.into(),
            display_name,
        }
    }

    /// Display name, or `"Anonymous"` when none was given.
    pub fn display_name_or_anonymous(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }
}
