//! Well-known role name constants carried in session tokens.

/// Anonymous card makers.
pub const ROLE_USER: &str = "user";

/// Staff who settle feature submissions.
pub const ROLE_REVIEWER: &str = "reviewer";
