#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication required: {0}")]
    AuthRequired(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The text model returned nothing usable.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// The image model refused the request on safety grounds. The message is
    /// user-facing and shown verbatim.
    #[error("Moderation rejected: {0}")]
    Moderation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing `sharing_cards` document.
    pub fn card_not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            entity: "SharingCard",
            id: id.to_string(),
        }
    }
}
