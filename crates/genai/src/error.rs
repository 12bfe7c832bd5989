use jokester_core::error::CoreError;

/// Shown when the image model declines to draw the caricature.
pub const MODERATION_MESSAGE: &str = "Our satire department reviewed your photo and \
     declined to comment. Legal says it's 'not a good look'. Try a different image.";

/// Shown when text generation produces nothing usable.
pub const GENERATION_MESSAGE: &str = "Could not generate satirical wit. Please try again.";

/// Errors from the generative adapters.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Generative API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Generative API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The model answered but the answer was empty or unparsable.
    #[error("Unusable model output: {0}")]
    InvalidOutput(String),

    /// The model refused to produce the requested content.
    #[error("Content refused by the model: {reason}")]
    Refused { reason: String },

    /// The caller's input cannot be sent to the model.
    #[error("{0}")]
    InvalidInput(String),

    /// No API key is configured.
    #[error("Generative features are not configured")]
    NotConfigured,
}

impl From<GenAiError> for CoreError {
    fn from(err: GenAiError) -> Self {
        match err {
            GenAiError::Refused { .. } => CoreError::Moderation(MODERATION_MESSAGE.to_string()),
            GenAiError::InvalidInput(msg) => CoreError::Validation(msg),
            err @ GenAiError::NotConfigured => CoreError::Internal(err.to_string()),
            other => CoreError::Generation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn refusal_becomes_sardonic_moderation_error() {
        let err: CoreError = GenAiError::Refused {
            reason: "SAFETY".into(),
        }
        .into();
        assert_matches!(err, CoreError::Moderation(msg) if msg == MODERATION_MESSAGE);
    }

    #[test]
    fn api_failure_becomes_generation_error() {
        let err: CoreError = GenAiError::Api {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert_matches!(err, CoreError::Generation(_));
    }

    #[test]
    fn bad_input_becomes_validation_error() {
        let err: CoreError = GenAiError::InvalidInput("bad data URI".into()).into();
        assert_matches!(err, CoreError::Validation(msg) if msg == "bad data URI");
    }
}
