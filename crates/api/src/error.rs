use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jokester_core::error::CoreError;
use jokester_db::store::StoreError;
use jokester_genai::error::GENERATION_MESSAGE;
use jokester_genai::GenAiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus the store and generator error
/// types, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `jokester_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the card store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A failure from the generative adapters.
    #[error(transparent)]
    GenAi(#[from] GenAiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(core) => classify_core_error(&core),
            AppError::Store(StoreError::Core(core)) => classify_core_error(&core),
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(&err),
            AppError::GenAi(err) => {
                tracing::warn!(error = %err, "Generative request failed");
                classify_core_error(&CoreError::from(err))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::AuthRequired(msg) => (StatusCode::UNAUTHORIZED, "AUTH_REQUIRED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Moderation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "MODERATION_REJECTED",
            msg.clone(),
        ),
        CoreError::Generation(detail) => {
            tracing::warn!(error = %detail, "Generation failed");
            (
                StatusCode::BAD_GATEWAY,
                "GENERATION_FAILED",
                GENERATION_MESSAGE.to_string(),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal()
        }
    }
}

/// Classify a sqlx error. `RowNotFound` maps to 404; everything else is a
/// sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
