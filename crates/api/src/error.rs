use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use landing_forge_core::IdeaError;
use serde_json::json;

/// API error type that maps to JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    /// The model could not produce a usable idea. The message is the
    /// summarized reason and is safe to return.
    #[error("generation failed: {0}")]
    Generation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<IdeaError> for ApiError {
    fn from(err: IdeaError) -> Self {
        match err {
            IdeaError::InvalidInput(msg) => ApiError::BadRequest(msg),
            IdeaError::NotFound(_) => ApiError::NotFound("Idea not found".to_string()),
            err @ IdeaError::GenerationFailed(_) => ApiError::Generation(err.to_string()),
            IdeaError::Store(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "notFound", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "badRequest", msg),
            ApiError::Generation(msg) => {
                tracing::error!("Generation failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "generationFailed", msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": {
                "type": error_type,
                "message": message,
                "statusCode": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
