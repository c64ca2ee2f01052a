//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::outbound::LlmError;
use crate::application::services::llm::NormalizeError;
use crate::application::services::{GameMasterError, ScenarioError};

/// Error returned by routes without a fallback
///
/// Always rendered as HTTP 500 with `{success: false, error, reason}`; reply
/// errors also carry the raw model text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] LlmError),
    #[error(transparent)]
    Reply(#[from] NormalizeError),
}

impl From<ScenarioError> for ApiError {
    fn from(err: ScenarioError) -> Self {
        match err {
            ScenarioError::Upstream(e) => Self::Upstream(e),
            ScenarioError::Reply(e) => Self::Reply(e),
        }
    }
}

impl From<GameMasterError> for ApiError {
    fn from(err: GameMasterError) -> Self {
        match err {
            GameMasterError::Upstream(e) => Self::Upstream(e),
            GameMasterError::Reply(e) => Self::Reply(e),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_response: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = match self {
            ApiError::Upstream(err) => ErrorResponse {
                success: false,
                error: "Error while calling Gemini".to_string(),
                reason: err.reason().to_string(),
                raw_response: None,
            },
            ApiError::Reply(err) => ErrorResponse {
                success: false,
                error: match err {
                    NormalizeError::Parse { .. } => "Failed to parse the AI reply as JSON",
                    NormalizeError::Shape { .. } => "The AI reply has an unexpected shape",
                }
                .to_string(),
                reason: err.reason().to_string(),
                raw_response: Some(err.raw_response().to_string()),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
