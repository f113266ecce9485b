use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Every variant surfaces the same way: HTTP 500 with `{"error": <message>}`.
/// The variants exist for logging and for callers inside the crate, not for
/// status-code selection.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing request fields. Detected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Deployment defect, e.g. the completion API key is not set.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The completion API failed or returned an envelope we cannot read.
    #[error("Upstream error{}: {message}", status_suffix(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// The completion text did not contain the expected structure.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::Configuration(
                "GEMINI_API_KEY is not set. Please configure your environment variables."
                    .to_string(),
            ),
            LlmError::Http(e) => AppError::Upstream {
                status: e.status().map(|s| s.as_u16()),
                message: format!("request to completion API failed: {e}"),
            },
            LlmError::Api { status, body } => AppError::Upstream {
                status: Some(status),
                message: format!("Gemini API error: {status} {body}"),
            },
            LlmError::MalformedEnvelope { status, body } => AppError::Upstream {
                status: Some(status),
                message: format!("Invalid response format from Gemini API: {body}"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => tracing::warn!("Rejected request: {msg}"),
            AppError::Configuration(msg) => tracing::error!("Configuration error: {msg}"),
            AppError::Upstream { status, message } => {
                tracing::error!(?status, "Completion API error: {message}")
            }
            AppError::Parse(msg) => tracing::error!("Failed to parse completion: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
