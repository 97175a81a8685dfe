//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for the analyze endpoint. It
//! implements `axum::response::IntoResponse` to produce the wire shape
//! `{ "error": <message>, "detail": <optional payload> }`. Every failure
//! mode in the pipeline converges here, so nothing escapes as a non-JSON
//! response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Wrong HTTP verb (405). The endpoint accepts POST and OPTIONS only.
    #[error("Only POST allowed")]
    MethodNotAllowed,

    /// The completion-service credential is not configured (500).
    #[error("No OPENAI_API_KEY set.")]
    MissingApiKey,

    /// The completion service answered with a non-success status (500).
    /// Carries the upstream error payload, best-effort parsed.
    #[error("OpenAI API call failed")]
    UpstreamRejected(serde_json::Value),

    /// Any other failure: network error, unreadable body, malformed JSON
    /// (500). Carries the error's textual description, never a stack trace.
    #[error("Server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingApiKey
            | ApiError::UpstreamRejected(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            ApiError::UpstreamRejected(detail) => {
                json!({ "error": self.to_string(), "detail": detail })
            }
            ApiError::Internal(detail) => {
                json!({ "error": self.to_string(), "detail": detail })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, axum::Json(body)).into_response()
    }
}
