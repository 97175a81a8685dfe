//! Video analysis handler.
//!
//! `ANY /api/analyze`. Method dispatch happens inside the handler so the 405
//! response carries the documented JSON body instead of axum's bare
//! method-not-allowed fallback.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ApiError;
use crate::openai;
use crate::prompt;
use crate::schema::analyze::{AnalyzeRequest, AnalyzeResponse};
use crate::state::AppState;

/// Linear pipeline: validate method, validate configuration, sanitize input,
/// render the prompt, call the completion service, map the result.
///
/// The credential check runs before the body is read, so misconfiguration is
/// reported independent of payload shape. An absent body is treated as an
/// empty object; every field has a default.
pub async fn analyze(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let api_key = state
        .config
        .openai_api_key
        .as_deref()
        .ok_or(ApiError::MissingApiKey)?;

    let req: AnalyzeRequest = if body.is_empty() {
        AnalyzeRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|err| ApiError::Internal(err.to_string()))?
    };

    let prompt = prompt::render(&req);
    let analysis_text =
        openai::request_analysis(&state.http, &state.config, api_key, &prompt).await?;

    Ok(Json(AnalyzeResponse { analysis_text }).into_response())
}
