//! Analyze request/response types.
//!
//! Every request field is optional; `null` and absent are treated alike.
//! Defaults are applied during prompt rendering, not deserialization, so the
//! wire type mirrors exactly what the caller sent.

use serde::{Deserialize, Serialize};

/// Inbound description of a YouTube video.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub title: Option<String>,
    /// Truncated to 500 characters before use.
    pub description: Option<String>,
    pub stats: Option<VideoStats>,
    pub duration_seconds: Option<u64>,
    /// Truncated to 8000 characters; a fixed placeholder is substituted
    /// when absent or empty.
    pub transcript: Option<String>,
}

/// Video statistics; each counter defaults to 0 when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoStats {
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
}

/// Successful analysis payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Content of the first completion choice, or `""` when the upstream
    /// response carried no message content.
    pub analysis_text: String,
}
