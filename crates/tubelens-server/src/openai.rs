//! OpenAI-compatible chat completion client.
//!
//! One outbound POST per analysis request: no retry, no timeout override,
//! no streaming. A rejected call surfaces the upstream payload to the
//! caller; a successful call with no extractable assistant content degrades
//! to an empty string rather than erroring.

use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::ApiError;

pub const MODEL: &str = "gpt-4.1-mini";
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const TEMPERATURE: f64 = 0.7;

/// Sends the rendered prompt to the completion endpoint and returns the
/// first choice's message content (`""` when absent).
pub async fn request_analysis(
    http: &reqwest::Client,
    config: &Config,
    api_key: &str,
    prompt: &str,
) -> Result<String, ApiError> {
    let endpoint = format!(
        "{}/chat/completions",
        config.api_base_url.trim_end_matches('/')
    );

    let body = json!({
        "model": MODEL,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": prompt },
        ],
        "temperature": TEMPERATURE,
    });

    let response = http
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "completion request failed");
            ApiError::Internal(err.to_string())
        })?;

    let status = response.status();
    let body_text = response
        .text()
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    if !status.is_success() {
        tracing::warn!(status = %status, "completion request rejected");
        // Best-effort parse of the upstream error payload; an unparsable
        // body must not become a second failure.
        let detail = serde_json::from_str(&body_text).unwrap_or_else(|_| json!({}));
        return Err(ApiError::UpstreamRejected(detail));
    }

    let parsed: ChatCompletionResponse =
        serde_json::from_str(&body_text).map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default())
}

/// Response shape of the completions API, with every level defaulted so a
/// structurally thin reply still deserializes.
#[derive(Debug, Default, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChatMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChatMessage {
    #[serde(default, deserialize_with = "string_content")]
    content: Option<String>,
}

/// Accepts any JSON value for `content`, keeping only strings. Some
/// OpenAI-compatible providers emit structured (array-of-parts) content;
/// that degrades to no content rather than failing the parse.
fn string_content<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}
