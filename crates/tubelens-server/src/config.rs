//! Process-wide configuration, resolved once at startup.
//!
//! The credential is read from the environment in `main` and passed
//! explicitly into handlers via [`crate::state::AppState`]; handlers never
//! touch ambient globals. A missing key is a per-request failure (500), not
//! a startup failure, so a misconfigured deployment still answers with a
//! structured error.

/// Default OpenAI-compatible API base. Overridable via `OPENAI_API_BASE_URL`
/// (integration tests point this at a local mock upstream).
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Completion-service credential. `None` when unset or empty.
    pub openai_api_key: Option<String>,
    /// Base URL of the chat completions API, without the `/chat/completions`
    /// suffix.
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            api_base_url: std::env::var("OPENAI_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}
