//! Application state shared across handler tasks.

use std::sync::Arc;

use crate::config::Config;

/// Cloneable axum state: the resolved [`Config`] plus a shared HTTP client.
///
/// `reqwest::Client` holds an internal connection pool, so one instance is
/// created at startup and reused by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
