//! Binary entrypoint for the tubelens HTTP server.
//!
//! Reads configuration from environment variables:
//! - `OPENAI_API_KEY`: completion-service credential (requests fail with 500
//!   when unset; the process still starts)
//! - `OPENAI_API_BASE_URL`: completion endpoint base (default: OpenAI)
//! - `TUBELENS_PORT`: server listen port (default: "3000")

use tubelens_server::config::Config;
use tubelens_server::router::build_router;
use tubelens_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; analyze requests will be rejected");
    }
    let port = std::env::var("TUBELENS_PORT").unwrap_or_else(|_| "3000".to_string());

    let app = build_router(AppState::new(config));

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("tubelens server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
