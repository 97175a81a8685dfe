//! Router assembly for the tubelens HTTP API.
//!
//! [`build_router`] wires the analyze handler with CORS and tracing
//! middleware layers.

use axum::http::{header, HeaderValue, Method};
use axum::routing::any;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router.
///
/// Every response carries the full CORS header set
/// (`Access-Control-Allow-Origin: *`, `-Allow-Methods: POST, OPTIONS`,
/// `-Allow-Headers: Content-Type`), not only preflight responses: the
/// `CorsLayer` contributes the origin header and answers browser preflights
/// with 200, and the two `SetResponseHeaderLayer`s sit outermost so the
/// method/header lists are present on regular and error responses as well.
/// Plain OPTIONS requests reach the handler and are answered 200 there.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", any(handlers::analyze::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}
