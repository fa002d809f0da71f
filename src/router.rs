//! Axum route configuration and middleware layering.

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::{
    compression::{
        predicate::{NotForContentType, Predicate, SizeAbove},
        CompressionLayer,
    },
    services::ServeDir,
    CompressionLevel,
};

use crate::{
    controller::{api, pages},
    middleware::timing,
    state::AppState,
};

/// Minimum body size in bytes before a response is compressed.
const COMPRESS_MIN_SIZE: u16 = 500;

/// Directory served under `/static`.
const STATIC_DIR: &str = "static";

/// Builds the application router with all routes and middleware.
///
/// Page routes are always mounted; the JSON API is merged only when enabled
/// in configuration. The middleware stack, outermost first: start-time
/// recording, response headers, compression.
///
/// # Arguments
/// - `state` - Shared application state injected into every handler
///
/// # Returns
/// - `Router` - Ready to serve
pub fn build(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(pages::home))
        .route("/statistics", get(pages::statistics))
        .route("/shop", get(pages::shop))
        .route("/players/{username}", get(pages::player_profile))
        .route("/clans", get(pages::clans))
        .route("/tournaments", get(pages::tournaments));

    if state.config.api_enabled {
        router = router.merge(api_router());
    } else {
        tracing::info!("JSON API disabled by configuration");
    }

    let compression = CompressionLayer::new()
        .quality(CompressionLevel::Precise(6))
        .compress_when(
            SizeAbove::new(COMPRESS_MIN_SIZE)
                .and(NotForContentType::IMAGES)
                .and(NotForContentType::SSE),
        );

    router
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(compression)
        .layer(from_fn(timing::response_headers))
        .layer(from_fn(timing::record_start_time))
        .with_state(state)
}

/// Routes for the JSON API.
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/leaderboard", get(api::leaderboard))
        .route("/api/players/{username}", get(api::player))
        .route("/api/statistics", get(api::statistics))
}
