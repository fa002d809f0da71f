use axum::{body::Body, http::Request, middleware::from_fn, routing::get, Router};
use tower::util::ServiceExt;

use crate::middleware::timing;

/// Builds a router with both lifecycle layers, like the real application.
fn test_router() -> Router {
    Router::new()
        .route("/", get(|| async { "home" }))
        .route("/statistics", get(|| async { "statistics" }))
        .route("/static/css/style.css", get(|| async { "body {}" }))
        .route("/players/Herobrine", get(|| async { "profile" }))
        .layer(from_fn(timing::response_headers))
        .layer(from_fn(timing::record_start_time))
}

async fn get_response(router: Router, uri: &str) -> axum::response::Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Tests the timing header format when the start instant was recorded.
///
/// Expected: X-Response-Time present, two decimals, "ms" suffix
#[tokio::test]
async fn sets_timing_header_with_two_decimals() {
    let response = get_response(test_router(), "/").await;

    let value = response
        .headers()
        .get("X-Response-Time")
        .expect("timing header missing")
        .to_str()
        .unwrap();

    let millis = value.strip_suffix("ms").expect("missing ms suffix");
    let (_, decimals) = millis.split_once('.').expect("missing decimal point");
    assert_eq!(decimals.len(), 2, "expected two decimals in {value}");
    assert!(millis.parse::<f64>().unwrap() >= 0.0);
}

/// Tests that the timing header is omitted when no start was recorded.
///
/// Only the response-side layer is installed here, mimicking a hook
/// ordering violation; everything else must still work.
///
/// Expected: no X-Response-Time, security headers still present
#[tokio::test]
async fn omits_timing_header_without_start_instant() {
    let router = Router::new()
        .route("/", get(|| async { "home" }))
        .layer(from_fn(timing::response_headers));

    let response = get_response(router, "/").await;

    assert!(response.headers().get("X-Response-Time").is_none());
    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
}

/// Tests that the three security headers are always set.
#[tokio::test]
async fn sets_security_headers_on_every_response() {
    let response = get_response(test_router(), "/players/Herobrine").await;
    let headers = response.headers();

    assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    assert_eq!(headers.get("X-Frame-Options").unwrap(), "DENY");
    assert_eq!(headers.get("X-XSS-Protection").unwrap(), "1; mode=block");
}

/// Tests the one-year cache headers for static assets.
///
/// Expected: Cache-Control with max-age=31536000 and a fixed Expires header
#[tokio::test]
async fn sets_long_cache_headers_for_static_assets() {
    let response = get_response(test_router(), "/static/css/style.css").await;
    let headers = response.headers();

    assert_eq!(
        headers.get("Cache-Control").unwrap(),
        "public, max-age=31536000"
    );
    assert!(headers.get("Expires").is_some());
}

/// Tests the five-minute cache header for the hot pages.
#[tokio::test]
async fn sets_short_cache_header_for_cached_pages() {
    for uri in ["/", "/statistics"] {
        let response = get_response(test_router(), uri).await;
        assert_eq!(
            response.headers().get("Cache-Control").unwrap(),
            "public, max-age=300",
            "for {uri}"
        );
    }
}

/// Tests that uncached pages get no cache header at all.
#[tokio::test]
async fn leaves_other_pages_uncached() {
    let response = get_response(test_router(), "/players/Herobrine").await;
    assert!(response.headers().get("Cache-Control").is_none());
}
