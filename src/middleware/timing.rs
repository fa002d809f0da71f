//! Request timing, caching, and security response headers.
//!
//! Two middleware layers mirror the request lifecycle: `record_start_time`
//! runs on the way in and stamps the request with a start instant;
//! `response_headers` runs on the way out, computes the elapsed time, and
//! sets the caching and security headers. If the start instant is missing
//! (the recording layer was not installed), the timing header is simply
//! omitted and nothing else changes.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Pages that may be cached briefly by clients and proxies.
const CACHED_PAGES: [&str; 3] = ["/", "/statistics", "/shop"];

/// One-year cache for fingerprinted static assets.
const STATIC_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Five-minute cache for the hot read-only pages.
const PAGE_CACHE_CONTROL: &str = "public, max-age=300";

/// Fixed far-future expiry sent alongside the static cache header.
const STATIC_EXPIRES: &str = "Thu, 31 Dec 2026 23:59:59 GMT";

/// Start instant recorded when the request entered the middleware stack.
#[derive(Debug, Clone, Copy)]
pub struct RequestStart(pub Instant);

/// Stamps the request with the current instant.
///
/// Must be installed outside [`response_headers`] so the instant is present
/// in the request extensions by the time the response side reads it.
pub async fn record_start_time(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(RequestStart(Instant::now()));
    next.run(request).await
}

/// Sets timing, caching, and security headers on the outgoing response.
///
/// - `X-Response-Time`: elapsed milliseconds with two decimals and an `ms`
///   suffix; omitted when no start instant was recorded.
/// - `Cache-Control`/`Expires`: one year for `/static/...`, five minutes for
///   the home, statistics, and shop pages, nothing otherwise.
/// - `X-Content-Type-Options`, `X-Frame-Options`, `X-XSS-Protection`: always.
pub async fn response_headers(request: Request, next: Next) -> Response {
    let start = request.extensions().get::<RequestStart>().copied();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if let Some(RequestStart(start)) = start {
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        if let Ok(value) = format!("{elapsed_ms:.2}ms").parse() {
            headers.insert("X-Response-Time", value);
        }
    }

    if path.starts_with("/static/") {
        if let Ok(value) = STATIC_CACHE_CONTROL.parse() {
            headers.insert("Cache-Control", value);
        }
        if let Ok(value) = STATIC_EXPIRES.parse() {
            headers.insert("Expires", value);
        }
    } else if CACHED_PAGES.contains(&path.as_str()) {
        if let Ok(value) = PAGE_CACHE_CONTROL.parse() {
            headers.insert("Cache-Control", value);
        }
    }

    if let Ok(value) = "nosniff".parse() {
        headers.insert("X-Content-Type-Options", value);
    }
    if let Ok(value) = "DENY".parse() {
        headers.insert("X-Frame-Options", value);
    }
    if let Ok(value) = "1; mode=block".parse() {
        headers.insert("X-XSS-Protection", value);
    }

    response
}
