//! Route definitions for the site.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `GET /blog` - Blog index
//! - `GET /blog/{slug}` - Single post (or diagnostic page)
//! - `GET /services` - Services page
//! - `GET /portfolio` - Portfolio page
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod blog;
mod health;
mod home;
mod portfolio;
mod services;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::render::components::CSP_HEADER;
use crate::state::AppState;

/// Build the complete site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/blog", get(blog::blog_index))
        .route("/blog/{slug}", get(blog::post_page))
        .route("/services", get(services::services_page))
        .route("/portfolio", get(portfolio::portfolio_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

/// Build an HTTP response with HTML content and security headers.
pub(crate) fn html_response(status: StatusCode, html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (status, headers, html).into_response()
}
