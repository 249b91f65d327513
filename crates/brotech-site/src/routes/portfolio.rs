//! Portfolio page handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use super::html_response;
use crate::render;
use crate::state::AppState;

/// Render the portfolio page from carried content.
pub async fn portfolio_page(State(state): State<AppState>) -> Response {
    let markup = render::portfolio::render(&state.config.base_url, &state.config.site_name);
    html_response(StatusCode::OK, markup.into_string())
}
