//! Home page handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use brotech_core::fetch_impact_numbers;

use super::html_response;
use crate::render;
use crate::state::AppState;

/// Render the home page.
///
/// The impact-numbers fetch never fails — any problem falls back to the
/// default counters — so this handler is infallible.
pub async fn home_page(State(state): State<AppState>) -> Response {
    let numbers = fetch_impact_numbers(&state.store).await;

    let markup = render::home::render(&numbers, &state.config.base_url, &state.config.site_name);
    html_response(StatusCode::OK, markup.into_string())
}
