//! Blog handlers: index and single post.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use brotech_core::{PostLookup, find_post, list_published_posts};

use super::html_response;
use crate::error::SiteError;
use crate::render;
use crate::state::AppState;

/// Posts shown on the index page.
const INDEX_LIMIT: u32 = 24;

/// Render the blog index.
pub async fn blog_index(State(state): State<AppState>) -> Result<Response, SiteError> {
    let posts = list_published_posts(&state.store, INDEX_LIMIT).await?;

    tracing::debug!(count = posts.len(), "rendering blog index");
    let markup = render::blog::render(&posts, &state.config.base_url, &state.config.site_name);
    Ok(html_response(StatusCode::OK, markup.into_string()))
}

/// Render a single post by slug.
///
/// The slug is used exactly as it appears in the URL — no trimming, no case
/// folding — matching how it is stored.
pub async fn post_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, SiteError> {
    let lookup = find_post(&state.store, &slug).await?;

    match lookup {
        PostLookup::Published(post) => {
            let markup =
                render::post::render(&post, &state.config.base_url, &state.config.site_name);
            Ok(html_response(StatusCode::OK, markup.into_string()))
        }
        lookup => {
            let diagnostic = lookup.diagnostic();
            let markup = render::diagnostics::not_found_page(
                &slug,
                diagnostic.as_deref(),
                &state.config.base_url,
                &state.config.site_name,
            );
            Ok(html_response(StatusCode::NOT_FOUND, markup.into_string()))
        }
    }
}
