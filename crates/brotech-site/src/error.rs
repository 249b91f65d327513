//! Error handling for the site.
//!
//! Every lookup failure is converted into a rendered HTML state here; nothing
//! propagates past a handler. The mapping follows the failure taxonomy:
//! missing configuration gets the administrator setup instructions,
//! connectivity problems get a security-rules hint, and anything else shows
//! the underlying error message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, PreEscaped, html};

use brotech_core::Error as StoreError;

use crate::render::components::{ERROR_CSS, PAGE_CSS};
use crate::render::diagnostics::setup_instructions;

/// Site error type. Wraps content-store failures from the lookup flows.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A content lookup failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let Self::Store(err) = self;

        match err {
            StoreError::NotConfigured(reason) => {
                tracing::warn!(reason = %reason, "serving setup instructions");
                setup_response()
            }
            err if err.is_connectivity() => {
                tracing::error!(error = %err, "content store unreachable");
                error_page_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Could not connect to the database. This may be due to a \
                     configuration issue. (Admin: please check the content store's \
                     security rules.)",
                )
            }
            err => {
                tracing::error!(error = %err, "content lookup failed");
                error_page_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        }
    }
}

/// Standalone setup-instructions page for configuration-missing failures.
fn setup_response() -> Response {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Setup Required — BroTech Web Solutions" }
                meta name="robots" content="noindex";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (setup_instructions()) }
            }
        }
    };

    (StatusCode::SERVICE_UNAVAILABLE, markup).into_response()
}

/// Bare error page for connectivity and generic failures.
fn error_page_response(status: StatusCode, message: &str) -> Response {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Error — BroTech Web Solutions" }
                meta name="robots" content="noindex";
                style { (PreEscaped(ERROR_CSS)) }
            }
            body {
                main class="error-page" {
                    h1 { "Error" }
                    p { (message) }
                    a href="/" { "Back to the home page" }
                }
            }
        }
    };

    (status, markup).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_serves_setup_instructions() {
        let err = SiteError::Store(StoreError::NotConfigured("no key".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn connectivity_maps_to_service_unavailable() {
        let err = SiteError::Store(StoreError::Connectivity("connection refused".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn backend_offline_message_counts_as_connectivity() {
        let err = SiteError::Store(StoreError::Backend {
            status: 503,
            message: "the client is offline".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn generic_failure_maps_to_internal_error() {
        let err = SiteError::Store(StoreError::Backend {
            status: 400,
            message: "bad filter expression".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_display_passes_through_store_error() {
        let err = SiteError::Store(StoreError::Connectivity("timed out".to_string()));
        assert!(err.to_string().contains("timed out"));
    }
}
