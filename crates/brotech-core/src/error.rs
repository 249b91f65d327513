//! Error types for content-store access.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading from the content store.
#[derive(Error, Debug)]
pub enum Error {
    /// The store client was never initialized (missing API credential).
    #[error("content store is not configured: {0}")]
    NotConfigured(String),

    /// The store could not be reached at the transport level.
    #[error("could not reach the content store: {0}")]
    Connectivity(String),

    /// The store answered with a non-success HTTP status.
    #[error("content store returned HTTP {status}: {message}")]
    Backend {
        /// HTTP status code of the response.
        status: u16,
        /// Error text supplied by the store, if any.
        message: String,
    },

    /// A document did not match the expected shape.
    #[error("malformed document in '{collection}': {source}")]
    Decode {
        /// Collection the document came from.
        collection: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Any other HTTP client failure.
    #[error("content store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Classify a transport failure, separating connectivity problems
    /// (unreachable host, timeout) from other client errors.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Connectivity(err.to_string())
        } else {
            Self::Transport(err)
        }
    }

    /// Whether this failure looks like a connectivity/offline problem.
    ///
    /// Transport errors carry a structured signal. For backend errors we fall
    /// back to scanning the store-supplied message for offline wording; that
    /// check is best-effort, not a guarantee.
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Connectivity(_) => true,
            Self::Transport(err) => err.is_connect() || err.is_timeout(),
            Self::Backend { message, .. } => {
                message.contains("offline") || message.contains("unavailable")
            }
            _ => false,
        }
    }
}
