//! Client for the hosted document store.
//!
//! The store exposes a small JSON REST API: named collections of documents,
//! equality filters, and single-document gets. This client covers exactly the
//! capability the site consumes — no writes, no subscriptions.
//!
//! Access requires an API key resolved from the environment at process start.
//! When the key is absent the client is never constructed; callers observe
//! that through [`StoreHandle::Unavailable`] and render setup instructions
//! instead of querying.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Request timeout for store calls. Generous; queries are point lookups.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the content store, resolved from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store's REST endpoint.
    pub base_url: String,
    /// Project identifier namespacing the collections.
    pub project_id: String,
    /// API credential. `None` disables the client entirely.
    pub api_key: Option<String>,
}

/// Thin HTTP client for the document store.
#[derive(Clone)]
pub struct ContentStore {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Build a client for the given endpoint and credential.
    pub fn new(base_url: &str, project_id: &str, api_key: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/collections/{}/documents",
            self.base_url, self.project_id, collection
        )
    }

    /// Query a collection with equality filters, returning at most `limit`
    /// documents.
    pub async fn query<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[(&str, &str)],
        limit: u32,
    ) -> Result<Vec<T>> {
        let response = self
            .http
            .get(self.collection_url(collection))
            .header("x-api-key", &self.api_key)
            .query(filters)
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::from_transport)?;

        if !status.is_success() {
            return Err(backend_error(status.as_u16(), &body));
        }

        let listing: DocumentListing<T> =
            serde_json::from_str(&body).map_err(|source| Error::Decode {
                collection: collection.to_string(),
                source,
            })?;

        Ok(listing.documents)
    }

    /// Query a collection with equality filters, returning the first match.
    pub async fn query_one<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let mut documents = self.query(collection, filters, 1).await?;
        Ok(if documents.is_empty() {
            None
        } else {
            Some(documents.swap_remove(0))
        })
    }

    /// Fetch a single document by ID. Returns `None` when it does not exist.
    pub async fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Option<T>> {
        let url = format!("{}/{}", self.collection_url(collection), document_id);
        let response = self
            .http
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.text().await.map_err(Error::from_transport)?;
        if !status.is_success() {
            return Err(backend_error(status.as_u16(), &body));
        }

        let document = serde_json::from_str(&body).map_err(|source| Error::Decode {
            collection: collection.to_string(),
            source,
        })?;

        Ok(Some(document))
    }

    /// Whether a document exists.
    pub async fn exists(&self, collection: &str, document_id: &str) -> Result<bool> {
        Ok(self
            .get::<serde_json::Value>(collection, document_id)
            .await?
            .is_some())
    }
}

/// Wire shape of a collection query response.
#[derive(Deserialize)]
struct DocumentListing<T> {
    #[serde(default = "Vec::new")]
    documents: Vec<T>,
}

/// Turn a non-success response into a backend error, preferring the store's
/// structured `error.message` field over the raw body.
fn backend_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    Error::Backend { status, message }
}

/// The store client as each page sees it.
///
/// Initialization runs once at process start; the result is shared read-only.
/// The explicit tri-state replaces a nullable global handle: pages either hold
/// a working client or know exactly why they don't.
#[derive(Debug, Default)]
pub enum StoreHandle {
    /// Initialization has not run yet.
    #[default]
    Uninitialized,
    /// Client constructed; queries may be issued.
    Available(ContentStore),
    /// Initialization failed; no query will ever be issued.
    Unavailable {
        /// Why the client is disabled.
        reason: String,
    },
}

impl StoreHandle {
    /// Resolve the handle from configuration.
    ///
    /// A missing or empty API key yields [`StoreHandle::Unavailable`]; the
    /// site keeps serving, with content-backed pages showing setup
    /// instructions instead.
    pub fn init(config: &StoreConfig) -> Self {
        let Some(api_key) = config.api_key.as_deref().filter(|key| !key.is_empty()) else {
            let reason =
                "the content store API key is missing from the environment".to_string();
            tracing::warn!("{reason}; content-backed pages will show setup instructions");
            return Self::Unavailable { reason };
        };

        match ContentStore::new(&config.base_url, &config.project_id, api_key) {
            Ok(store) => {
                tracing::info!(project = %config.project_id, "content store client initialized");
                Self::Available(store)
            }
            Err(err) => {
                tracing::error!(error = %err, "content store initialization failed");
                Self::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Borrow the client, or report why it is unavailable.
    pub fn store(&self) -> Result<&ContentStore> {
        match self {
            Self::Available(store) => Ok(store),
            Self::Uninitialized => Err(Error::NotConfigured(
                "store handle has not been initialized".to_string(),
            )),
            Self::Unavailable { reason } => Err(Error::NotConfigured(reason.clone())),
        }
    }

    /// Whether queries can be issued.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}
