//! Content lookup flows.
//!
//! The post-by-slug flow is the one piece of branching logic in the system:
//! a visibility query first, then — only when that comes back empty — a
//! diagnostic probe that tells an administrator whether the slug is missing
//! entirely or present with the wrong status.

use serde::Deserialize;

use crate::error::Result;
use crate::model::{BlogPost, DEFAULT_IMPACT_NUMBERS, ImpactNumbers, PUBLISHED_STATUS};
use crate::store::StoreHandle;

/// Collection holding blog post documents.
pub const POSTS_COLLECTION: &str = "blogPosts";

/// Collection holding the singleton settings document.
pub const SETTINGS_COLLECTION: &str = "settings";

/// Document ID of the global settings document.
pub const SETTINGS_DOC_ID: &str = "global";

/// Outcome of a post lookup by slug.
#[derive(Debug)]
pub enum PostLookup {
    /// A published post matched the slug.
    Published(Box<BlogPost>),
    /// No document carries this slug at all.
    NotFound,
    /// A document carries this slug but its status is not `"published"`.
    Unpublished {
        /// The actual status value found in the store, verbatim.
        status: String,
    },
}

impl PostLookup {
    /// Administrator-facing diagnostic for the unpublished case.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Unpublished { status } => Some(format!(
                "A post with this slug was found, but it is not published. \
                 Its current status in the database is: \"{status}\". \
                 Please change it to the lowercase string \"published\"."
            )),
            _ => None,
        }
    }
}

/// Find the published post for a URL slug.
///
/// Slug matching is exact-string equality, never normalized. When no
/// published post matches, a second probe ignoring status distinguishes
/// "does not exist" from "exists but unpublished" — one extra read, spent
/// only on the miss path, in exchange for an actionable diagnostic.
pub async fn find_post(handle: &StoreHandle, slug: &str) -> Result<PostLookup> {
    let store = handle.store()?;

    let published = store
        .query_one::<BlogPost>(
            POSTS_COLLECTION,
            &[("slug", slug), ("status", PUBLISHED_STATUS)],
        )
        .await?;

    if let Some(post) = published {
        return Ok(PostLookup::Published(Box::new(post)));
    }

    let probe = store
        .query_one::<BlogPost>(POSTS_COLLECTION, &[("slug", slug)])
        .await?;

    match probe {
        Some(post) => {
            tracing::warn!(
                slug = %slug,
                status = %post.status,
                "post exists but is not published"
            );
            Ok(PostLookup::Unpublished {
                status: post.status,
            })
        }
        None => Ok(PostLookup::NotFound),
    }
}

/// List published posts, newest first.
pub async fn list_published_posts(handle: &StoreHandle, limit: u32) -> Result<Vec<BlogPost>> {
    let store = handle.store()?;

    let mut posts: Vec<BlogPost> = store
        .query(POSTS_COLLECTION, &[("status", PUBLISHED_STATUS)], limit)
        .await?;

    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(posts)
}

/// Wire shape of the `settings/global` document. Other fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsDocument {
    #[serde(default)]
    impact_numbers: Option<ImpactNumbers>,
}

/// Fetch the impact numbers for the home page.
///
/// Never fails: an unavailable client, a missing document, a missing field,
/// or a fetch error all fall back to [`DEFAULT_IMPACT_NUMBERS`]. Failures are
/// logged and otherwise invisible to the end user.
pub async fn fetch_impact_numbers(handle: &StoreHandle) -> ImpactNumbers {
    let store = match handle.store() {
        Ok(store) => store,
        Err(_) => {
            tracing::warn!("content store not initialized, using default impact numbers");
            return DEFAULT_IMPACT_NUMBERS;
        }
    };

    match store
        .get::<SettingsDocument>(SETTINGS_COLLECTION, SETTINGS_DOC_ID)
        .await
    {
        Ok(Some(SettingsDocument {
            impact_numbers: Some(numbers),
        })) => numbers,
        Ok(_) => {
            tracing::warn!("impact numbers not found in settings document, using defaults");
            DEFAULT_IMPACT_NUMBERS
        }
        Err(err) if err.is_connectivity() => {
            tracing::error!(
                error = %err,
                "could not reach the content store for impact numbers; check that the \
                 store's security rules allow public reads of the 'settings' collection"
            );
            DEFAULT_IMPACT_NUMBERS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch impact numbers, using defaults");
            DEFAULT_IMPACT_NUMBERS
        }
    }
}
