//! Wire types for documents owned by the content store.
//!
//! All documents are JSON with camelCase keys. The store is edited externally
//! by an administrator; this crate only ever reads, so the types are lenient
//! about missing fields and surface fallbacks instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder hero image used when a post has no `imageUrl`.
pub const DEFAULT_POST_IMAGE_URL: &str = "https://images.unsplash.com/photo-1457369804613-52c61a468e7d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80";

/// The exact status value a post must carry to be publicly visible.
///
/// Comparison is case-sensitive: `"Published"` or `"draft"` are not visible.
pub const PUBLISHED_STATUS: &str = "published";

/// A blog post document from the `blogPosts` collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Document ID.
    #[serde(default)]
    pub id: String,
    /// Post title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// URL slug. Unique, case-sensitive, expected lowercase.
    pub slug: String,
    /// Publication status. Free-form string; only the exact value
    /// [`PUBLISHED_STATUS`] makes the post visible.
    #[serde(default)]
    pub status: String,
    /// Post body as an HTML fragment.
    #[serde(default)]
    pub content: String,
    /// Optional hero image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Whether this post is publicly visible.
    pub fn is_published(&self) -> bool {
        self.status == PUBLISHED_STATUS
    }

    /// Hero image URL, substituting the default placeholder when the field
    /// is missing or empty.
    pub fn image_url(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_POST_IMAGE_URL)
    }

    /// Creation date formatted for display, e.g. "January 5, 2026".
    pub fn display_date(&self) -> String {
        match self.created_at {
            Some(ts) => ts.format("%B %-d, %Y").to_string(),
            None => "Date not available".to_string(),
        }
    }
}

/// The agency's headline counters, stored under `settings/global`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactNumbers {
    /// Projects delivered to date.
    pub projects_completed: u32,
    /// Clients served.
    pub happy_clients: u32,
    /// Years the agency has been operating.
    pub years_of_experience: u32,
}

/// Values shown when the settings document is absent or unreachable.
pub const DEFAULT_IMPACT_NUMBERS: ImpactNumbers = ImpactNumbers {
    projects_completed: 2,
    happy_clients: 10,
    years_of_experience: 2,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn post_json(status: &str, image_url: Option<&str>) -> String {
        let image = match image_url {
            Some(url) => format!(r#","imageUrl":"{url}""#),
            None => String::new(),
        };
        format!(
            r#"{{"id":"p1","title":"My First Post","author":"Alex","slug":"my-first-post","status":"{status}","content":"<p>Hello</p>","createdAt":"2026-01-05T10:00:00Z"{image}}}"#
        )
    }

    #[test]
    fn post_parses_from_camel_case_json() {
        let post: BlogPost = serde_json::from_str(&post_json("published", None)).unwrap();
        assert_eq!(post.slug, "my-first-post");
        assert_eq!(post.author, "Alex");
        assert_eq!(post.content, "<p>Hello</p>");
        assert!(post.created_at.is_some());
    }

    #[test]
    fn published_status_is_exact_lowercase_match() {
        let post: BlogPost = serde_json::from_str(&post_json("published", None)).unwrap();
        assert!(post.is_published());

        let capitalized: BlogPost = serde_json::from_str(&post_json("Published", None)).unwrap();
        assert!(!capitalized.is_published());

        let draft: BlogPost = serde_json::from_str(&post_json("draft", None)).unwrap();
        assert!(!draft.is_published());

        let empty: BlogPost = serde_json::from_str(&post_json("", None)).unwrap();
        assert!(!empty.is_published());
    }

    #[test]
    fn missing_image_url_falls_back_to_default() {
        let post: BlogPost = serde_json::from_str(&post_json("published", None)).unwrap();
        assert_eq!(post.image_url(), DEFAULT_POST_IMAGE_URL);
    }

    #[test]
    fn empty_image_url_falls_back_to_default() {
        let post: BlogPost = serde_json::from_str(&post_json("published", Some(""))).unwrap();
        assert_eq!(post.image_url(), DEFAULT_POST_IMAGE_URL);
    }

    #[test]
    fn present_image_url_is_used() {
        let post: BlogPost =
            serde_json::from_str(&post_json("published", Some("https://cdn.example.com/a.jpg")))
                .unwrap();
        assert_eq!(post.image_url(), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn missing_status_defaults_to_empty_and_unpublished() {
        let post: BlogPost = serde_json::from_str(
            r#"{"title":"T","author":"A","slug":"t","content":""}"#,
        )
        .unwrap();
        assert_eq!(post.status, "");
        assert!(!post.is_published());
    }

    #[test]
    fn display_date_formats_long_form() {
        let post: BlogPost = serde_json::from_str(&post_json("published", None)).unwrap();
        assert_eq!(post.display_date(), "January 5, 2026");
    }

    #[test]
    fn display_date_missing_timestamp() {
        let post: BlogPost = serde_json::from_str(
            r#"{"title":"T","author":"A","slug":"t","content":""}"#,
        )
        .unwrap();
        assert_eq!(post.display_date(), "Date not available");
    }

    #[test]
    fn impact_numbers_parse_from_camel_case() {
        let numbers: ImpactNumbers = serde_json::from_str(
            r#"{"projectsCompleted":12,"happyClients":30,"yearsOfExperience":5}"#,
        )
        .unwrap();
        assert_eq!(numbers.projects_completed, 12);
        assert_eq!(numbers.happy_clients, 30);
        assert_eq!(numbers.years_of_experience, 5);
    }

    #[test]
    fn default_impact_numbers_literals() {
        assert_eq!(DEFAULT_IMPACT_NUMBERS.projects_completed, 2);
        assert_eq!(DEFAULT_IMPACT_NUMBERS.happy_clients, 10);
        assert_eq!(DEFAULT_IMPACT_NUMBERS.years_of_experience, 2);
    }
}
