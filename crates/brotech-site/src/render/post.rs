//! Single blog post page.

use brotech_core::BlogPost;
use maud::{Markup, PreEscaped, html};

use super::components::{OpenGraphData, page_shell, strip_tags, truncate};

/// Render a published post.
///
/// The post body is an HTML fragment authored by the site's administrator in
/// the content store; it is injected unescaped inside the prose container, as
/// the one deliberate exception to maud's escaping.
pub fn render(post: &BlogPost, base_url: &str, site_name: &str) -> Markup {
    let description = truncate(&strip_tags(&post.content), 200);
    let canonical = format!("{base_url}/blog/{}", post.slug);

    let og = OpenGraphData {
        title: &post.title,
        description: &description,
        og_type: "article",
        image: Some(post.image_url()),
    };

    let body = html! {
        div class="post-hero" {
            img src=(post.image_url()) alt=(post.title);
        }
        article class="article" {
            header class="article-header" {
                h1 { (post.title) }
                div class="article-byline" {
                    span { "By " (post.author) }
                    " • "
                    span { (post.display_date()) }
                }
            }
            div class="prose" {
                (PreEscaped(post.content.as_str()))
            }
        }
    };

    page_shell(
        &format!("{} — {site_name}", post.title),
        &description,
        &canonical,
        og,
        "/blog",
        body,
        site_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use brotech_core::DEFAULT_POST_IMAGE_URL;

    fn post(image_url: Option<&str>) -> BlogPost {
        let image = match image_url {
            Some(url) => format!(r#","imageUrl":"{url}""#),
            None => String::new(),
        };
        serde_json::from_str(&format!(
            r#"{{"title":"My First Post","author":"Alex Rivera","slug":"my-first-post","status":"published","content":"<p>Hello <strong>world</strong></p>","createdAt":"2026-01-05T10:00:00Z"{image}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn post_body_html_is_injected_unescaped() {
        let markup = render(
            &post(None),
            "https://brotech-web.dev",
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains("<p>Hello <strong>world</strong></p>"));
    }

    #[test]
    fn post_without_image_uses_default_placeholder() {
        let markup = render(
            &post(None),
            "https://brotech-web.dev",
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains(DEFAULT_POST_IMAGE_URL));
    }

    #[test]
    fn post_with_image_uses_it() {
        let markup = render(
            &post(Some("https://cdn.example.com/hero.jpg")),
            "https://brotech-web.dev",
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains("https://cdn.example.com/hero.jpg"));
        assert!(!markup.contains(DEFAULT_POST_IMAGE_URL));
    }

    #[test]
    fn post_byline_and_date() {
        let markup = render(
            &post(None),
            "https://brotech-web.dev",
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains("By Alex Rivera"));
        assert!(markup.contains("January 5, 2026"));
    }

    #[test]
    fn post_canonical_url_uses_slug() {
        let markup = render(
            &post(None),
            "https://brotech-web.dev",
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains(r#"href="https://brotech-web.dev/blog/my-first-post""#));
    }
}
