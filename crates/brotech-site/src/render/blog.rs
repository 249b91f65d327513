//! Blog index page: published posts, newest first.

use brotech_core::BlogPost;
use maud::{Markup, html};

use super::components::{OpenGraphData, page_shell, strip_tags, truncate};

/// Render the blog index.
pub fn render(posts: &[BlogPost], base_url: &str, site_name: &str) -> Markup {
    let description = "Notes on web development, design, and running a small agency.";

    let og = OpenGraphData {
        title: "Blog",
        description,
        og_type: "website",
        image: None,
    };

    let body = html! {
        section class="section" {
            h2 class="section-title" { "From the Blog" }
            p class="section-lede" { (description) }

            @if posts.is_empty() {
                div class="panel" {
                    p { "No posts yet — check back soon." }
                }
            } @else {
                div class="post-list" {
                    @for post in posts {
                        a class="post-card" href=(format!("/blog/{}", post.slug)) {
                            img src=(post.image_url()) alt=(post.title) loading="lazy";
                            div class="post-card-body" {
                                h3 { (post.title) }
                                p class="meta" {
                                    "By " (post.author) " • " (post.display_date())
                                }
                                p { (truncate(&strip_tags(&post.content), 140)) }
                            }
                        }
                    }
                }
            }
        }
    };

    page_shell(
        &format!("Blog — {site_name}"),
        description,
        &format!("{base_url}/blog"),
        og,
        "/blog",
        body,
        site_name,
    )
}
