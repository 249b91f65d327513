//! Administrator-facing diagnostic views.
//!
//! These render when content cannot be shown: missing API credential (setup
//! instructions) or a slug that resolved to nothing (troubleshooting panel,
//! optionally with the unpublished-status diagnostic). They are instructional
//! pages, not error dumps — the audience is the site's administrator.

use maud::{Markup, PreEscaped, html};

use super::components::{ICON_ALERT, OpenGraphData, page_shell};

/// Full page wrapping the setup-instructions panel, for content-backed routes
/// when the store client is disabled.
pub fn setup_page(active_nav: &str, base_url: &str, site_name: &str) -> Markup {
    let og = OpenGraphData {
        title: "Setup required",
        description: "This site is not fully configured yet.",
        og_type: "website",
        image: None,
    };
    page_shell(
        &format!("Setup required — {site_name}"),
        "This site is not fully configured yet.",
        &format!("{base_url}{active_nav}"),
        og,
        active_nav,
        setup_instructions(),
        site_name,
    )
}

/// The setup-instructions panel: how to configure the missing API key.
pub fn setup_instructions() -> Markup {
    html! {
        div class="setup-error" {
            div { (PreEscaped(ICON_ALERT)) }
            div {
                h3 { "Action Required: API Key is Missing" }
                div class="body" {
                    p {
                        "This part of the website cannot connect to the database because \
                         the required API key has not been configured in the deployment \
                         environment."
                    }
                    p { strong { "To fix this, follow these steps:" } }
                    ol {
                        li {
                            strong { "Step 1: Get the API key. " }
                            "Open your project in the content store console, find the web \
                             app configuration, and copy the API key value."
                        }
                        li {
                            strong { "Step 2: Add it to your deployment. " }
                            "In your hosting dashboard, go to Settings → Environment \
                             Variables and create a variable named "
                            code { "BROTECH_API_KEY" }
                            " with the key you copied."
                        }
                        li {
                            strong { "Step 3: Redeploy. " }
                            "Trigger a new deployment for the change to take effect."
                        }
                    }
                    p {
                        strong {
                            "Once you complete these steps, this message will disappear \
                             and the content will load correctly."
                        }
                    }
                }
            }
        }
    }
}

/// The post-not-found page, with the troubleshooting checklist and — when the
/// slug exists under a different status — the specific diagnostic.
pub fn not_found_page(
    slug: &str,
    diagnostic: Option<&str>,
    base_url: &str,
    site_name: &str,
) -> Markup {
    let og = OpenGraphData {
        title: "Post Not Found",
        description: "The post you are looking for does not exist or has not been published yet.",
        og_type: "website",
        image: None,
    };

    let body = html! {
        div class="panel" {
            h1 { "Post Not Found" }
            @if diagnostic.is_some() {
                p { "We found a problem with this post:" }
            } @else {
                p { "The post you are looking for does not exist or has not been published yet." }
            }

            @if let Some(text) = diagnostic {
                div class="diagnostic" { (text) }
            }

            (troubleshooting_guide())
        }
    };

    page_shell(
        &format!("Post Not Found — {site_name}"),
        "The post you are looking for does not exist or has not been published yet.",
        &format!("{base_url}/blog/{slug}"),
        og,
        "/blog",
        body,
        site_name,
    )
}

/// The administrator checklist shown under every not-found post.
fn troubleshooting_guide() -> Markup {
    html! {
        div class="troubleshoot" {
            h4 { "Troubleshooting Guide" }
            div class="troubleshoot-grid" {
                div {
                    h5 { "1. Check the " code { "slug" } " field:" }
                    ul {
                        li { "Must " strong { "exactly" } " match the URL." }
                        li { "No leading/trailing spaces." }
                        li { "Should be all lowercase." }
                        li { strong { "Example: " } code { "my-first-post" } }
                    }
                }
                div {
                    h5 { "2. Check the " code { "status" } " field:" }
                    ul {
                        li {
                            "Must be the lowercase string " code { "'published'" } "."
                        }
                        li class="bad" {
                            "Incorrect: " code { "'Published'" }
                        }
                    }
                }
            }
            div class="troubleshoot-footer" {
                h5 { "3. Check the " code { "imageUrl" } " field:" }
                ul {
                    li { "The field must contain a valid, publicly accessible image URL." }
                    li { "If the field is missing, a default placeholder image will be used." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_instructions_name_the_env_var() {
        let markup = setup_instructions().into_string();
        assert!(markup.contains("BROTECH_API_KEY"));
        assert!(markup.contains("API Key is Missing"));
        assert!(markup.contains("Redeploy"));
    }

    #[test]
    fn not_found_without_diagnostic_is_plain() {
        let markup = not_found_page(
            "missing-post",
            None,
            "https://brotech-web.dev",
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains("Post Not Found"));
        assert!(markup.contains("does not exist or has not been published"));
        assert!(!markup.contains(r#"<div class="diagnostic">"#));
        // The checklist is always shown.
        assert!(markup.contains("Troubleshooting Guide"));
    }

    #[test]
    fn not_found_with_diagnostic_shows_it() {
        let diagnostic = "A post with this slug was found, but it is not published. \
                          Its current status in the database is: \"Published\".";
        let markup = not_found_page(
            "my-first-post",
            Some(diagnostic),
            "https://brotech-web.dev",
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains("We found a problem with this post:"));
        assert!(markup.contains("&quot;Published&quot;"));
    }

    #[test]
    fn troubleshooting_guide_covers_all_three_checks() {
        let markup = troubleshooting_guide().into_string();
        assert!(markup.contains("slug"));
        assert!(markup.contains("'published'"));
        assert!(markup.contains("'Published'"));
        assert!(markup.contains("imageUrl"));
    }

    #[test]
    fn setup_page_renders_full_document() {
        let markup = setup_page("/blog", "https://brotech-web.dev", "BroTech Web Solutions")
            .into_string();
        assert!(markup.contains("<!DOCTYPE html>"));
        assert!(markup.contains("Setup required"));
        assert!(markup.contains("BROTECH_API_KEY"));
    }
}
