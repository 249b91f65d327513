//! Shared HTML components used across all site pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all site pages.
///
/// Indigo-on-white brand, dark mode via `prefers-color-scheme`. Kept inline so
/// every page is a single request.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fff;--fg:#1f2937;--fg2:#6b7280;--fg3:#9ca3af;--primary:#4f46e5;--primary-hover:#4338ca;--card:#f9fafb;--border:#e5e7eb;--dark-panel:#111827;--mono:ui-monospace,SFMono-Regular,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg)}
a{color:var(--primary);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%}
svg.icon{width:24px;height:24px;stroke:currentColor;fill:none;stroke-width:2;stroke-linecap:round;stroke-linejoin:round;vertical-align:-5px}

.nav{position:sticky;top:0;z-index:50;background:var(--bg);border-bottom:1px solid var(--border);padding:0 1.5rem}
.nav-inner{max-width:1100px;margin:0 auto;display:flex;align-items:center;justify-content:space-between;height:64px}
.nav-logo{font-weight:800;font-size:1.2rem;color:var(--fg);letter-spacing:-.02em}
.nav-logo span{color:var(--primary)}
.nav-logo:hover{text-decoration:none}
.nav-links{display:flex;gap:1.5rem;font-size:.95rem}
.nav-links a{color:var(--fg2)}
.nav-links a.active,.nav-links a:hover{color:var(--primary);text-decoration:none}

.section{max-width:1100px;margin:0 auto;padding:4rem 1.5rem}
.section-title{font-size:2rem;font-weight:700;text-align:center;margin-bottom:.5rem}
.section-lede{text-align:center;color:var(--fg2);max-width:640px;margin:0 auto 3rem}

.hero{background:var(--dark-panel);color:#fff;text-align:center;padding:7rem 1.5rem 6rem}
.hero h1{font-size:3rem;font-weight:800;line-height:1.15;margin-bottom:1rem}
.hero p{font-size:1.15rem;color:#d1d5db;max-width:680px;margin:0 auto 2rem}
.hero-actions{display:flex;gap:1rem;justify-content:center;flex-wrap:wrap}
.btn{display:inline-block;padding:.75rem 2rem;border-radius:6px;font-weight:600;font-size:1rem}
.btn-primary{background:var(--primary);color:#fff}
.btn-primary:hover{background:var(--primary-hover);text-decoration:none}
.btn-outline{border:2px solid #fff;color:#fff}
.btn-outline:hover{background:#fff;color:var(--primary);text-decoration:none}

.card-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:2rem}
.card{background:var(--card);border:1px solid var(--border);border-radius:10px;padding:2rem}
.card h3{font-size:1.2rem;margin-bottom:.5rem}
.card p{color:var(--fg2)}
.card .tags{margin-top:1rem;display:flex;gap:.5rem;flex-wrap:wrap}
.card .tag{font-size:.75rem;font-weight:600;color:var(--primary);background:var(--bg);border:1px solid var(--border);border-radius:100px;padding:.15rem .6rem}
.view-all{display:flex;justify-content:center;margin-top:3rem;font-weight:600}

.impact{background:var(--dark-panel);color:#fff}
.impact .section-title{color:#fff}
.impact-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:2rem;max-width:860px;margin:0 auto;text-align:center}
.impact-item svg.icon{width:40px;height:40px;color:var(--primary)}
.impact-value{font-size:3rem;font-weight:700;font-variant-numeric:tabular-nums}
.impact-label{font-size:1.05rem;color:#9ca3af}

.testimonials{background:var(--card)}
.carousel{position:relative;max-width:720px;margin:0 auto;min-height:180px;text-align:center}
.testimonial{position:absolute;inset:0;opacity:0;transition:opacity .5s;pointer-events:none}
.testimonial.active{opacity:1;pointer-events:auto}
.testimonial blockquote{font-style:italic;font-size:1.1rem;color:var(--fg2);margin-bottom:1rem}
.testimonial .who{font-weight:700}
.testimonial .company{font-size:.9rem;color:var(--primary)}
.carousel-btn{position:absolute;top:50%;transform:translateY(-50%);background:var(--bg);border:1px solid var(--border);border-radius:50%;width:40px;height:40px;cursor:pointer;color:var(--fg);display:flex;align-items:center;justify-content:center}
.carousel-btn:hover{background:var(--border)}
.carousel-btn.prev{left:-3rem}
.carousel-btn.next{right:-3rem}
@media(max-width:860px){.carousel-btn.prev{left:0}.carousel-btn.next{right:0}}

.post-hero{position:relative;height:340px}
.post-hero img{width:100%;height:100%;object-fit:cover}
.post-hero::after{content:"";position:absolute;inset:0;background:rgba(0,0,0,.6)}
.article{max-width:760px;margin:0 auto;padding:3rem 1.5rem}
.article-header{text-align:center;border-bottom:1px solid var(--border);padding-bottom:2rem;margin-bottom:2rem}
.article-header h1{font-size:2.4rem;font-weight:800;margin-bottom:1rem}
.article-byline{color:var(--fg2)}

.prose{font-size:1.05rem;line-height:1.75;color:var(--fg)}
.prose h1,.prose h2,.prose h3,.prose h4,.prose h5,.prose h6{color:inherit;font-weight:700;margin-top:2em;margin-bottom:1em}
.prose p{line-height:1.75;margin-bottom:1.25em}
.prose a{color:var(--primary);text-decoration:underline}
.prose blockquote{border-left:4px solid #c7d2fe;padding-left:1rem;font-style:italic;color:var(--fg2)}
.prose ul,.prose ol{margin-left:1.5rem;margin-bottom:1.25em}
.prose li{margin-bottom:.5em}
.prose code{background:var(--border);padding:.2em .4em;border-radius:4px;font-size:.9em;font-family:var(--mono)}
.prose img{border-radius:8px}

.post-list{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:2rem;align-items:start}
.post-card{background:var(--card);border:1px solid var(--border);border-radius:10px;overflow:hidden;display:block;color:var(--fg)}
.post-card:hover{text-decoration:none;border-color:var(--primary)}
.post-card img{width:100%;height:180px;object-fit:cover}
.post-card-body{padding:1.25rem}
.post-card h3{font-size:1.15rem;margin-bottom:.4rem}
.post-card .meta{font-size:.85rem;color:var(--fg3);margin-bottom:.6rem}
.post-card p{color:var(--fg2);font-size:.95rem}

.panel{max-width:860px;margin:3rem auto;padding:0 1.5rem;text-align:center}
.panel h1{font-size:1.9rem;font-weight:700;margin-bottom:1rem}
.panel>p{font-size:1.1rem;color:var(--fg2);max-width:640px;margin:0 auto}
.diagnostic{margin:1.5rem auto 0;max-width:720px;background:#fee2e2;color:#b91c1c;font-weight:600;padding:1rem;border-radius:8px}
.troubleshoot{margin-top:2rem;background:var(--card);border:1px solid var(--border);border-radius:10px;padding:1.5rem;text-align:left}
.troubleshoot h4{margin-bottom:.5rem}
.troubleshoot-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:1rem 1.5rem;margin-top:1rem;font-size:.9rem}
.troubleshoot h5{margin-bottom:.5rem}
.troubleshoot ul{list-style:disc;padding-left:1.25rem;color:var(--fg2)}
.troubleshoot li{margin-bottom:.25rem}
.troubleshoot .bad{color:#dc2626}
.troubleshoot code{background:var(--border);padding:.1em .35em;border-radius:4px;font-size:.85em;font-family:var(--mono)}
.troubleshoot-footer{margin-top:1rem;padding-top:1rem;border-top:1px solid var(--border)}

.setup-error{max-width:860px;margin:3rem auto;background:#fef2f2;border-left:4px solid #ef4444;border-radius:0 8px 8px 0;padding:1.5rem;display:flex;gap:1rem;text-align:left}
.setup-error svg.icon{color:#ef4444;flex-shrink:0}
.setup-error h3{color:#991b1b;font-size:1.1rem;margin-bottom:.5rem}
.setup-error .body{color:#b91c1c;font-size:.9rem}
.setup-error .body p{margin-bottom:.75rem}
.setup-error ol{padding-left:1.25rem}
.setup-error li{margin-bottom:.75rem}
.setup-error code{background:#fecaca;padding:.1em .35em;border-radius:4px;font-size:.85em;font-family:var(--mono)}

.footer{border-top:1px solid var(--border);padding:2rem 1.5rem;text-align:center;color:var(--fg3);font-size:.9rem}
.footer a{color:var(--fg2)}

@media(prefers-color-scheme:dark){
:root{--bg:#0b1120;--fg:#e5e7eb;--fg2:#9ca3af;--fg3:#6b7280;--card:#111827;--border:#1f2937;--dark-panel:#030712}
.diagnostic{background:rgba(153,27,27,.35);color:#fca5a5}
.setup-error{background:rgba(127,29,29,.2)}
.setup-error h3{color:#fca5a5}
.setup-error .body{color:#f87171}
.setup-error code{background:rgba(153,27,27,.5)}
.prose blockquote{border-left-color:var(--primary);color:var(--fg3)}
}
"#;

/// Inline CSS for bare error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fff;color:#1f2937;padding:1rem}
.error-page{text-align:center;max-width:480px}
.error-page h1{font-size:1.6rem;color:#dc2626;margin-bottom:.75rem}
.error-page p{color:#6b7280;margin-bottom:1rem;line-height:1.6}
.error-page a{color:#4f46e5}
@media(prefers-color-scheme:dark){
body{background:#0b1120;color:#e5e7eb}
.error-page p{color:#9ca3af}
}
"#;

/// Content-Security-Policy header value.
///
/// Inline style and script only (the carousel and counters are small inline
/// scripts); images from HTTPS; no frames.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src https: data:; connect-src 'self'; form-action 'none'; frame-ancestors 'none'";

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// OG type (e.g., "website", "article").
    pub og_type: &'a str,
    /// OG image URL (must be HTTPS).
    pub image: Option<&'a str>,
}

/// Render the full HTML page shell with `<head>`, OG tags, nav, and footer.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: &str,
    og: OpenGraphData<'_>,
    active_nav: &str,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);

                // Open Graph
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og.og_type);
                @if let Some(image) = og.image {
                    meta property="og:image" content=(image);
                    meta name="twitter:card" content="summary_large_image";
                    meta name="twitter:image" content=(image);
                } @else {
                    meta name="twitter:card" content="summary";
                }

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (site_nav(active_nav, site_name))
                main { (body_content) }
                (site_footer(site_name))
            }
        }
    }
}

/// Top navigation bar. `active` is the path of the current page.
pub fn site_nav(active: &str, site_name: &str) -> Markup {
    let links = [
        ("/", "Home"),
        ("/services", "Services"),
        ("/portfolio", "Portfolio"),
        ("/blog", "Blog"),
    ];

    html! {
        nav class="nav" {
            div class="nav-inner" {
                a class="nav-logo" href="/" title=(site_name) {
                    "Bro" span { "Tech" }
                }
                div class="nav-links" {
                    @for (href, label) in links {
                        a href=(href) class=[(active == href).then_some("active")] {
                            (label)
                        }
                    }
                }
            }
        }
    }
}

/// Site footer.
pub fn site_footer(site_name: &str) -> Markup {
    html! {
        footer class="footer" {
            "© " (site_name) ". Your vision, our code."
        }
    }
}

// -- Lucide-style icon SVGs (stroke variants) --

/// Lightning bolt (projects completed).
pub const ICON_ZAP: &str = r#"<svg class="icon" viewBox="0 0 24 24"><polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/></svg>"#;

/// Two users (happy clients).
pub const ICON_USERS: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/></svg>"#;

/// Award ribbon (years of experience).
pub const ICON_AWARD: &str = r#"<svg class="icon" viewBox="0 0 24 24"><circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/></svg>"#;

/// Chevron left (previous testimonial).
pub const ICON_CHEVRON_LEFT: &str = r#"<svg class="icon" viewBox="0 0 24 24"><polyline points="15 18 9 12 15 6"/></svg>"#;

/// Chevron right (next testimonial).
pub const ICON_CHEVRON_RIGHT: &str = r#"<svg class="icon" viewBox="0 0 24 24"><polyline points="9 18 15 12 9 6"/></svg>"#;

/// Alert triangle (setup error).
pub const ICON_ALERT: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/></svg>"#;

/// Arrow right (view-all links).
pub const ICON_ARROW_RIGHT: &str = r#"<svg class="icon" viewBox="0 0 24 24"><line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/></svg>"#;

/// One animated counter tile for the impact section.
///
/// Renders the final value server-side; a small inline script on the home
/// page counts it up on load.
pub fn impact_counter(icon: &str, target: u32, label: &str) -> Markup {
    html! {
        div class="impact-item" {
            div { (PreEscaped(icon)) }
            p class="impact-value" data-count=(target) { (target) "+" }
            p class="impact-label" { (label) }
        }
    }
}

/// Truncate a string to at most `max` characters, appending an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Strip HTML tags from a fragment, for plain-text excerpts and descriptions.
///
/// Posts are stored as HTML; excerpts and OG descriptions need text.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                if in_tag {
                    in_tag = false;
                    // Keep words from adjacent elements separated.
                    if !out.ends_with(char::is_whitespace) && !out.is_empty() {
                        out.push(' ');
                    }
                }
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_string_gets_ellipsis() {
        let result = truncate("hello wonderful world", 10);
        assert!(result.ends_with('…'));
        assert!(result.chars().count() <= 10);
    }

    #[test]
    fn truncate_multibyte_safe() {
        let result = truncate("héllö wörld with ümlauts everywhere", 12);
        assert!(result.ends_with('…'));
    }

    #[test]
    fn strip_tags_plain_text_unchanged() {
        assert_eq!(strip_tags("no tags here"), "no tags here");
    }

    #[test]
    fn strip_tags_removes_elements() {
        assert_eq!(
            strip_tags("<p>Hello <strong>world</strong></p>"),
            "Hello world"
        );
    }

    #[test]
    fn strip_tags_separates_adjacent_blocks() {
        let text = strip_tags("<h2>Title</h2><p>Body text.</p>");
        assert!(text.contains("Title Body"));
    }

    #[test]
    fn strip_tags_empty_input() {
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn nav_marks_active_link() {
        let markup = site_nav("/blog", "BroTech Web Solutions").into_string();
        assert!(markup.contains(r#"href="/blog" class="active""#));
        assert!(!markup.contains(r#"href="/services" class="active""#));
    }

    #[test]
    fn impact_counter_renders_target_and_label() {
        let markup = impact_counter(ICON_ZAP, 12, "Projects Completed").into_string();
        assert!(markup.contains("data-count=\"12\""));
        assert!(markup.contains("12+"));
        assert!(markup.contains("Projects Completed"));
    }

    #[test]
    fn page_shell_includes_og_and_nav() {
        let og = OpenGraphData {
            title: "BroTech",
            description: "Web solutions",
            og_type: "website",
            image: None,
        };
        let markup = page_shell(
            "BroTech",
            "Web solutions",
            "https://brotech-web.dev/",
            og,
            "/",
            html! { p { "body" } },
            "BroTech Web Solutions",
        )
        .into_string();
        assert!(markup.contains("og:site_name"));
        assert!(markup.contains(r#"<nav class="nav">"#));
        assert!(markup.contains("<p>body</p>"));
        assert!(markup.contains(r#"content="summary""#));
    }
}
