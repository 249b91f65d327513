//! Portfolio page.

use maud::{Markup, html};

use super::components::{OpenGraphData, page_shell};
use crate::content::PROJECTS;

/// Render the portfolio grid.
pub fn render(base_url: &str, site_name: &str) -> Markup {
    let description = "A selection of recent projects we are proud of.";

    let og = OpenGraphData {
        title: "Portfolio",
        description,
        og_type: "website",
        image: None,
    };

    let body = html! {
        section class="section" {
            h2 class="section-title" { "Our Work" }
            p class="section-lede" { (description) }
            div class="card-grid" {
                @for project in PROJECTS {
                    div class="card" {
                        h3 { (project.title) }
                        p { (project.description) }
                        div class="tags" {
                            @for tag in project.tags {
                                span class="tag" { (tag) }
                            }
                        }
                    }
                }
            }
        }
    };

    page_shell(
        &format!("Portfolio — {site_name}"),
        description,
        &format!("{base_url}/portfolio"),
        og,
        "/portfolio",
        body,
        site_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_lists_projects_and_tags() {
        let markup = render("https://brotech-web.dev", "BroTech Web Solutions").into_string();
        for project in PROJECTS {
            assert!(markup.contains(project.title));
        }
        assert!(markup.contains(r#"<span class="tag">"#));
    }
}
