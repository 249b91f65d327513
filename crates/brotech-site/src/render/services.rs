//! Services page.

use maud::{Markup, html};

use super::components::{OpenGraphData, page_shell};
use crate::content::SERVICES;

/// Render the full services listing.
pub fn render(base_url: &str, site_name: &str) -> Markup {
    let description = "A comprehensive suite of services to meet all your digital needs.";

    let og = OpenGraphData {
        title: "Services",
        description,
        og_type: "website",
        image: None,
    };

    let body = html! {
        section class="section" {
            h2 class="section-title" { "Our Services" }
            p class="section-lede" { (description) }
            div class="card-grid" {
                @for service in SERVICES {
                    div class="card" {
                        h3 { (service.title) }
                        p { (service.description) }
                    }
                }
            }
        }
    };

    page_shell(
        &format!("Services — {site_name}"),
        description,
        &format!("{base_url}/services"),
        og,
        "/services",
        body,
        site_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_page_lists_every_service() {
        let markup = render("https://brotech-web.dev", "BroTech Web Solutions").into_string();
        for service in SERVICES {
            assert!(markup.contains(service.title));
        }
    }
}
