//! Static site content: services, testimonials, portfolio projects.
//!
//! This is marketing copy carried in the binary, edited in code review like
//! everything else. Only blog posts and impact numbers live in the content
//! store.

/// A service the agency offers.
pub struct Service {
    /// Short service name.
    pub title: &'static str,
    /// One-paragraph pitch.
    pub description: &'static str,
}

/// Services shown on the home page (first six) and the services page (all).
pub const SERVICES: &[Service] = &[
    Service {
        title: "Custom Web Development",
        description: "Hand-built websites and web applications, engineered for \
                      speed, accessibility, and long-term maintainability.",
    },
    Service {
        title: "E-Commerce Solutions",
        description: "Online stores with secure checkout, inventory management, \
                      and the conversion-focused details that move the needle.",
    },
    Service {
        title: "AI Integrations",
        description: "Practical AI features — chat assistants, content tooling, \
                      smart search — wired into your existing product.",
    },
    Service {
        title: "UI & UX Design",
        description: "Interfaces your customers actually enjoy: research, \
                      wireframes, and polished visual design.",
    },
    Service {
        title: "SEO & Performance",
        description: "Technical SEO audits and performance work that gets you \
                      found and keeps visitors around.",
    },
    Service {
        title: "Care & Maintenance",
        description: "Updates, monitoring, and support plans so your site keeps \
                      working while you run your business.",
    },
];

/// A client quote for the home-page carousel.
pub struct Testimonial {
    /// The quote, without surrounding quotation marks.
    pub quote: &'static str,
    /// Client name.
    pub author: &'static str,
    /// Client company.
    pub company: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "BroTech rebuilt our storefront in six weeks and our conversion \
                rate has never looked better. They felt like part of our team.",
        author: "Maya Okafor",
        company: "Harvest & Hearth",
    },
    Testimonial {
        quote: "Clear communication, honest estimates, and a site that just \
                works. We've already hired them for phase two.",
        author: "Daniel Kim",
        company: "Summit Physio",
    },
    Testimonial {
        quote: "The AI assistant they integrated handles half of our support \
                volume. Genuinely transformative for a team our size.",
        author: "Priya Nair",
        company: "Lumen Analytics",
    },
];

/// A portfolio entry.
pub struct Project {
    /// Project name.
    pub title: &'static str,
    /// What was built.
    pub description: &'static str,
    /// Short stack/discipline tags.
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Harvest & Hearth",
        description: "E-commerce storefront for an artisan food brand, with \
                      subscriptions and wholesale ordering.",
        tags: &["E-Commerce", "Design", "SEO"],
    },
    Project {
        title: "Summit Physio",
        description: "Clinic website with online booking and a patient \
                      resource library.",
        tags: &["Web Development", "Booking"],
    },
    Project {
        title: "Lumen Analytics",
        description: "Marketing site and in-app AI assistant for a B2B \
                      analytics startup.",
        tags: &["AI Integration", "Web Development"],
    },
    Project {
        title: "Northside Makers",
        description: "Community marketplace connecting local makers with \
                      buyers across the city.",
        tags: &["Marketplace", "Design"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_has_six_services_to_show() {
        assert!(SERVICES.len() >= 6);
    }

    #[test]
    fn testimonials_nonempty_for_carousel() {
        // The carousel advances modulo the slide count; zero slides would
        // leave nothing to rotate.
        assert!(!TESTIMONIALS.is_empty());
    }

    #[test]
    fn projects_have_tags() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        }
    }
}
