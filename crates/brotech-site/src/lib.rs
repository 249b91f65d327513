//! BroTech Web Solutions — marketing website server.
//!
//! A small server-rendered site (home, blog, services, portfolio) for a
//! web-development agency. Blog posts and the home page's impact numbers are
//! read per request from a hosted document store; everything else is carried
//! static content.
//!
//! # Architecture
//!
//! - **Config**: environment-resolved settings; the store credential is the
//!   one required value, everything else has a fixed fallback.
//! - **State**: shared [`AppState`] holding the store handle and config.
//! - **Routes**: one handler per page, each converting lookup outcomes into
//!   rendered HTML states — including the administrator-facing setup and
//!   troubleshooting views when the store is misconfigured.
//! - **Render**: [maud](https://maud.lambda.xyz/) compile-time templates;
//!   all dynamic values are escaped, except post bodies, which the store
//!   owner authors as HTML.
//!
//! # URL pattern
//!
//! ```text
//! GET /                 Home (impact numbers, testimonials)
//! GET /blog             Published posts, newest first
//! GET /blog/{slug}      Single post, or a diagnostic page
//! GET /services         Static services page
//! GET /portfolio        Static portfolio page
//! GET /health           JSON health probe
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
