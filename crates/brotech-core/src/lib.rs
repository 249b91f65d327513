//! Content model and lookup flows for the BroTech marketing site.
//!
//! The site's content (blog posts, impact numbers) lives in a hosted document
//! database owned by an external content store; this crate is the read-only
//! client side of that relationship:
//!
//! - **Store**: a thin JSON client for the store's REST API, wrapped in a
//!   [`StoreHandle`] that is resolved from configuration at process start and
//!   is explicitly unavailable when the API credential is missing.
//! - **Model**: the wire types ([`BlogPost`], [`ImpactNumbers`]) plus their
//!   fallback constants.
//! - **Lookup**: the post-by-slug flow with its diagnostic probe for
//!   unpublished posts, the published-post listing, and the impact-numbers
//!   fetch that silently degrades to defaults.
//!
//! Nothing in this crate renders HTML or owns an HTTP server; that lives in
//! `brotech-site`.

pub mod error;
pub mod lookup;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use lookup::{PostLookup, fetch_impact_numbers, find_post, list_published_posts};
pub use model::{BlogPost, DEFAULT_IMPACT_NUMBERS, DEFAULT_POST_IMAGE_URL, ImpactNumbers};
pub use store::{ContentStore, StoreConfig, StoreHandle};
