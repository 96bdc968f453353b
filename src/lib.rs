//! httpsify: keep URL schemes in step with the current transport.
//!
//! A CMS that is reachable over both `http://` and `https://` ends up with
//! mixed-scheme URLs in three places: option values (the configured site
//! URLs), rendered page output (links to the site itself inside post
//! content), and stored records (the permanent `guid` URL saved with each
//! post). This crate rewrites the scheme in all three so they match the
//! request's transport, leaving everything after the scheme untouched.
//!
//! The host runtime owns hook dispatch, option storage, persistence, and
//! admin detection; it constructs one [`SiteFilters`] per request and wires
//! its methods to the matching hook points. All rewrites are fail-open:
//! input that does not look like an absolute URL passes through unchanged,
//! and no operation ever errors or logs above debug level.

pub mod config;
pub mod logging;

pub mod filters;
pub mod normalize;
pub mod request;
pub mod scheme;

pub use config::SiteConfig;
pub use filters::SiteFilters;
pub use normalize::{
    rewrite_embedded_urls, set_record_field_scheme, set_url_scheme, EmbeddedRewriter,
};
pub use request::{current_request_url, RequestState};
pub use scheme::Scheme;
