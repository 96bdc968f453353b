//! Scheme rewrites: single URLs, embedded URLs in text, and record fields.
//!
//! Every operation here is a pure value transform with fail-open semantics:
//! input that cannot be recognized as an absolute URL is returned unchanged.
//! These rewrites are cosmetic corrections that run inside page rendering and
//! record saving, so they must never fail either path.

mod record;
mod text;
mod url;

pub use record::set_record_field_scheme;
pub use text::{rewrite_embedded_urls, EmbeddedRewriter};
pub use url::set_url_scheme;
