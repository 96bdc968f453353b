//! Host extension-point surface.
//!
//! The host CMS owns hook dispatch; it builds one [`SiteFilters`] per request
//! and wires these methods to its filter points: base-URL resolution, the
//! admin configuration keys, attachment URL resolution, front-end text
//! rendering, and record pre-persistence.

use crate::config::SiteConfig;
use crate::normalize::{set_record_field_scheme, set_url_scheme, EmbeddedRewriter};
use crate::request::RequestState;
use crate::scheme::Scheme;
use serde_json::{Map, Value};
use std::cell::OnceCell;

/// Per-request filter context: one site configuration plus the facts about
/// the request being served.
///
/// Owns the memoized [`EmbeddedRewriter`] for the rendering filters, so the
/// correct/incorrect base pair is computed at most once per request and
/// dropped with the context at request end.
pub struct SiteFilters {
    config: SiteConfig,
    request: RequestState,
    rewriter: OnceCell<EmbeddedRewriter>,
}

impl SiteFilters {
    pub fn new(config: SiteConfig, request: RequestState) -> Self {
        Self {
            config,
            request,
            rewriter: OnceCell::new(),
        }
    }

    /// Base-URL resolution: the public base URL is always forced to HTTPS.
    ///
    /// Intentionally unconditional, unlike [`admin_option_url`]: public pages
    /// get the secure scheme whether or not the admin flag is set.
    ///
    /// [`admin_option_url`]: Self::admin_option_url
    pub fn home_url(&self, url: &str) -> String {
        set_url_scheme(url, Scheme::Https)
    }

    /// Configuration-key resolution (site home, site URL, install URL):
    /// forced to HTTPS only when the secure-admin flag is set.
    pub fn admin_option_url(&self, url: &str) -> String {
        if !self.config.force_admin_https {
            return url.to_string();
        }
        set_url_scheme(url, Scheme::Https)
    }

    /// Attachment/media URL resolution: match the current transport scheme.
    pub fn attachment_url(&self, url: &str) -> String {
        set_url_scheme(url, self.request.scheme())
    }

    /// Rendered-text filter for content, excerpts, comment text, and
    /// comment-author links. Replaces wrong-scheme occurrences of the site's
    /// own base URL. Front-end only: admin screens pass through unchanged.
    pub fn render(&self, text: &str) -> String {
        if self.request.admin {
            return text.to_string();
        }
        let rewriter = self.rewriter.get_or_init(|| {
            tracing::debug!(
                base = %self.config.home_url,
                scheme = %self.request.scheme(),
                "building embedded-url rewriter"
            );
            EmbeddedRewriter::new(&self.config.home_url, self.request.scheme())
        });
        rewriter.rewrite(text)
    }

    /// Pre-persistence filter: force the record's `guid` URL to HTTPS before
    /// the content item is saved.
    pub fn pre_persist_record(&self, record: Map<String, Value>) -> Map<String, Value> {
        set_record_field_scheme(record, "guid", Scheme::Https)
    }
}
