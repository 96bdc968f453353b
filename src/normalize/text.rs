//! Embedded-URL rewrite for rendered text.
//!
//! Deliberately narrow: only occurrences of the site's own base URL with the
//! wrong scheme are replaced, so third-party links are never touched. The
//! replacement is a literal substring substitution, not a regex.

use crate::normalize::url::set_url_scheme;
use crate::scheme::Scheme;

/// Precomputed correct/incorrect base-URL pair for one request.
///
/// Rendering filters run many times per page (content, excerpt, each
/// comment), so the pair is computed once and the rewriter reused. Owned by
/// the per-request filter context rather than any process-global cache, so a
/// worker serving requests with different transport states cannot leak one
/// request's scheme into another.
#[derive(Debug, Clone)]
pub struct EmbeddedRewriter {
    correct: String,
    incorrect: String,
}

impl EmbeddedRewriter {
    /// Builds a rewriter that fixes occurrences of `base` carrying the
    /// opposite of `target`.
    pub fn new(base: &str, target: Scheme) -> Self {
        Self {
            correct: set_url_scheme(base, target),
            incorrect: set_url_scheme(base, target.opposite()),
        }
    }

    /// Replaces every occurrence of the wrong-scheme base URL in `text`.
    pub fn rewrite(&self, text: &str) -> String {
        // A malformed base yields correct == incorrect; replacing would be a
        // no-op but still allocate per call.
        if self.incorrect == self.correct {
            return text.to_string();
        }
        text.replace(&self.incorrect, &self.correct)
    }
}

/// One-shot form of [`EmbeddedRewriter`] for callers outside a request
/// context.
pub fn rewrite_embedded_urls(text: &str, base: &str, target: Scheme) -> String {
    EmbeddedRewriter::new(base, target).rewrite(text)
}
