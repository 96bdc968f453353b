//! Single-URL scheme rewrite.

use crate::scheme::Scheme;
use url::Url;

/// Rewrites the scheme of `url` to `target`, leaving host, path, query, and
/// fragment byte-for-byte untouched.
///
/// - Scheme-relative input (`//host/...`) is prefixed with the target scheme.
/// - Input that does not parse as a URL with a host is returned unchanged.
///
/// The rewrite works on the original string rather than re-serializing the
/// parsed URL, so it never introduces normalization artifacts such as a
/// trailing slash on `http://example.com`. Idempotent: applying it twice with
/// the same target equals applying it once.
pub fn set_url_scheme(url: &str, target: Scheme) -> String {
    if url.starts_with("//") {
        let candidate = format!("{}:{}", target.as_str(), url);
        return match Url::parse(&candidate) {
            Ok(parsed) if parsed.has_host() => candidate,
            _ => url.to_string(),
        };
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return url.to_string(),
    };
    if !parsed.has_host() {
        return url.to_string();
    }
    if parsed.scheme() == target.as_str() {
        return url.to_string();
    }

    // The scheme token is everything before the first ':' (the parse above
    // guarantees one exists).
    match url.find(':') {
        Some(idx) => format!("{}{}", target.as_str(), &url[idx..]),
        None => url.to_string(),
    }
}
