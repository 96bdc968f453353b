//! Per-request inputs: transport security, admin flag, and the request URL.

use crate::scheme::Scheme;

/// Read-only facts about the request being served, supplied by the host.
///
/// The host derives `secure` from its connection layer and `admin` from its
/// own routing (administrative screens skip the rendered-text rewrite).
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestState {
    /// Whether the request arrived over an encrypted connection.
    pub secure: bool,
    /// Whether the request is for an administrative screen.
    pub admin: bool,
}

impl RequestState {
    pub fn new(secure: bool, admin: bool) -> Self {
        Self { secure, admin }
    }

    /// Scheme matching this request's transport.
    pub fn scheme(self) -> Scheme {
        Scheme::from_secure(self.secure)
    }
}

/// Composes the full URL of the current request from host-provided parts.
/// Plain concatenation; no normalization is applied.
pub fn current_request_url(host: &str, path: &str, secure: bool) -> String {
    format!("{}://{}{}", Scheme::from_secure(secure), host, path)
}
