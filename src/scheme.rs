//! Transport scheme: the two schemes this crate rewrites between.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target URL scheme for a rewrite.
///
/// Computed from the request's transport state ([`Scheme::from_secure`]) or
/// fixed at `Https` for the hook points that force the secure scheme
/// unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Scheme matching the current connection: `Https` when the request
    /// arrived over an encrypted transport.
    pub fn from_secure(secure: bool) -> Self {
        if secure {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }

    /// The other scheme. Used to build the "incorrect" base URL that the
    /// embedded rewrite replaces.
    pub fn opposite(self) -> Self {
        match self {
            Scheme::Http => Scheme::Https,
            Scheme::Https => Scheme::Http,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
