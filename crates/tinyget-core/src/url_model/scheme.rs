//! URL scheme tags and their per-scheme policy.

use std::fmt;

/// Recognised URL schemes.
///
/// `Invalid` is a resolution sentinel only: [`Scheme::from_token`] may return
/// it, but the parser turns it into an error, so a [`super::Url`] never holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    None,
    Http,
    Https,
    File,
    Data,
    ViewSource,
    About,
    Invalid,
}

/// Name table used for both lookup and display. Matching is exact and case-sensitive.
const SCHEME_NAMES: [(Scheme, &str); 8] = [
    (Scheme::None, "none"),
    (Scheme::Http, "http"),
    (Scheme::Https, "https"),
    (Scheme::File, "file"),
    (Scheme::Data, "data"),
    (Scheme::ViewSource, "view_source"),
    (Scheme::About, "about"),
    (Scheme::Invalid, "invalid"),
];

impl Scheme {
    /// Resolves the token that precedes the first `:`.
    ///
    /// An empty token means "no scheme" and resolves to [`Scheme::File`];
    /// anything not in the name table resolves to [`Scheme::Invalid`].
    pub fn from_token(token: &str) -> Self {
        if token.is_empty() {
            return Scheme::File;
        }
        SCHEME_NAMES
            .iter()
            .find(|(_, name)| *name == token)
            .map(|(scheme, _)| *scheme)
            .unwrap_or(Scheme::Invalid)
    }

    pub fn name(self) -> &'static str {
        SCHEME_NAMES
            .iter()
            .find(|(scheme, _)| *scheme == self)
            .map(|(_, name)| *name)
            .unwrap_or("invalid")
    }

    /// True for schemes whose remainder must start with the `//` authority marker.
    pub fn requires_authority(self) -> bool {
        matches!(self, Scheme::Http | Scheme::Https | Scheme::File)
    }

    /// Well-known port for network schemes.
    pub fn default_port(self) -> Option<u16> {
        match self {
            Scheme::Http => Some(80),
            Scheme::Https => Some(443),
            _ => None,
        }
    }

    /// True when the scheme can be served over an unencrypted TCP stream.
    /// `https` is excluded: there is no TLS layer.
    pub fn is_plaintext_network(self) -> bool {
        self == Scheme::Http
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
