//! Error type for URL parsing.

use thiserror::Error;

use super::Scheme;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token before the first `:` is non-empty and not a known scheme.
    #[error("unrecognized URL scheme `{0}`")]
    InvalidScheme(String),
    /// A network-style scheme was not followed by `//`.
    #[error("malformed URL: expected `//` after `{scheme}:`")]
    MissingAuthorityMarker { scheme: Scheme },
}
