//! URL modeling: decomposes a URL string into scheme, host and path.
//!
//! Only the structure needed for a plain GET is extracted. Query strings,
//! fragments, userinfo and ports are not interpreted: whatever follows the
//! host ends up verbatim in the path.

mod error;
mod scheme;

pub use error::ParseError;
pub use scheme::Scheme;

use std::fmt;
use std::str::FromStr;

/// Authority marker that network schemes carry between `scheme:` and the host.
const AUTHORITY_MARKER: &str = "//";

/// A parsed URL. Built once by [`parse`] and immutable afterwards.
///
/// `path` always starts with `/` and `host` never contains one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    scheme: Scheme,
    host: String,
    path: String,
}

impl Url {
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scheme = {}, host = {}, path = {}",
            self.scheme, self.host, self.path
        )
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses `input` into a [`Url`].
///
/// Splitting always uses the first occurrence of a delimiter: the scheme ends
/// at the first `:`, the host at the first `/` after it. Without any `:` the
/// whole input is taken as the scheme token and the remainder is empty, so a
/// bare `http` fails for lack of `//`. Only the empty input is exempt and
/// resolves to `{file, "", "/"}`.
///
/// # Examples
///
/// - `parse("http://example.org/foo")` → `{http, "example.org", "/foo"}`
/// - `parse("https://example.org")` → `{https, "example.org", "/"}`
/// - `parse("bogus://x")` → `Err(InvalidScheme("bogus"))`
pub fn parse(input: &str) -> Result<Url, ParseError> {
    let (token, rest) = input.split_once(':').unwrap_or((input, ""));

    let scheme = Scheme::from_token(token);
    if scheme == Scheme::Invalid {
        return Err(ParseError::InvalidScheme(token.to_string()));
    }

    // The empty input is the bare "no scheme" default and carries no marker.
    let rest = if !input.is_empty() && scheme.requires_authority() {
        rest.strip_prefix(AUTHORITY_MARKER)
            .ok_or(ParseError::MissingAuthorityMarker { scheme })?
    } else {
        rest
    };

    let (host, path_tail) = rest.split_once('/').unwrap_or((rest, ""));

    Ok(Url {
        scheme,
        host: host.to_string(),
        path: format!("/{path_tail}"),
    })
}
