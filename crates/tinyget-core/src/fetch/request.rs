//! Serialization of the outgoing GET request.

use crate::url_model::Url;

/// Builds the HTTP/1.0 request for `url`: request line, `Host` header and the
/// blank line. No other headers and no body.
pub(crate) fn build_get(url: &Url) -> Vec<u8> {
    format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\n\r\n",
        url.path(),
        url.host()
    )
    .into_bytes()
}
