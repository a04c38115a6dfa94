//! Read-only view over a raw HTTP response.
//!
//! The fetcher returns bytes exactly as received. Callers that want to look
//! at the status line or headers can wrap those bytes here; nothing is
//! validated and the body is never re-framed.

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Borrowed split of a response into head and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawResponse<'a> {
    head: &'a [u8],
    body: &'a [u8],
}

impl<'a> RawResponse<'a> {
    /// Splits at the first blank line. Without one, everything is head.
    pub fn new(bytes: &'a [u8]) -> Self {
        match bytes
            .windows(HEAD_TERMINATOR.len())
            .position(|w| w == HEAD_TERMINATOR)
        {
            Some(pos) => Self {
                head: &bytes[..pos],
                body: &bytes[pos + HEAD_TERMINATOR.len()..],
            },
            None => Self {
                head: bytes,
                body: &[],
            },
        }
    }

    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// First line of the head (e.g. `HTTP/1.0 200 OK`), lossily decoded.
    pub fn status_line(&self) -> String {
        let line = self.head_lines().next().unwrap_or_default();
        String::from_utf8_lossy(line).into_owned()
    }

    /// Status code from the status line, if it has a numeric second field.
    pub fn status_code(&self) -> Option<u16> {
        self.status_line()
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
    }

    /// `(name, value)` pairs after the status line, trimmed. Lines without a
    /// colon are skipped.
    pub fn headers(&self) -> Vec<(String, String)> {
        self.head_lines()
            .skip(1)
            .filter_map(|line| {
                let line = String::from_utf8_lossy(line);
                let (name, value) = line.split_once(':')?;
                Some((name.trim().to_string(), value.trim().to_string()))
            })
            .collect()
    }

    /// First header value whose name matches case-insensitively.
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers()
            .into_iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    fn head_lines(&self) -> impl Iterator<Item = &'a [u8]> {
        let head = self.head;
        head.split(|b| *b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
    }
}
