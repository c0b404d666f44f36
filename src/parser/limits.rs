/// Default maximum length of a single token.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 8 * 1024;

/// Default maximum number of headers.
pub const DEFAULT_MAX_HEADERS: usize = 64;

/// Resource limits of a [`Parser`].
///
/// ```
/// use stepline::{Limits, Parser};
///
/// let parser = Parser::with_limits(Limits::new().max_headers(16).max_token_len(1024));
/// assert_eq!(parser.limits().headers(), 16);
/// ```
///
/// [`Parser`]: super::Parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    max_token_len: usize,
    max_headers: usize,
}

impl Limits {
    /// Create new [`Limits`] with default values.
    pub const fn new() -> Self {
        Self {
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            max_headers: DEFAULT_MAX_HEADERS,
        }
    }

    /// Set the maximum length of a version, status, reason, header name or header value token.
    pub const fn max_token_len(mut self, len: usize) -> Self {
        self.max_token_len = len;
        self
    }

    /// Set the maximum number of headers in a response.
    pub const fn max_headers(mut self, count: usize) -> Self {
        self.max_headers = count;
        self
    }

    /// Returns the maximum token length.
    #[inline]
    pub const fn token_len(&self) -> usize {
        self.max_token_len
    }

    /// Returns the maximum header count.
    #[inline]
    pub const fn headers(&self) -> usize {
        self.max_headers
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
