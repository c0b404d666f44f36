/// Reason a [`Parser`] moved to [`State::Error`].
///
/// The [`Outcome`] of a failed call is always [`Outcome::Failed`], this only serves diagnostics.
///
/// [`Parser`]: super::Parser
/// [`State::Error`]: super::State::Error
/// [`Outcome`]: super::Outcome
/// [`Outcome::Failed`]: super::Outcome::Failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Version is not `HTTP/<digits>.<digits>`.
    InvalidVersion,
    /// Status code is not three digits.
    InvalidStatus,
    /// Missing, repeated or unexpected separator.
    InvalidSeparator,
    /// Control character in reason phrase.
    InvalidReason,
    /// Invalid character in header name, empty name or line folding.
    InvalidHeader,
    /// Control character in header value.
    InvalidHeaderValue,
    /// Single token exceeds the configured maximum length.
    TooLong,
    /// Headers exceed configured maximum count.
    TooManyHeaders,
    /// Stream ended before the response head is complete.
    UnexpectedEof,
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidVersion => f.write_str("invalid HTTP version"),
            Self::InvalidStatus => f.write_str("invalid status code"),
            Self::InvalidSeparator => f.write_str("invalid separator"),
            Self::InvalidReason => f.write_str("invalid reason phrase"),
            Self::InvalidHeader => f.write_str("invalid header name"),
            Self::InvalidHeaderValue => f.write_str("invalid header value"),
            Self::TooLong => f.write_str("token too long"),
            Self::TooManyHeaders => f.write_str("received headers count exceeded the configured maximum"),
            Self::UnexpectedEof => f.write_str("unexpected end of response head"),
        }
    }
}
