/// Position of the parser in the HTTP response grammar.
///
/// States ending with `Done` are reached right after the element they name is complete, the
/// others are reached on the first byte of that element.
///
/// ```text
/// Start -> Version -> VersionDone -> StatusCode -> StatusCodeDone
///       -> ReasonPhrase -> ReasonPhraseDone -+-> HeadersDone -> Body -> Done
///                                            |
///   +-> HeaderName -> HeaderNameDone -> HeaderValue -> HeaderValueDone -+
///   +-------------------------------------------------------------------+
/// ```
///
/// Any state may move to `Error`. Only [`Parser::reset`] moves back to `Start`.
///
/// [`Parser::reset`]: super::Parser::reset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Nothing consumed yet.
    #[default]
    Start,
    /// Inside `HTTP/x.y`.
    Version,
    /// Version token and its trailing space consumed.
    VersionDone,
    /// Inside the three status digits.
    StatusCode,
    /// Status code and its trailing space consumed.
    StatusCodeDone,
    /// Inside the reason phrase.
    ReasonPhrase,
    /// Reason phrase and the status line CRLF consumed.
    ReasonPhraseDone,
    /// Inside a header name.
    HeaderName,
    /// Header name and `:` consumed, optional whitespace is skipped here.
    HeaderNameDone,
    /// Inside a header value.
    HeaderValue,
    /// Header value and its CRLF consumed.
    HeaderValueDone,
    /// Empty line terminating the header block consumed.
    HeadersDone,
    /// Message body, bytes pass through uninterpreted.
    Body,
    /// Message complete, see [`Parser::finish`].
    ///
    /// [`Parser::finish`]: super::Parser::finish
    Done,
    /// Grammar violation, terminal until reset.
    Error,
}

impl State {
    /// Returns `true` for `Done` and `Error`.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }

    /// Returns `true` once the whole response head has been consumed.
    #[inline]
    pub const fn is_head_complete(&self) -> bool {
        matches!(self, Self::HeadersDone | Self::Body | Self::Done)
    }

    /// Returns state name, e.g: `"VersionDone"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Version => "Version",
            Self::VersionDone => "VersionDone",
            Self::StatusCode => "StatusCode",
            Self::StatusCodeDone => "StatusCodeDone",
            Self::ReasonPhrase => "ReasonPhrase",
            Self::ReasonPhraseDone => "ReasonPhraseDone",
            Self::HeaderName => "HeaderName",
            Self::HeaderNameDone => "HeaderNameDone",
            Self::HeaderValue => "HeaderValue",
            Self::HeaderValueDone => "HeaderValueDone",
            Self::HeadersDone => "HeadersDone",
            Self::Body => "Body",
            Self::Done => "Done",
            Self::Error => "Error",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`Parser::parse_until`].
///
/// [`Parser::parse_until`]: super::Parser::parse_until
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The goal is reached.
    Matched,
    /// Input is exhausted before the goal, more bytes is required.
    ///
    /// This is not an error, the parser keeps its state for the next chunk.
    Pending,
    /// Input violates the grammar, see [`Parser::error`].
    ///
    /// Terminal until [`Parser::reset`]. Also returned for any input after [`Parser::finish`]
    /// completed the message, in which case the state is [`State::Done`] and
    /// [`Parser::error`] is `None`.
    ///
    /// [`Parser::finish`]: super::Parser::finish
    /// [`Parser::error`]: super::Parser::error
    /// [`Parser::reset`]: super::Parser::reset
    Failed,
}

impl Outcome {
    /// Returns `true` if the outcome is [`Matched`].
    ///
    /// [`Matched`]: Outcome::Matched
    #[inline]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched)
    }

    /// Returns `true` if the outcome is [`Pending`].
    ///
    /// [`Pending`]: Outcome::Pending
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the outcome is [`Failed`].
    ///
    /// [`Failed`]: Outcome::Failed
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
