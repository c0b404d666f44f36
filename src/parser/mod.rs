//! Incremental HTTP/1.x response parser.
//!
//! [`Parser::parse_until`] works on chunked bytes, given any length of bytes, the parser advances
//! its state machine byte by byte until the state satisfies the given [`Goal`]. If the bytes run
//! out first, it returns [`Outcome::Pending`] and keeps its position, so the next chunk resumes
//! exactly where the previous one stopped, even in the middle of a token.
//!
//! A token that straddles chunk boundaries is copied into an internal buffer, and returned as a
//! whole from the call that completes it. A token that lies within a single chunk is returned as
//! a borrowed slice of that chunk, without copying.
//!
//! Separators are strict: exactly one space follows the version and the status code, lines end
//! with CRLF.
use bytes::BytesMut;

use crate::log::debug;
use crate::matches::{is_field_content, is_ows, is_token};

mod error;
mod input;
mod limits;
mod span;
mod state;
pub mod goal;


pub use error::ParseError;
pub use goal::Goal;
pub use input::Input;
pub use limits::{DEFAULT_MAX_HEADERS, DEFAULT_MAX_TOKEN_LEN, Limits};
pub use span::Span;
pub use state::{Outcome, State};

const VERSION_PREFIX: &[u8; 5] = b"HTTP/";

/// Position inside the response head, each variant carries its own sub-position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Head {
    Start,
    /// Bytes of `HTTP/` matched.
    Literal(u8),
    /// Major version digits seen.
    Major(u8),
    /// Minor version digits seen.
    Minor(u8),
    VersionDone,
    /// Status code digits seen.
    StatusCode(u8),
    StatusCodeDone,
    /// `cr` is set once `\r` is seen and `\n` is expected.
    ReasonPhrase { cr: bool },
    ReasonPhraseDone { cr: bool },
    HeaderName,
    HeaderNameDone,
    HeaderValue { cr: bool },
    HeaderValueDone { cr: bool },
}

/// Internal position, [`State`] is its public projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Head(Head),
    HeadersDone,
    Body,
    Done,
    Error,
}

impl Phase {
    const START: Phase = Phase::Head(Head::Start);

    const fn state(self) -> State {
        match self {
            Phase::Head(head) => match head {
                Head::Start => State::Start,
                Head::Literal(_) | Head::Major(_) | Head::Minor(_) => State::Version,
                Head::VersionDone => State::VersionDone,
                Head::StatusCode(_) => State::StatusCode,
                Head::StatusCodeDone => State::StatusCodeDone,
                Head::ReasonPhrase { .. } => State::ReasonPhrase,
                Head::ReasonPhraseDone { .. } => State::ReasonPhraseDone,
                Head::HeaderName => State::HeaderName,
                Head::HeaderNameDone => State::HeaderNameDone,
                Head::HeaderValue { .. } => State::HeaderValue,
                Head::HeaderValueDone { .. } => State::HeaderValueDone,
            },
            Phase::HeadersDone => State::HeadersDone,
            Phase::Body => State::Body,
            Phase::Done => State::Done,
            Phase::Error => State::Error,
        }
    }
}

impl Default for Phase {
    #[inline]
    fn default() -> Self {
        Phase::START
    }
}

impl From<Head> for Phase {
    #[inline]
    fn from(value: Head) -> Self {
        Phase::Head(value)
    }
}

/// Whether the bytes under the cursor belong to a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Token {
    #[default]
    Idle,
    Open,
    /// Token ended at `\r`, but the line is not complete.
    Closed,
}

/// Effect of a single byte on the current token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    /// Byte is a separator or skipped whitespace.
    Skip,
    /// Byte is the first byte of a token.
    Begin,
    /// Byte is `\r` where a possibly empty token was expected.
    BeginEmpty,
    /// Byte is part of the open token.
    Push,
    /// Byte is `\r` right after the open token.
    Close,
    /// Byte is the delimiter completing the open token.
    End,
    /// Byte is `\n` completing the closed token.
    Complete,
}

/// Restartable HTTP response parser.
///
/// One parser is used per response, [`reset`][Parser::reset] recycles it for the next response
/// on the same connection, keeping its buffer allocation.
///
/// ```
/// use stepline::{Input, Outcome, Parser, State};
///
/// let mut parser = Parser::new();
/// let mut input = Input::new(b"HTTP/1.0 404 Not Found\r\n");
///
/// let (outcome, span) = parser.parse_until(State::StatusCodeDone, &mut input);
/// assert_eq!(outcome, Outcome::Matched);
/// assert_eq!(span.as_bytes(), b"404");
///
/// let (outcome, span) = parser.parse_until(State::ReasonPhraseDone, &mut input);
/// assert_eq!(outcome, Outcome::Matched);
/// assert_eq!(span.as_bytes(), b"Not Found");
/// assert!(input.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    phase: Phase,
    token: Token,
    // bytes of a token that started in a previous chunk
    buf: BytesMut,
    token_len: usize,
    headers: usize,
    body_len: u64,
    consumed: u64,
    error: Option<ParseError>,
    limits: Limits,
}

impl Parser {
    /// Create new [`Parser`] in [`State::Start`] with default [`Limits`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create new [`Parser`] with given [`Limits`].
    #[inline]
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits, ..Self::default() }
    }

    /// Returns the current state.
    #[inline]
    pub const fn state(&self) -> State {
        self.phase.state()
    }

    /// Returns the reason of failure, if the parser is in [`State::Error`].
    ///
    /// This is `None` when [`Outcome::Failed`] is returned in [`State::Done`], which accepts no
    /// further input but is not a failure of the response.
    #[inline]
    pub const fn error(&self) -> Option<ParseError> {
        self.error
    }

    /// Returns the number of bytes consumed since construction or the last reset.
    #[inline]
    pub const fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Returns the number of header names started so far.
    #[inline]
    pub const fn header_count(&self) -> usize {
        self.headers
    }

    /// Returns the number of body bytes passed through.
    #[inline]
    pub const fn body_len(&self) -> u64 {
        self.body_len
    }

    /// Returns the configured [`Limits`].
    #[inline]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Return to [`State::Start`], discarding any partially parsed token.
    pub fn reset(&mut self) {
        self.phase = Phase::START;
        self.token = Token::Idle;
        self.buf.clear();
        self.token_len = 0;
        self.headers = 0;
        self.body_len = 0;
        self.consumed = 0;
        self.error = None;
    }

    /// Signal that the stream ended.
    ///
    /// Once the header block is complete, this moves to [`State::Done`] and returns
    /// [`Outcome::Matched`]. Anywhere else the response is truncated, the parser moves to
    /// [`State::Error`] with [`ParseError::UnexpectedEof`].
    pub fn finish(&mut self) -> Outcome {
        match self.phase {
            Phase::HeadersDone | Phase::Body | Phase::Done => {
                self.phase = Phase::Done;
                Outcome::Matched
            }
            Phase::Error => Outcome::Failed,
            Phase::Head(_) => self.fail(ParseError::UnexpectedEof),
        }
    }

    /// Parse `input` until the state satisfies `goal`.
    ///
    /// - If the goal is already satisfied, returns [`Outcome::Matched`] with an empty [`Span`]
    ///   without consuming anything.
    /// - On the first transition into a state satisfying the goal, returns
    ///   [`Outcome::Matched`] with the [`Span`] of the element completed by that transition. The
    ///   span is empty if the transition did not complete an element, e.g: `Start -> Version`.
    /// - If `input` is exhausted first, returns [`Outcome::Pending`].
    /// - On grammar violation, returns [`Outcome::Failed`] and moves to [`State::Error`]. The
    ///   cursor of `input` is left on the offending byte. Every later call returns
    ///   [`Outcome::Failed`] until [`reset`][Parser::reset].
    ///
    /// In [`State::Body`], bytes are consumed without interpretation and the result is
    /// [`Outcome::Pending`] unless the goal accepts [`State::Body`]. A goal of [`State::Body`]
    /// stops with the `input` cursor on the first body byte.
    ///
    /// The returned [`Span`] borrows the parser and the bytes behind `input`, it is invalid once
    /// either is mutated or dropped.
    pub fn parse_until<'s, 'a: 's, G: Goal>(
        &'s mut self,
        goal: G,
        input: &mut Input<'a>,
    ) -> (Outcome, Span<'s>) {
        let at = input.begin();

        if self.phase == Phase::Error {
            return (Outcome::Failed, Span::empty(at));
        }
        if goal.is_reached(self.state()) {
            return (Outcome::Matched, Span::empty(at));
        }

        let src = input.source();

        // token carried over from the previous chunk continues at the start of this one
        let mut carried = self.token != Token::Idle;
        let mut start = carried.then_some(at);
        let mut close = (self.token == Token::Closed).then_some(at);

        loop {
            let head = match self.phase {
                Phase::Head(head) => head,
                Phase::HeadersDone => {
                    debug!("response head complete, {} headers", self.headers);
                    self.phase = Phase::Body;
                    if goal.is_reached(State::Body) {
                        return (Outcome::Matched, Span::empty(input.begin()));
                    }
                    continue;
                }
                Phase::Body => {
                    let len = input.remaining() as u64;
                    input.advance_to_end();
                    self.body_len += len;
                    self.consumed += len;
                    return (Outcome::Pending, Span::empty(input.begin()));
                }
                Phase::Done | Phase::Error => return (Outcome::Failed, Span::empty(input.begin())),
            };

            let pos = input.begin();
            let Some(byte) = input.peek() else {
                self.suspend(src, start, close);
                return (Outcome::Pending, Span::empty(pos));
            };

            let prev = self.phase.state();
            let (phase, mark) = match self.step(head, byte) {
                Ok(ok) => ok,
                Err(err) => return (self.fail(err), Span::empty(pos)),
            };
            self.phase = phase;

            let completed = match mark {
                Mark::Skip => false,
                Mark::Begin => {
                    self.begin_token();
                    carried = false;
                    start = Some(pos);
                    false
                }
                Mark::BeginEmpty => {
                    self.begin_token();
                    self.token_len = 0;
                    self.token = Token::Closed;
                    carried = false;
                    start = Some(pos);
                    close = Some(pos);
                    false
                }
                Mark::Push => {
                    self.token_len += 1;
                    false
                }
                Mark::Close => {
                    self.token = Token::Closed;
                    close = Some(pos);
                    false
                }
                Mark::End => {
                    close = Some(pos);
                    true
                }
                Mark::Complete => true,
            };

            if self.token_len > self.limits.token_len() {
                return (self.fail(ParseError::TooLong), Span::empty(pos));
            }

            input.advance(1);
            self.consumed += 1;

            if completed {
                self.token = Token::Idle;
                self.token_len = 0;
                if goal.is_reached(self.state()) {
                    let end = close.unwrap_or(pos);
                    let range = start.unwrap_or(end)..end;
                    if carried {
                        self.buf.extend_from_slice(&src[range.clone()]);
                        return (Outcome::Matched, Span::buffered(range, &self.buf[..]));
                    }
                    return (Outcome::Matched, Span::borrowed(range.clone(), &src[range]));
                }
                start = None;
                close = None;
                carried = false;
            } else if self.state() != prev && goal.is_reached(self.state()) {
                if self.token != Token::Idle {
                    // the open token continues in the next call
                    self.suspend(src, start, close.or(Some(input.begin())));
                }
                return (Outcome::Matched, Span::empty(input.begin()));
            }
        }
    }

    /// Parse `bytes` until the state satisfies `goal`, advancing `bytes` past consumed input.
    ///
    /// Positions in the returned [`Span::range`] are relative to `bytes` before the call.
    pub fn parse_slice<'s, 'a: 's, G: Goal>(
        &'s mut self,
        goal: G,
        bytes: &mut &'a [u8],
    ) -> (Outcome, Span<'s>) {
        let mut input = Input::new(bytes);
        let result = self.parse_until(goal, &mut input);
        *bytes = input.as_slice();
        result
    }

    /// Parse `input` until the next element completes.
    ///
    /// The next element is the version, status code, reason phrase, a header name, a header
    /// value, the end of the header block, or the start of the body, whichever follows the
    /// current state. In [`State::Body`], this consumes the body until [`finish`].
    ///
    /// [`finish`]: Parser::finish
    #[inline]
    pub fn parse_next<'s, 'a: 's>(&'s mut self, input: &mut Input<'a>) -> (Outcome, Span<'s>) {
        let goal = milestone(self.state());
        self.parse_until(goal, input)
    }

    fn begin_token(&mut self) {
        self.buf.clear();
        self.token = Token::Open;
        self.token_len = 1;
    }

    /// Keep the part of the open token that lies within this chunk.
    fn suspend(&mut self, src: &[u8], start: Option<usize>, close: Option<usize>) {
        if self.token == Token::Idle {
            return;
        }
        if let Some(start) = start {
            let end = close.unwrap_or(src.len());
            self.buf.extend_from_slice(&src[start..end]);
        }
    }

    fn fail(&mut self, err: ParseError) -> Outcome {
        debug!(
            "response parse failed in {} at offset {}: {err}",
            self.state(), self.consumed
        );
        self.phase = Phase::Error;
        self.token = Token::Idle;
        self.token_len = 0;
        self.error = Some(err);
        Outcome::Failed
    }

    /// Transition function, returns the position after `byte`.
    fn step(&mut self, head: Head, byte: u8) -> Result<(Phase, Mark), ParseError> {
        use Head as H;
        use ParseError as E;

        match head {
            // ===== Version =====
            H::Start | H::Literal(_) => {
                let n = match head {
                    H::Literal(n) => n,
                    _ => 0,
                };
                if VERSION_PREFIX.get(n as usize) != Some(&byte) {
                    return Err(E::InvalidVersion);
                }
                let next = if n as usize + 1 == VERSION_PREFIX.len() {
                    H::Major(0)
                } else {
                    H::Literal(n + 1)
                };
                let mark = if n == 0 { Mark::Begin } else { Mark::Push };
                Ok((next.into(), mark))
            }
            H::Major(n) => match byte {
                b'0'..=b'9' => Ok((H::Major(n.saturating_add(1)).into(), Mark::Push)),
                b'.' if n > 0 => Ok((H::Minor(0).into(), Mark::Push)),
                _ => Err(E::InvalidVersion),
            },
            H::Minor(n) => match byte {
                b'0'..=b'9' => Ok((H::Minor(n.saturating_add(1)).into(), Mark::Push)),
                b' ' if n > 0 => Ok((H::VersionDone.into(), Mark::End)),
                _ => Err(E::InvalidVersion),
            },

            // ===== Status Code =====
            H::VersionDone => match byte {
                b'0'..=b'9' => Ok((H::StatusCode(1).into(), Mark::Begin)),
                b' ' | b'\t' => Err(E::InvalidSeparator),
                _ => Err(E::InvalidStatus),
            },
            H::StatusCode(n) => match byte {
                b'0'..=b'9' if n < 3 => Ok((H::StatusCode(n + 1).into(), Mark::Push)),
                b' ' if n == 3 => Ok((H::StatusCodeDone.into(), Mark::End)),
                _ if n == 3 && !byte.is_ascii_digit() => Err(E::InvalidSeparator),
                _ => Err(E::InvalidStatus),
            },

            // ===== Reason Phrase =====
            H::StatusCodeDone => match byte {
                b'\r' => Ok((H::ReasonPhrase { cr: true }.into(), Mark::BeginEmpty)),
                b' ' | b'\t' | b'\n' => Err(E::InvalidSeparator),
                _ if is_field_content(byte) => {
                    Ok((H::ReasonPhrase { cr: false }.into(), Mark::Begin))
                }
                _ => Err(E::InvalidReason),
            },
            H::ReasonPhrase { cr: true } => match byte {
                b'\n' => Ok((H::ReasonPhraseDone { cr: false }.into(), Mark::Complete)),
                _ => Err(E::InvalidSeparator),
            },
            H::ReasonPhrase { cr: false } => match byte {
                b'\r' => Ok((H::ReasonPhrase { cr: true }.into(), Mark::Close)),
                b'\n' => Err(E::InvalidSeparator),
                _ if is_field_content(byte) => Ok((head.into(), Mark::Push)),
                _ => Err(E::InvalidReason),
            },

            // ===== Header Line or End of Headers =====
            H::ReasonPhraseDone { cr: true } | H::HeaderValueDone { cr: true } => match byte {
                b'\n' => Ok((Phase::HeadersDone, Mark::Skip)),
                _ => Err(E::InvalidSeparator),
            },
            H::ReasonPhraseDone { cr: false } | H::HeaderValueDone { cr: false } => match byte {
                b'\r' => {
                    let next = match head {
                        H::ReasonPhraseDone { .. } => H::ReasonPhraseDone { cr: true },
                        _ => H::HeaderValueDone { cr: true },
                    };
                    Ok((next.into(), Mark::Skip))
                }
                b'\n' => Err(E::InvalidSeparator),
                _ if is_token(byte) => {
                    if self.headers >= self.limits.headers() {
                        return Err(E::TooManyHeaders);
                    }
                    self.headers += 1;
                    Ok((H::HeaderName.into(), Mark::Begin))
                }
                // includes obsolete line folding and empty name
                _ => Err(E::InvalidHeader),
            },

            // ===== Header Name =====
            H::HeaderName => match byte {
                b':' => Ok((H::HeaderNameDone.into(), Mark::End)),
                _ if is_token(byte) => Ok((head.into(), Mark::Push)),
                _ => Err(E::InvalidHeader),
            },

            // ===== Header Value =====
            H::HeaderNameDone => match byte {
                _ if is_ows(byte) => Ok((head.into(), Mark::Skip)),
                b'\r' => Ok((H::HeaderValue { cr: true }.into(), Mark::BeginEmpty)),
                b'\n' => Err(E::InvalidSeparator),
                _ if is_field_content(byte) => Ok((H::HeaderValue { cr: false }.into(), Mark::Begin)),
                _ => Err(E::InvalidHeaderValue),
            },
            H::HeaderValue { cr: true } => match byte {
                b'\n' => Ok((H::HeaderValueDone { cr: false }.into(), Mark::Complete)),
                _ => Err(E::InvalidSeparator),
            },
            H::HeaderValue { cr: false } => match byte {
                b'\r' => Ok((H::HeaderValue { cr: true }.into(), Mark::Close)),
                b'\n' => Err(E::InvalidSeparator),
                _ if is_field_content(byte) => Ok((head.into(), Mark::Push)),
                _ => Err(E::InvalidHeaderValue),
            },
        }
    }
}

/// States completing the element that follows `state`.
fn milestone(state: State) -> &'static [State] {
    use State as S;

    match state {
        S::Start | S::Version => &[S::VersionDone],
        S::VersionDone | S::StatusCode => &[S::StatusCodeDone],
        S::StatusCodeDone | S::ReasonPhrase => &[S::ReasonPhraseDone],
        S::ReasonPhraseDone | S::HeaderValueDone => &[S::HeaderNameDone, S::HeadersDone],
        S::HeaderName => &[S::HeaderNameDone],
        S::HeaderNameDone | S::HeaderValue => &[S::HeaderValueDone],
        S::HeadersDone => &[S::Body],
        S::Body | S::Done => &[S::Done],
        S::Error => &[S::Error],
    }
}
