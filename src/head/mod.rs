//! Owned response head.
//!
//! [`HeadParser`] drives a [`Parser`] over a growing [`BytesMut`] buffer and collects every
//! element into a [`ResponseHead`].
use bytes::{Buf, Bytes, BytesMut};

use crate::common::ParseResult;
use crate::http::{StatusCode, Version};
use crate::log::debug;
use crate::parser::{Input, Limits, Outcome, ParseError, Parser, State};

mod error;

#[cfg(test)]
mod test;

pub use error::HeadError;

/// Single response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub name: Bytes,
    pub value: Bytes,
}

/// Status line and headers of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseHead {
    pub version: Version,
    pub status: StatusCode,
    pub reason: Bytes,
    pub headers: Vec<Header>,
}

impl ResponseHead {
    /// Returns the value of the first header named `name`, compared case insensitively.
    pub fn get(&self, name: &str) -> Option<&Bytes> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name.as_bytes()))
            .map(|header| &header.value)
    }

    /// Returns the values of every header named `name`, compared case insensitively.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Bytes> + 'a {
        self.headers
            .iter()
            .filter(move |header| header.name.eq_ignore_ascii_case(name.as_bytes()))
            .map(|header| &header.value)
    }

    /// Write the head in wire format.
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.reserve(64 + self.reason.len());

        buf.extend_from_slice(self.version.as_str().as_bytes());
        buf.extend_from_slice(b" ");
        buf.extend_from_slice(itoa::Buffer::new().format(self.status.as_u16()).as_bytes());
        buf.extend_from_slice(b" ");
        buf.extend_from_slice(&self.reason);
        buf.extend_from_slice(b"\r\n");

        for header in &self.headers {
            buf.extend_from_slice(&header.name);
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(&header.value);
            buf.extend_from_slice(b"\r\n");
        }

        buf.extend_from_slice(b"\r\n");
    }
}

/// Collects a [`ResponseHead`] from a buffer that may still be growing.
///
/// ```
/// use bytes::BytesMut;
/// use stepline::{common::ParseResult, head::HeadParser, http::StatusCode};
///
/// let mut parser = HeadParser::new();
/// let mut buf = BytesMut::from(&b"HTTP/1.1 404 Not Fo"[..]);
/// assert!(parser.parse(&mut buf).is_pending());
/// assert_eq!(parser.status(), Some(StatusCode::NOT_FOUND));
///
/// buf.extend_from_slice(b"und\r\nContent-Length: 0\r\n\r\n");
/// let ParseResult::Ok(head) = parser.parse(&mut buf) else {
///     unreachable!()
/// };
/// assert_eq!(&head.reason[..], b"Not Found");
/// assert_eq!(head.get("content-length").map(|v| &v[..]), Some(&b"0"[..]));
/// ```
#[derive(Debug, Default)]
pub struct HeadParser {
    parser: Parser,
    version: Option<Version>,
    status: Option<StatusCode>,
    reason: Option<Bytes>,
    name: Option<Bytes>,
    headers: Vec<Header>,
    error: Option<HeadError>,
}

impl HeadParser {
    /// Create new [`HeadParser`] with default [`Limits`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create new [`HeadParser`] with given [`Limits`].
    #[inline]
    pub fn with_limits(limits: Limits) -> Self {
        Self { parser: Parser::with_limits(limits), ..Self::default() }
    }

    /// Returns the version, once parsed.
    #[inline]
    pub const fn version(&self) -> Option<Version> {
        self.version
    }

    /// Returns the status code, once parsed.
    #[inline]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Returns the reason phrase, once parsed.
    #[inline]
    pub const fn reason(&self) -> Option<&Bytes> {
        self.reason.as_ref()
    }

    /// Returns the underlying [`Parser`].
    #[inline]
    pub const fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Discard any progress and prepare for the next response.
    pub fn reset(&mut self) {
        self.parser.reset();
        self.version = None;
        self.status = None;
        self.reason = None;
        self.name = None;
        self.headers.clear();
        self.error = None;
    }

    /// Parse the response head from `buf`.
    ///
    /// Consumed bytes are removed from `buf`. When the head is complete, `buf` is left with the
    /// first body byte at the front, [`reset`][HeadParser::reset] before parsing the next
    /// response. Returns [`ParseResult::Pending`] when more bytes are required.
    ///
    /// Once an error is returned, every later call returns the same error without consuming
    /// `buf` until [`reset`][HeadParser::reset].
    pub fn parse(&mut self, buf: &mut BytesMut) -> ParseResult<ResponseHead, HeadError> {
        if let Some(err) = self.error {
            return ParseResult::Err(err);
        }
        let mut input = Input::new(&buf[..]);
        let result = self.parse_input(&mut input);
        let read = input.begin();
        buf.advance(read);
        if let ParseResult::Err(err) = result {
            self.error = Some(err);
        }
        result
    }

    /// Signal that the stream ended before [`parse`][HeadParser::parse] returned the head.
    ///
    /// Returns the error already reported by [`parse`][HeadParser::parse], if any.
    pub fn finish(&mut self) -> HeadError {
        if let Some(err) = self.error {
            return err;
        }
        self.parser.finish();
        let err = HeadError::from(self.parser.error().unwrap_or(ParseError::UnexpectedEof));
        self.error = Some(err);
        err
    }

    fn parse_input(&mut self, input: &mut Input) -> ParseResult<ResponseHead, HeadError> {
        loop {
            let (outcome, span) = self.parser.parse_next(input);
            let token = Bytes::copy_from_slice(span.as_bytes());
            match outcome {
                Outcome::Matched => {}
                Outcome::Pending => return ParseResult::Pending,
                Outcome::Failed => {
                    let err = self.parser.error().unwrap_or(ParseError::UnexpectedEof);
                    return ParseResult::Err(err.into());
                }
            }

            match self.parser.state() {
                State::VersionDone => match Version::from_bytes(&token) {
                    Some(version) => self.version = Some(version),
                    None => return ParseResult::Err(HeadError::UnsupportedVersion),
                },
                State::StatusCodeDone => match StatusCode::from_bytes(&token) {
                    Some(status) => self.status = Some(status),
                    None => return ParseResult::Err(HeadError::InvalidStatus),
                },
                State::ReasonPhraseDone => self.reason = Some(token),
                State::HeaderNameDone => self.name = Some(token),
                State::HeaderValueDone => {
                    if let Some(name) = self.name.take() {
                        self.headers.push(Header { name, value: token });
                    }
                }
                State::Body => return self.take_head(),
                _ => {}
            }
        }
    }

    fn take_head(&mut self) -> ParseResult<ResponseHead, HeadError> {
        let (Some(version), Some(status)) = (self.version, self.status) else {
            return ParseResult::Err(HeadError::Parse(ParseError::UnexpectedEof));
        };

        debug!("response head collected: {version} {status}");

        ParseResult::Ok(ResponseHead {
            version,
            status,
            reason: self.reason.take().unwrap_or_default(),
            headers: std::mem::take(&mut self.headers),
        })
    }
}
