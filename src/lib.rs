//! Incremental HTTP/1.x Response Parser
//!
//! [`Parser`] consumes a response in arbitrarily split chunks and stops at a caller chosen
//! [`Goal`], returning the [`Span`] of the element it just recognized.
//!
//! ```
//! use stepline::{Input, Outcome, Parser, State};
//!
//! let mut parser = Parser::new();
//!
//! let mut input = Input::new(b"HTT");
//! let (outcome, _) = parser.parse_until(State::VersionDone, &mut input);
//! assert_eq!(outcome, Outcome::Pending);
//!
//! let mut input = Input::new(b"P/1.1 200 OK\r\n");
//! let (outcome, span) = parser.parse_until(State::VersionDone, &mut input);
//! assert_eq!(outcome, Outcome::Matched);
//! assert_eq!(span.as_bytes(), b"HTTP/1.1");
//! assert_eq!(input.as_slice(), b"200 OK\r\n");
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod common;
pub mod http;
pub mod parser;
pub mod head;

#[cfg(feature = "tokio")]
pub mod rt;

pub use parser::{Goal, Input, Limits, Outcome, ParseError, Parser, Span, State};
