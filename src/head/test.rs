use bytes::BytesMut;

use super::{HeadError, HeadParser, Header, ResponseHead};
use crate::common::ParseResult;
use crate::http::{StatusCode, Version};
use crate::parser::{Limits, ParseError};

macro_rules! ready {
    ($e:expr) => {
        match $e {
            ParseResult::Ok(ok) => ok,
            ParseResult::Err(err) => panic!("unexpected `ParseResult::Err`: {err:?}"),
            ParseResult::Pending => panic!("unexpected `ParseResult::Pending`")
        }
    };
}

fn header(name: &'static str, value: &'static str) -> Header {
    Header { name: name.into(), value: value.into() }
}

#[test]
fn test_parse_head() {
    macro_rules! test {
        {
            $input:expr;
            $v:ident, $s:ident, $reason:expr;
            [$(($name:literal, $value:literal)),*];
            $rest:expr
        } => {
            let mut bytes = BytesMut::from(&$input[..]);
            let head = ready!(HeadParser::new().parse(&mut bytes));

            assert_eq!(head.version, Version::$v);
            assert_eq!(head.status, StatusCode::$s);
            assert_eq!(&head.reason[..], $reason);
            assert_eq!(head.headers, vec![$(header($name, $value)),*]);
            assert_eq!(&bytes[..], $rest, "invalid remaining bytes");
        };
        (#[error] $input:expr => $err:expr) => {
            let mut bytes = BytesMut::from(&$input[..]);
            match HeadParser::new().parse(&mut bytes) {
                ParseResult::Err(err) => assert_eq!(err, $err),
                ParseResult::Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                ParseResult::Pending => panic!("line {}, unexpected `Pending`", line!()),
            }
        };
    }

    test! {
        b"HTTP/1.1 200 OK\r\n\r\n";
        HTTP_11, OK, b"OK";
        [];
        b""
    };
    test! {
        b"HTTP/1.0 404 Not Found\r\nContent-Length: 9\r\n\r\nnot found";
        HTTP_10, NOT_FOUND, b"Not Found";
        [("Content-Length", "9")];
        b"not found"
    };
    test! {
        b"HTTP/1.1 204 \r\nDate: today\r\nX-Empty:\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n\r\n";
        HTTP_11, NO_CONTENT, b"";
        [("Date", "today"), ("X-Empty", ""), ("Set-Cookie", "a=1"), ("Set-Cookie", "b=2")];
        b""
    };

    test!(#[error] b"HTTP/1.2 200 OK\r\n\r\n" => HeadError::UnsupportedVersion);
    test!(#[error] b"HTTP/1.1 099 Low\r\n\r\n" => HeadError::InvalidStatus);
    test!(#[error] b"HTTP/1.1 20 OK\r\n\r\n" => HeadError::Parse(ParseError::InvalidStatus));
    test!(#[error] b"HTTP/1.1 200 OK\r\n folded\r\n\r\n" => HeadError::Parse(ParseError::InvalidHeader));
}

#[test]
fn test_parse_growing_buffer() {
    const RESPONSE: &[u8] = b"HTTP/1.1 301 Moved Permanently\r\nLocation: /new\r\nContent-Length: 0\r\n\r\n";

    for size in 1..RESPONSE.len() {
        let mut parser = HeadParser::new();
        let mut bytes = BytesMut::new();
        let mut chunks = RESPONSE.chunks(size);

        let head = loop {
            let chunk = chunks.next().expect("head is complete before the last chunk");
            bytes.extend_from_slice(chunk);
            match parser.parse(&mut bytes) {
                ParseResult::Ok(head) => break head,
                ParseResult::Pending => assert!(bytes.is_empty()),
                ParseResult::Err(err) => panic!("chunk size {size}: {err}"),
            }
        };

        assert_eq!(head.status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(&head.reason[..], b"Moved Permanently");
        assert_eq!(head.get("location").map(|v| &v[..]), Some(&b"/new"[..]));
        assert!(chunks.next().is_none());
    }
}

#[test]
fn test_partial_results() {
    let mut parser = HeadParser::new();
    let mut bytes = BytesMut::from(&b"HTTP/1.0 50"[..]);

    assert!(parser.parse(&mut bytes).is_pending());
    assert_eq!(parser.version(), Some(Version::HTTP_10));
    assert_eq!(parser.status(), None);

    bytes.extend_from_slice(b"3 Service Unavailable\r\nRetry");
    assert!(parser.parse(&mut bytes).is_pending());
    assert_eq!(parser.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(parser.reason().map(|r| &r[..]), Some(&b"Service Unavailable"[..]));

    assert_eq!(parser.finish(), HeadError::Parse(ParseError::UnexpectedEof));

    parser.reset();
    assert_eq!(parser.version(), None);
    let mut bytes = BytesMut::from(&b"HTTP/1.1 200 OK\r\n\r\n"[..]);
    let head = ready!(parser.parse(&mut bytes));
    assert_eq!(head.status, StatusCode::OK);
}

#[test]
fn test_limits() {
    let mut parser = HeadParser::with_limits(Limits::new().max_headers(2));
    let mut bytes = BytesMut::from(&b"HTTP/1.1 200 OK\r\nA: 1\r\nB: 2\r\nC: 3\r\n\r\n"[..]);
    match parser.parse(&mut bytes) {
        ParseResult::Err(err) => assert_eq!(err, HeadError::Parse(ParseError::TooManyHeaders)),
        _ => panic!("expected `TooManyHeaders`"),
    }
    assert_eq!(parser.parser().header_count(), 2);
}

#[test]
fn test_errors_are_sticky() {
    macro_rules! test {
        ($input:expr, $more:expr => $err:expr) => {
            let mut parser = HeadParser::new();
            let mut bytes = BytesMut::from(&$input[..]);
            match parser.parse(&mut bytes) {
                ParseResult::Err(err) => assert_eq!(err, $err),
                _ => panic!("expected `{:?}`", $err),
            }

            bytes.extend_from_slice($more);
            let len = bytes.len();
            match parser.parse(&mut bytes) {
                ParseResult::Err(err) => assert_eq!(err, $err),
                _ => panic!("expected `{:?}` again", $err),
            }
            assert_eq!(bytes.len(), len, "nothing is consumed after an error");
            assert_eq!(parser.finish(), $err);

            parser.reset();
            let mut bytes = BytesMut::from(&b"HTTP/1.1 200 OK\r\n\r\n"[..]);
            assert_eq!(ready!(parser.parse(&mut bytes)).status, StatusCode::OK);
        };
    }

    test!(b"HTTP/1.2 200 OK\r\n", b"\r\n" => HeadError::UnsupportedVersion);
    test!(b"HTTP/1.1 099 Low", b"\r\n\r\n" => HeadError::InvalidStatus);
    test!(b"HTTP/1.1 200 OK\r\n folded", b"\r\n\r\n" => HeadError::Parse(ParseError::InvalidHeader));
}

#[test]
fn test_encode() {
    let head = ResponseHead {
        version: Version::HTTP_11,
        status: StatusCode::NOT_FOUND,
        reason: "Not Found".into(),
        headers: vec![header("Content-Type", "text/plain"), header("Content-Length", "0")],
    };

    let mut buf = BytesMut::new();
    head.encode(&mut buf);
    assert_eq!(
        &buf[..],
        b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
    );

    let reparsed = ready!(HeadParser::new().parse(&mut buf));
    assert_eq!(reparsed, head);
    assert!(buf.is_empty());
    assert_eq!(head.get_all("CONTENT-length").count(), 1);
}
