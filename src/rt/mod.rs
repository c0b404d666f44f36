//! Tokio driver.
//!
//! [`read_head`] reads from an [`AsyncRead`] until the response head is complete.
//! [`read_head_with`] additionally fulfils [`Promises`] as soon as each part of the status line
//! is known, so waiters can act on the status before the headers arrive.
//!
//! ```no_run
//! # async fn app(mut io: impl tokio::io::AsyncRead + Unpin) -> std::io::Result<()> {
//! use bytes::BytesMut;
//! use stepline::{head::HeadParser, rt};
//!
//! let (promises, futures) = rt::promises();
//! let mut buf = BytesMut::new();
//! let mut parser = HeadParser::new();
//!
//! let driver = rt::read_head_with(&mut io, &mut buf, &mut parser, promises);
//! let waiter = async {
//!     if let Ok(status) = futures.status.await {
//!         println!("status: {status}");
//!     }
//! };
//! let (head, ()) = tokio::join!(driver, waiter);
//! println!("{} headers", head?.headers.len());
//! # Ok(())
//! # }
//! ```
use std::io;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::oneshot;

use crate::common::ParseResult;
use crate::head::{HeadParser, ResponseHead};
use crate::http::{StatusCode, Version};
use crate::log::{debug, info, warning};

#[cfg(test)]
mod test;

const READ_CAPACITY: usize = 4 * 1024;

/// Create the sender and receiver sides of the status line and head results.
pub fn promises() -> (Promises, Futures) {
    let (version_tx, version) = oneshot::channel();
    let (status_tx, status) = oneshot::channel();
    let (reason_tx, reason) = oneshot::channel();
    let (head_tx, head) = oneshot::channel();

    let promises = Promises {
        version: Some(version_tx),
        status: Some(status_tx),
        reason: Some(reason_tx),
        head: Some(head_tx),
    };
    let futures = Futures { version, status, reason, head };
    (promises, futures)
}

/// Sender side of [`promises`].
///
/// Each promise is fulfilled at most once. Promises that are never fulfilled, because the
/// response is malformed or truncated, are dropped, which resolves the matching receiver with
/// [`oneshot::error::RecvError`].
#[derive(Debug, Default)]
pub struct Promises {
    version: Option<oneshot::Sender<Version>>,
    status: Option<oneshot::Sender<StatusCode>>,
    reason: Option<oneshot::Sender<Bytes>>,
    head: Option<oneshot::Sender<ResponseHead>>,
}

/// Receiver side of [`promises`].
#[derive(Debug)]
pub struct Futures {
    pub version: oneshot::Receiver<Version>,
    pub status: oneshot::Receiver<StatusCode>,
    pub reason: oneshot::Receiver<Bytes>,
    pub head: oneshot::Receiver<ResponseHead>,
}

impl Promises {
    /// Fulfil every promise whose value became known.
    fn fulfil(&mut self, parser: &HeadParser) {
        if let Some(version) = parser.version() {
            send(&mut self.version, version);
        }
        if let Some(status) = parser.status() {
            send(&mut self.status, status);
        }
        if let Some(reason) = parser.reason() {
            send(&mut self.reason, reason.clone());
        }
    }

    fn complete(mut self, head: &ResponseHead) {
        send(&mut self.version, head.version);
        send(&mut self.status, head.status);
        send(&mut self.reason, head.reason.clone());
        send(&mut self.head, head.clone());
    }
}

fn send<T>(promise: &mut Option<oneshot::Sender<T>>, value: T) {
    if let Some(tx) = promise.take() {
        // receiver may no longer be interested
        let _ = tx.send(value);
    }
}

/// Read from `io` until the response head is complete.
///
/// Bytes already in `buf` are parsed first. On success, `buf` holds the body bytes read past
/// the head.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidData`] if the response is malformed, and
/// [`io::ErrorKind::UnexpectedEof`] if `io` ends before the head is complete.
pub async fn read_head<R>(io: &mut R, buf: &mut BytesMut) -> io::Result<ResponseHead>
where
    R: AsyncRead + Unpin,
{
    read_head_with(io, buf, &mut HeadParser::new(), Promises::default()).await
}

/// Read from `io` until the response head is complete, fulfilling `promises` along the way.
///
/// See [`read_head`] for buffer and error semantics.
pub async fn read_head_with<R>(
    io: &mut R,
    buf: &mut BytesMut,
    parser: &mut HeadParser,
    mut promises: Promises,
) -> io::Result<ResponseHead>
where
    R: AsyncRead + Unpin,
{
    loop {
        if !buf.is_empty() {
            match parser.parse(buf) {
                ParseResult::Ok(head) => {
                    info!("response head received: {} {}", head.version, head.status);
                    promises.complete(&head);
                    return Ok(head);
                }
                ParseResult::Err(err) => {
                    promises.fulfil(parser);
                    warning!("malformed response head: {err}");
                    return Err(io::Error::new(io::ErrorKind::InvalidData, err));
                }
                ParseResult::Pending => promises.fulfil(parser),
            }
        }

        buf.reserve(READ_CAPACITY);
        let read = io.read_buf(buf).await?;
        if read == 0 {
            let err = parser.finish();
            warning!("connection closed before response head complete: {err}");
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, err));
        }
        debug!("read {read} bytes");
    }
}
