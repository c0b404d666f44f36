use std::io;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream, duplex};

use super::{promises, read_head, read_head_with};
use crate::head::HeadParser;
use crate::http::{StatusCode, Version};

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello";

/// Write `bytes` in chunks of `size`, then close the stream.
fn write_chunked(mut io: DuplexStream, bytes: &'static [u8], size: usize) {
    tokio::spawn(async move {
        for chunk in bytes.chunks(size) {
            io.write_all(chunk).await.unwrap();
            tokio::task::yield_now().await;
        }
    });
}

#[tokio::test]
async fn test_read_head() {
    for size in [1, 3, 7, RESPONSE.len()] {
        let (client, mut server) = duplex(16);
        write_chunked(client, RESPONSE, size);

        let mut buf = BytesMut::new();
        let head = read_head(&mut server, &mut buf).await.unwrap();
        assert_eq!(head.version, Version::HTTP_11);
        assert_eq!(head.status, StatusCode::OK);
        assert_eq!(head.get("content-type").map(|v| &v[..]), Some(&b"text/plain"[..]));

        // body bytes read past the head stay in the buffer
        while buf.len() < 5 {
            let read = server.read_buf(&mut buf).await.unwrap();
            assert_ne!(read, 0, "chunk size {size}");
        }
        assert_eq!(&buf[..], b"hello");
    }
}

#[tokio::test]
async fn test_promises_resolve_early() {
    let (mut client, mut server) = duplex(64);
    let (promises, futures) = promises();

    let driver = tokio::spawn(async move {
        let mut buf = BytesMut::new();
        let mut parser = HeadParser::new();
        read_head_with(&mut server, &mut buf, &mut parser, promises).await
    });

    client.write_all(b"HTTP/1.0 30").await.unwrap();
    assert_eq!(futures.version.await.unwrap(), Version::HTTP_10);

    client.write_all(b"2 Found\r\nLocation: /").await.unwrap();
    assert_eq!(futures.status.await.unwrap(), StatusCode::FOUND);
    assert_eq!(&futures.reason.await.unwrap()[..], b"Found");

    client.write_all(b"next\r\n\r\n").await.unwrap();
    let head = futures.head.await.unwrap();
    assert_eq!(head.get("location").map(|v| &v[..]), Some(&b"/next"[..]));

    let returned = driver.await.unwrap().unwrap();
    assert_eq!(returned, head);
}

#[tokio::test]
async fn test_unexpected_eof() {
    let (client, mut server) = duplex(64);
    let (promises, futures) = promises();
    write_chunked(client, b"HTTP/1.1 200 OK\r\nContent-Len", 4);

    let mut buf = BytesMut::new();
    let err = read_head_with(&mut server, &mut buf, &mut HeadParser::new(), promises)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    assert_eq!(futures.status.await.unwrap(), StatusCode::OK);
    assert!(futures.head.await.is_err());
}

#[tokio::test]
async fn test_malformed() {
    let (client, mut server) = duplex(64);
    write_chunked(client, b"HTTP/1.1  200 OK\r\n\r\n", 64);

    let mut buf = BytesMut::new();
    let err = read_head(&mut server, &mut buf).await.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(err.to_string(), "invalid separator");
}

#[tokio::test]
async fn test_buffered_input() {
    let (_client, mut server) = duplex(64);

    // nothing is read when the buffer already holds the whole head
    let mut buf = BytesMut::from(RESPONSE);
    let head = read_head(&mut server, &mut buf).await.unwrap();
    assert_eq!(head.headers.len(), 2);
    assert_eq!(&buf[..], b"hello");
}
