use bytes::BytesMut;
use stepline::{head::HeadParser, rt};
use tokio::{io::AsyncWriteExt, net::TcpStream};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let host = std::env::args().nth(1).unwrap_or_else(|| "example.com".into());
    let path = std::env::args().nth(2).unwrap_or_else(|| "/".into());

    let mut io = TcpStream::connect((host.as_str(), 80)).await?;
    log::info!("connected to {host}");

    let request = format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n");
    io.write_all(request.as_bytes()).await?;

    let (promises, futures) = rt::promises();
    let mut buf = BytesMut::new();
    let mut parser = HeadParser::new();

    let driver = rt::read_head_with(&mut io, &mut buf, &mut parser, promises);
    let status = async {
        if let Ok(status) = futures.status.await {
            log::info!("status known before headers: {status}");
        }
    };
    let (head, ()) = tokio::join!(driver, status);
    let head = head?;

    println!("{} {} {}", head.version, head.status.as_u16(), String::from_utf8_lossy(&head.reason));
    for header in &head.headers {
        println!(
            "{}: {}",
            String::from_utf8_lossy(&header.name),
            String::from_utf8_lossy(&header.value)
        );
    }
    println!("({} body bytes buffered)", buf.len());

    Ok(())
}
