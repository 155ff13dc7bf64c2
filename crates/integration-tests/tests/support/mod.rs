//! Local HTTP fixture for reachability tests
//!
//! Routes:
//! - `/package.tar.gz` -> 200
//! - `/moved`          -> 302 to `/package.tar.gz`
//! - `/loop`           -> 302 to itself
//! - `/slow`           -> never responds
//! - anything else     -> 404

#![allow(dead_code)] // each test binary uses a subset

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn response(path: &str) -> Option<String> {
    let (status, location) = match path {
        "/package.tar.gz" => ("200 OK", None),
        "/moved" => ("302 Found", Some("/package.tar.gz")),
        "/loop" => ("302 Found", Some("/loop")),
        "/slow" => return None,
        _ => ("404 Not Found", None),
    };

    let location = location
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    Some(format!(
        "HTTP/1.1 {}\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
        status, location
    ))
}

async fn handle(mut socket: TcpStream) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

    match response(&path) {
        Some(response) => {
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        None => tokio::time::sleep(Duration::from_secs(30)).await,
    }
}

/// Start the fixture and return its base URL (e.g. `http://127.0.0.1:40123`)
pub async fn spawn_http_fixture() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(handle(socket));
        }
    });

    format!("http://{}", addr)
}

/// URL on a local port with nothing listening
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/package.tar.gz", addr)
}
