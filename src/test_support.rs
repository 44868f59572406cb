//! Loopback HTTP helpers for exercising the reqwest-based clients in tests.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Bind an ephemeral loopback listener and return it with its base URL.
pub async fn local_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("local addr");
    (listener, format!("http://{addr}"))
}

/// Serve exactly one request, answering with `status` (e.g. `"200 OK"`) and a
/// JSON `body`. Returns the raw request bytes, or `None` if no client connects
/// within two seconds.
pub async fn capture_request(
    listener: TcpListener,
    status: &'static str,
    body: &'static str,
) -> Option<String> {
    let accepted = tokio::time::timeout(Duration::from_secs(2), listener.accept()).await;
    let Ok(Ok((mut socket, _))) = accepted else {
        return None;
    };

    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.expect("read request");
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
        if request_complete(&raw) {
            break;
        }
    }

    let response = format!(
        "HTTP/1.1 {status}\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\r\n{body}",
        body.len(),
    );
    socket
        .write_all(response.as_bytes())
        .await
        .expect("write response");
    socket.shutdown().await.ok();

    Some(String::from_utf8_lossy(&raw).into_owned())
}

/// A request is complete once the header block and any `content-length` body
/// have both arrived.
fn request_complete(raw: &[u8]) -> bool {
    let Some(headers_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let headers = String::from_utf8_lossy(&raw[..headers_end]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    raw.len() >= headers_end + 4 + content_length
}
