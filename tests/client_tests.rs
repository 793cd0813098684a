use emote_relay::RelayError;
use emote_relay::emote::client::{BOT_USER_AGENT, EMOTE_TIMEOUT, fetch_with_timeout, send_emote};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Tests for the upstream client against local TCP fixtures standing in for
/// the emote API.

/// Serves one canned HTTP response and returns the base URL to reach it.
async fn spawn_upstream(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    format!("http://{addr}")
}

/// Accepts a connection and stalls without ever responding.
async fn spawn_stalled_upstream(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(hold).await;
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_send_emote_returns_status_and_body() {
    let server = spawn_upstream("200 OK", "OK").await;

    let upstream = send_emote(&format!("{server}/join?tc=ABC&uid1=111&emote_id=999"))
        .await
        .unwrap();

    assert_eq!(upstream.status, 200);
    assert_eq!(upstream.body, "OK");
}

#[tokio::test]
async fn test_upstream_error_status_is_not_a_failure() {
    let server = spawn_upstream("404 Not Found", "no such room").await;

    let upstream = send_emote(&format!("{server}/join")).await.unwrap();

    assert_eq!(upstream.status, 404);
    assert_eq!(upstream.body, "no such room");
}

#[tokio::test]
async fn test_stalled_upstream_times_out() {
    let server = spawn_stalled_upstream(Duration::from_secs(5)).await;

    let result = fetch_with_timeout(&format!("{server}/join"), Duration::from_millis(200)).await;

    assert!(matches!(result, Err(RelayError::Timeout)));
}

#[tokio::test]
async fn test_connection_refused_is_an_http_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = send_emote(&format!("http://{addr}/join")).await;

    match result {
        Err(RelayError::HttpError(message)) => {
            assert!(!message.is_empty(), "failure description must be non-empty");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_url_is_an_http_error() {
    let result = send_emote("not a url/join").await;

    assert!(matches!(result, Err(RelayError::HttpError(_))));
}

#[test]
fn test_client_constants() {
    assert_eq!(EMOTE_TIMEOUT, Duration::from_secs(8));
    assert_eq!(BOT_USER_AGENT, "NOVRA-X-Bot/1.0");
}
