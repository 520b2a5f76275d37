//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and talk to it over a socket.

use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use tonefit::assets::AssetLoader;
use tonefit::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let asset_loader = Arc::new(AssetLoader::new(None, None));
    let state = create_app_state(asset_loader).expect("Failed to create app state");
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

async fn send_request(port: u16, request: &str) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("Failed to read response");
    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;

    let response = send_request(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(
        response.starts_with("HTTP/1.1 200"),
        "Should get 200 OK response, got: {response}"
    );
    assert!(response.ends_with("OK"), "Body should be OK, got: {response}");
}

#[tokio::test]
async fn test_classify_over_tcp() {
    let port = start_test_server().await;
    let body = r#"{"rgb":[123,70,56]}"#;

    let response = send_request(
        port,
        &format!(
            "POST /api/classify HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(response.contains(r#""tone":"toffee""#), "got: {response}");
}
