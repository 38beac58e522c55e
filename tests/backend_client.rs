// SPDX-License-Identifier: MPL-2.0
//! Backend client against a throwaway HTTP server on localhost.

use shelf_lens::api::{BackendClient, BackendUrl};
use shelf_lens::domain::ModelSlug;
use shelf_lens::error::Error;
use std::time::Duration;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const BENCHY: &str = r#"{
    "title": "3D Benchy",
    "author": "CreativeTools",
    "license": "CC-BY-ND",
    "origin_url": "https://www.3dbenchy.com",
    "package_name": "benchy",
    "description": "Torture test",
    "images": ["3d/benchy/a.png", "3d/benchy/b.png", "3d/benchy/c.png"],
    "files": [
        {"file_path": "3d/benchy/hull.stl", "file_hash": "abc123", "date": "2024-03-01 12:30:00"}
    ]
}"#;

const LIST: &str = r#"[
    {"name": "benchy", "title": "3D Benchy", "thumbnail": "3d/benchy/a.png"},
    {"name": "cube", "title": "Calibration cube"}
]"#;

fn route(method: &str, path: &str) -> (u16, &'static str) {
    match (method, path) {
        ("GET", "/api/model/benchy") => (200, BENCHY),
        ("GET", "/api/model/broken") => (200, r#"{"title": "Broken", "images": "#),
        ("GET", "/api/model/listy") => (200, "[]"),
        ("GET", "/api/models/list") => (200, LIST),
        ("POST", "/api/refresh") => (200, r#"{"status": "ok"}"#),
        ("GET", "/healthz") => (200, "ok"),
        ("GET", "/api/download/benchy") => (200, "PK-not-really-a-zip"),
        _ => (404, r#"{"error": "not found"}"#),
    }
}

/// Serves `route` until the test ends. Returns the base URL.
async fn serve() -> BackendUrl {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&request);
                let mut parts = head.split_whitespace();
                let method = parts.next().unwrap_or_default().to_string();
                let path = parts.next().unwrap_or_default().to_string();

                let (status, body) = route(&method, &path);
                let reason = if status == 200 { "OK" } else { "Not Found" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    BackendUrl::parse(&format!("http://{addr}")).expect("valid base")
}

async fn client() -> BackendClient {
    BackendClient::new(serve().await, Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn fetches_model_record() {
    let record = client()
        .await
        .fetch_model(&ModelSlug::from("benchy"))
        .await
        .expect("record");

    assert_eq!(record.title, "3D Benchy");
    assert_eq!(record.image_count(), 3);
    assert_eq!(record.files[0].file_name(), "hull.stl");
    assert_eq!(record.files[0].display_date(), "2024-03-01 12:30");
}

#[tokio::test]
async fn missing_model_is_a_404() {
    let err = client()
        .await
        .fetch_model(&ModelSlug::from("ghost"))
        .await
        .expect_err("no such model");
    assert_eq!(err, Error::Status(404));
    assert_eq!(err.i18n_key(), "error-model-not-found");
}

#[tokio::test]
async fn truncated_json_is_a_decode_error() {
    let err = client()
        .await
        .fetch_model(&ModelSlug::from("broken"))
        .await
        .expect_err("malformed body");
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn array_instead_of_record_is_a_decode_error() {
    let err = client()
        .await
        .fetch_model(&ModelSlug::from("listy"))
        .await
        .expect_err("wrong shape");
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn lists_models_and_refreshes() {
    let client = client().await;
    let models = client.list_models().await.expect("list");
    assert_eq!(models.len(), 2);
    assert_eq!(models[1].slug(), ModelSlug::from("cube"));

    client.refresh_library().await.expect("refresh");
    client.health().await.expect("healthy");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let base = BackendUrl::parse(&format!("http://{addr}")).expect("valid base");
    let client = BackendClient::new(base, Duration::from_secs(2)).expect("client");
    let err = client.health().await.expect_err("nobody listens");
    assert!(matches!(err, Error::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn package_download_is_written_to_disk() {
    let client = client().await;
    let dir = tempdir().expect("temp dir");
    let destination = dir.path().join("benchy.zip");

    let mut reports = 0;
    let written = client
        .download_to(client.urls().download("benchy"), &destination, |_, _| reports += 1)
        .await
        .expect("download");

    assert_eq!(written, "PK-not-really-a-zip".len() as u64);
    assert!(reports >= 1);
    let saved = tokio::fs::read_to_string(&destination).await.expect("saved file");
    assert_eq!(saved, "PK-not-really-a-zip");
}

#[tokio::test]
async fn failed_download_leaves_no_file() {
    let client = client().await;
    let dir = tempdir().expect("temp dir");
    let destination = dir.path().join("ghost.zip");

    let err = client
        .download_to(client.urls().download("ghost"), &destination, |_, _| {})
        .await
        .expect_err("404");
    assert_eq!(err, Error::Status(404));
    assert!(!destination.exists());
}
