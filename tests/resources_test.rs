//! HTTP-level tests for the file-serving routes

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};
use vision_plus_server::config::Environment;
use vision_plus_server::create_router;
use vision_plus_server::services::ResourceDirectory;
use vision_plus_server::state::AppState;

/// Helper to create a file-serving server over a fresh temp directory
async fn create_file_server() -> (TempDir, ResourceDirectory, TestServer) {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let resources = ResourceDirectory::ensure(temp_dir.path().join("Resources"))
        .await
        .expect("Failed to ensure resource directory");
    let state = AppState::new(Environment::Production).with_resources(resources.clone());
    let server =
        TestServer::new(create_router(Arc::new(state))).expect("Failed to start test server");
    (temp_dir, resources, server)
}

#[tokio::test]
async fn test_serve_and_list_sample_file() {
    let (_temp_dir, resources, server) = create_file_server().await;
    let contents = b"Vision+ sample resource\n";
    std::fs::write(resources.root().join("sample.txt"), contents).unwrap();

    let response = server.get("/resources/sample.txt").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), contents);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/plain")));

    let listing = server.get("/api/resources").await;
    listing.assert_status_ok();
    let files: Vec<String> = listing.json();
    let expected = resources.root().join("sample.txt");
    assert!(files.contains(&expected.to_string_lossy().to_string()));
}

#[tokio::test]
async fn test_listing_reflects_current_directory_state() {
    let (_temp_dir, resources, server) = create_file_server().await;

    let files: Vec<String> = server.get("/api/resources").await.json();
    assert!(files.is_empty());

    std::fs::write(resources.root().join("ct_scan.png"), b"png").unwrap();
    std::fs::write(resources.root().join("notes.md"), b"# notes").unwrap();

    let files: Vec<String> = server.get("/api/resources").await.json();
    assert_eq!(files.len(), 2);
    assert!(files
        .iter()
        .all(|f| std::path::Path::new(f).starts_with(resources.root())));
}

#[tokio::test]
async fn test_binary_file_content_type() {
    let (_temp_dir, resources, server) = create_file_server().await;
    let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    std::fs::write(resources.root().join("xray.png"), png).unwrap();

    let response = server.get("/resources/xray.png").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), png);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("Content-Type should be present"),
        "image/png"
    );
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let (_temp_dir, _resources, server) = create_file_server().await;
    let response = server.get("/resources/missing.txt").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hidden_files_are_not_served() {
    let (_temp_dir, resources, server) = create_file_server().await;
    std::fs::write(resources.root().join(".env"), b"DB_PASSWORD=hunter2").unwrap();
    std::fs::create_dir(resources.root().join(".git")).unwrap();
    std::fs::write(resources.root().join(".git").join("config"), b"[core]").unwrap();

    for path in ["/resources/.env", "/resources/.git/config"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(!response.text().contains("hunter2"), "{path} leaked a dot-file");
    }
}

#[tokio::test]
async fn test_unknown_file_type_is_not_served() {
    let (_temp_dir, resources, server) = create_file_server().await;
    std::fs::write(resources.root().join("dump.zzzunknown"), b"\x00\x01\x02").unwrap();

    server
        .get("/resources/dump.zzzunknown")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_range_request_returns_partial_content() {
    let (_temp_dir, resources, server) = create_file_server().await;
    let scan: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(resources.root().join("scan.bin"), &scan).unwrap();

    let response = server
        .get("/resources/scan.bin")
        .add_header(header::RANGE, HeaderValue::from_static("bytes=0-9"))
        .await;

    response.assert_status(StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.as_bytes().as_ref(), &scan[..10]);
    assert_eq!(
        response.headers().get(header::CONTENT_RANGE).unwrap(),
        "bytes 0-9/1000"
    );

    let full = server.get("/resources/scan.bin").await;
    full.assert_status_ok();
    assert_eq!(full.headers().get(header::ACCEPT_RANGES).unwrap(), "bytes");
    assert_eq!(full.as_bytes().len(), 1000);
}

#[tokio::test]
async fn test_unchanged_file_is_not_modified() {
    let (_temp_dir, resources, server) = create_file_server().await;
    std::fs::write(resources.root().join("report.pdf"), b"%PDF-1.7").unwrap();

    let first = server.get("/resources/report.pdf").await;
    first.assert_status_ok();
    let last_modified = first
        .headers()
        .get(header::LAST_MODIFIED)
        .cloned()
        .expect("Last-Modified should be present");

    let second = server
        .get("/resources/report.pdf")
        .add_header(header::IF_MODIFIED_SINCE, last_modified)
        .await;
    second.assert_status(StatusCode::NOT_MODIFIED);
    assert!(second.as_bytes().is_empty());
}

#[tokio::test]
async fn test_path_traversal_is_rejected() {
    let (temp_dir, _resources, server) = create_file_server().await;
    // Sibling of the resource directory that must never be reachable
    std::fs::write(temp_dir.path().join("secret.txt"), b"top secret").unwrap();

    for path in [
        "/resources/../../etc/passwd",
        "/resources/..%2F..%2Fetc%2Fpasswd",
        "/resources/..%2Fsecret.txt",
        "/resources/%2Fetc%2Fpasswd",
        "/resources/%2e%2e/secret.txt",
    ] {
        let response = server.get(path).await;
        let status = response.status_code();
        assert!(
            status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN,
            "{path} returned {status}"
        );
        let body = response.text();
        assert!(!body.contains("root:"), "{path} leaked /etc/passwd");
        assert!(!body.contains("top secret"), "{path} leaked a sibling file");
    }
}

#[tokio::test]
async fn test_encoded_traversal_is_forbidden() {
    let (_temp_dir, _resources, server) = create_file_server().await;
    let response = server.get("/resources/..%2F..%2Fetc%2Fpasswd").await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_ensure_twice_keeps_contents() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("Resources");

    let first = ResourceDirectory::ensure(&path).await.expect("First start");
    std::fs::write(first.root().join("existing.txt"), b"keep me").unwrap();
    let second = ResourceDirectory::ensure(&path).await.expect("Second start");

    assert_eq!(first.root(), second.root());
    assert_eq!(
        std::fs::read(second.root().join("existing.txt")).unwrap(),
        b"keep me"
    );

    let files = second.list().await.expect("Should list directory");
    assert_eq!(files.len(), 1);
}
