use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use pdfextract::AppState;
use pdfextract::config::{
    AppConfig, LogFormat, LoggingConfig, ResilienceConfig, ServerConfig, UiConfig, UploadConfig,
};
use pdfextract::server::build_router;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;
use uuid::Uuid;

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj <<>> endobj\ntrailer <<>>\n%%EOF\n";

fn test_config(tick_interval_ms: u64, progress_increment: u8) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            body_limit_bytes: 64 * 1024 * 1024,
            static_dir: "static".to_string(),
        },
        upload: UploadConfig {
            max_file_size_bytes: 10 * 1024 * 1024,
            progress_increment,
            tick_interval_ms,
            retention_secs: 60,
        },
        resilience: ResilienceConfig {
            timeout_disabled: false,
            request_timeout_secs: 30,
        },
        ui: UiConfig {
            htmx_src: "/static/vendor/htmx.min.js".to_string(),
        },
        logging: LoggingConfig {
            format: LogFormat::Pretty,
        },
    }
}

fn setup(tick_interval_ms: u64, progress_increment: u8) -> (TestServer, AppState) {
    setup_with(test_config(tick_interval_ms, progress_increment))
}

fn setup_with(config: AppConfig) -> (TestServer, AppState) {
    let state = AppState::from_config(Arc::new(config));
    let server = TestServer::new(build_router(state.clone())).expect("Failed to start test server");
    (server, state)
}

fn upload(name: &str, mime: &str, bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes).file_name(name).mime_type(mime),
    )
}

fn pdf_upload() -> MultipartForm {
    upload("doc.pdf", "application/pdf", PDF_BYTES.to_vec())
}

/// Pull the attempt id out of a processing fragment's polling URL.
fn attempt_id(html: &str) -> Uuid {
    let start = html.find("/extract/").expect("fragment has no attempt URL") + "/extract/".len();
    Uuid::parse_str(&html[start..start + 36]).expect("invalid attempt id")
}

async fn wait_for_completion(server: &TestServer, id: Uuid) -> Value {
    for _ in 0..200 {
        let snapshot: Value = server.get(&format!("/api/extractions/{id}")).await.json();
        if snapshot["phase"] == "completed" {
            return snapshot;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("attempt {id} never completed");
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_landing_page_renders() {
    let (server, _) = setup(100, 5);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Extract Text from PDFs"));
    assert!(html.contains("Powerful Features"));
    assert!(html.contains("Frequently Asked Questions"));
    assert!(html.contains(r#"hx-post="/extract""#));
    assert!(html.contains(r#"<script src="/static/vendor/htmx.min.js"></script>"#));
}

#[tokio::test]
async fn test_non_pdf_shows_type_error() {
    let (server, state) = setup(100, 5);

    let response = server
        .post("/extract")
        .multipart(upload("notes.txt", "text/plain", b"hello".to_vec()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Please upload a PDF file"));
    assert!(!html.contains("Processing..."));
    assert!(state.attempts.is_empty());
}

#[tokio::test]
async fn test_oversized_pdf_shows_size_error() {
    let (server, state) = setup(100, 5);
    let too_big = vec![0_u8; 10 * 1024 * 1024 + 1];

    let response = server
        .post("/extract")
        .multipart(upload("big.pdf", "application/pdf", too_big))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("File size exceeds 10MB limit"));
    assert!(state.attempts.is_empty());
}

#[tokio::test]
async fn test_valid_pdf_runs_to_result() {
    let (server, _) = setup(5, 25);

    let html = server.post("/extract").multipart(pdf_upload()).await.text();
    assert!(html.contains("Processing..."));
    assert!(html.contains("hx-trigger=\"every 5ms\""));
    let id = attempt_id(&html);

    wait_for_completion(&server, id).await;

    let result = server.get(&format!("/extract/{id}/progress")).await.text();
    assert!(result.contains("Extracted from: doc.pdf"));
    assert!(result.contains("Download Text"));
    assert!(!result.contains("hx-trigger"));

    let download = server.get(&format!("/extract/{id}/download")).await;
    assert_eq!(download.status_code(), StatusCode::OK);
    assert_eq!(
        download.header("content-type").to_str().unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        download.header("content-disposition").to_str().unwrap(),
        "attachment; filename=\"doc.txt\""
    );
    assert!(download.text().starts_with("Lorem ipsum"));
}

#[tokio::test]
async fn test_reset_clears_attempt() {
    let (server, state) = setup(1000, 5);

    let html = server.post("/extract").multipart(pdf_upload()).await.text();
    let id = attempt_id(&html);
    assert!(state.attempts.get(id).is_some());

    let reset = server.post(&format!("/extract/{id}/reset")).await;
    assert_eq!(reset.status_code(), StatusCode::OK);
    assert!(reset.text().contains("Drag &amp; drop your PDF here"));
    assert!(state.attempts.get(id).is_none());

    let progress = server.get(&format!("/extract/{id}/progress")).await.text();
    assert!(progress.contains("Drag &amp; drop your PDF here"));
}

#[tokio::test]
async fn test_download_before_completion_is_not_found() {
    let (server, _) = setup(1000, 5);

    let html = server.post("/extract").multipart(pdf_upload()).await.text();
    let id = attempt_id(&html);

    let response = server.get(&format!("/extract/{id}/download")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], "NOT_READY");
}

#[tokio::test]
async fn test_result_tabs_follow_attempt() {
    let (server, _) = setup(1000, 5);

    let empty = server.get("/extract/results").await.text();
    assert!(empty.contains("No Results Yet"));
    assert!(empty.contains(r#"hx-get="/extract/upload""#));

    let html = server.post("/extract").multipart(pdf_upload()).await.text();
    let id = attempt_id(&html);

    let pending = server.get(&format!("/extract/{id}/results")).await.text();
    assert!(pending.contains("No Results Yet"));
    assert!(pending.contains(&format!(r#"hx-get="/extract/{id}/upload""#)));

    let back = server.get(&format!("/extract/{id}/upload")).await.text();
    assert!(back.contains("Processing..."));
    assert!(back.contains("hx-trigger"));
}

#[tokio::test]
async fn test_completed_attempt_keeps_results_tab() {
    let (server, _) = setup(5, 50);

    let html = server.post("/extract").multipart(pdf_upload()).await.text();
    let id = attempt_id(&html);
    wait_for_completion(&server, id).await;

    let upload = server.get(&format!("/extract/{id}/upload")).await.text();
    assert!(upload.contains("Drag &amp; drop your PDF here"));
    assert!(upload.contains(&format!(r#"hx-get="/extract/{id}/results""#)));

    let results = server.get(&format!("/extract/{id}/results")).await.text();
    assert!(results.contains("Extracted from: doc.pdf"));
}

#[tokio::test]
async fn test_second_upload_keeps_first_in_flight() {
    let mut config = test_config(20, 5);
    config.upload.retention_secs = 0;
    let (server, state) = setup_with(config);

    let first = attempt_id(&server.post("/extract").multipart(pdf_upload()).await.text());
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(state.attempts.get(first).is_some_and(|a| a.progress() > 0));

    let second = attempt_id(&server.post("/extract").multipart(pdf_upload()).await.text());

    assert!(state.attempts.get(first).is_some());
    assert!(state.attempts.get(second).is_some());
    wait_for_completion(&server, first).await;
}

#[tokio::test]
async fn test_large_wrong_type_is_read_to_the_end() {
    let state = AppState::from_config(Arc::new(test_config(100, 5)));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state).into_make_service())
            .await
            .unwrap();
    });

    let boundary = "pdfextract-test-boundary";
    let head = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"archive.zip\"\r\nContent-Type: application/zip\r\n\r\n"
    );
    let tail = format!("\r\n--{boundary}--\r\n");
    let payload = vec![b'z'; 40 * 1024 * 1024];
    let content_length = head.len() + payload.len() + tail.len();
    let request = format!(
        "POST /extract HTTP/1.1\r\nHost: {addr}\r\nContent-Type: multipart/form-data; boundary={boundary}\r\nContent-Length: {content_length}\r\nConnection: close\r\n\r\n"
    );

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    stream.write_all(head.as_bytes()).await.unwrap();
    stream
        .write_all(&payload)
        .await
        .expect("server closed the connection before the upload finished");
    stream.write_all(tail.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    let response = String::from_utf8_lossy(&response);
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Please upload a PDF file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON API
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_api_rejects_wrong_type() {
    let (server, _) = setup(100, 5);

    let response = server
        .post("/api/extractions")
        .multipart(upload("photo.png", "image/png", vec![1, 2, 3]))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "WRONG_FILE_TYPE");
    assert_eq!(body["error"], "Please upload a PDF file");
}

#[tokio::test]
async fn test_api_rejects_oversized_file() {
    let (server, _) = setup(100, 5);

    let response = server
        .post("/api/extractions")
        .multipart(upload(
            "big.pdf",
            "application/pdf",
            vec![0_u8; 10 * 1024 * 1024 + 1],
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["code"], "FILE_TOO_LARGE");
}

#[tokio::test]
async fn test_api_requires_file_field() {
    let (server, _) = setup(100, 5);

    let form = MultipartForm::new().add_text("comment", "no file here");
    let response = server.post("/api/extractions").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "MISSING_FILE");
}

#[tokio::test]
async fn test_api_lifecycle() {
    let (server, _) = setup(5, 10);

    let response = server.post("/api/extractions").multipart(pdf_upload()).await;
    assert_eq!(response.status_code(), StatusCode::ACCEPTED);
    let created: Value = response.json();
    assert_eq!(created["phase"], "processing");
    assert_eq!(created["progress"], 0);
    assert_eq!(created["file"]["name"], "doc.pdf");
    assert_eq!(created["file"]["size"], PDF_BYTES.len());

    let id: Uuid = serde_json::from_value(created["id"].clone()).unwrap();
    let done = wait_for_completion(&server, id).await;
    assert_eq!(done["progress"], 100);
    assert!(done["result"].as_str().is_some_and(|r| !r.is_empty()));

    let deleted = server.delete(&format!("/api/extractions/{id}")).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let gone = server.get(&format!("/api/extractions/{id}")).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_event_stream() {
    let (server, _) = setup(5, 50);

    let created: Value = server
        .post("/api/extractions")
        .multipart(pdf_upload())
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_string();

    let response = server.get(&format!("/api/extractions/{id}/events")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "text/event-stream"
    );

    let body = response.text();
    assert!(body.contains("event: completed"));
    assert!(body.contains("Extracted from: doc.pdf"));
    assert!(body.trim_end().ends_with(r#"data: {"type":"done"}"#));
}

#[tokio::test]
async fn test_api_unknown_attempt() {
    let (server, _) = setup(100, 5);
    let id = Uuid::new_v4();

    assert_eq!(
        server.get(&format!("/api/extractions/{id}")).await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server
            .delete(&format!("/api/extractions/{id}"))
            .await
            .status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server
            .get(&format!("/api/extractions/{id}/events"))
            .await
            .status_code(),
        StatusCode::NOT_FOUND
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Static assets
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_static_assets_are_served() -> anyhow::Result<()> {
    let app = build_router(AppState::from_config(Arc::new(test_config(100, 5))));

    let response = app
        .clone()
        .oneshot(Request::get("/static/dropzone.js").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let script = to_bytes(response.into_body(), usize::MAX).await?;
    assert!(String::from_utf8(script.to_vec())?.contains("data-dropzone"));

    let missing = app
        .oneshot(Request::get("/static/nope.css").body(Body::empty())?)
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    Ok(())
}
