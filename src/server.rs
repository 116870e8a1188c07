use axum::{
    Json, Router,
    body::Body,
    extract::{DefaultBodyLimit, Multipart, Path, Request, State, multipart::MultipartError},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::AppState;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::events::{ExtractionEvent, sse_event};
use crate::extraction::{
    AttemptPhase, AttemptSnapshot, SelectedFile, UploadValidator, ValidationError,
};
use crate::ui::{
    empty_results_panel, landing_page, render_attempt, upload_panel, upload_panel_for,
};

/// Multipart field that carries the PDF.
const FILE_FIELD: &str = "file";

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "upload.config.loaded",
        max_file_size = config.upload.max_file_size_bytes,
        increment = config.upload.progress_increment,
        tick_interval_ms = config.upload.tick_interval_ms,
        "Upload configuration loaded"
    );

    let state = AppState::from_config(Arc::clone(&config));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    // A very large timeout stands in for "disabled" so the layer stack keeps one type.
    let timeout_duration = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(config.resilience.request_timeout_secs)
    };

    Router::new()
        // HTML page and widget fragments
        .route("/", get(index_handler))
        .route("/extract", post(extract_fragment))
        .route("/extract/upload", get(upload_tab))
        .route("/extract/results", get(results_tab))
        .route("/extract/{id}/upload", get(attempt_upload_tab))
        .route("/extract/{id}/results", get(attempt_results_tab))
        .route("/extract/{id}/progress", get(progress_fragment))
        .route("/extract/{id}/reset", post(reset_fragment))
        .route("/extract/{id}/download", get(download_text))
        // JSON API
        .route("/api/extractions", post(api_create_extraction))
        .route(
            "/api/extractions/{id}",
            get(api_get_extraction).delete(api_delete_extraction),
        )
        .route("/api/extractions/{id}/events", get(api_extraction_events))
        // Static assets
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(landing_page(&state.page))
}

/// POST /extract - Validate an upload and return the next widget fragment.
///
/// Validation failures come back as a 200 with the error alert so HTMX swaps them in.
async fn extract_fragment(State(state): State<AppState>, mut multipart: Multipart) -> Html<String> {
    let file = match read_upload(&mut multipart, &state.validator).await {
        Ok(file) => file,
        Err(e) => {
            warn!(error = %e, code = e.code(), "Upload could not be read");
            return Html(upload_panel(Some(&e.to_string()), state.widget()));
        }
    };

    let (attempt, _) = state.start_attempt(file);
    Html(render_attempt(&attempt, state.widget()))
}

/// GET /extract/:id/progress - Current widget fragment for an attempt.
async fn progress_fragment(State(state): State<AppState>, Path(id): Path<Uuid>) -> Html<String> {
    match state.attempts.get(id) {
        Some(attempt) => Html(render_attempt(&attempt, state.widget())),
        None => Html(upload_panel(None, state.widget())),
    }
}

/// GET /extract/upload - "Upload PDF" tab with no attempt behind it.
async fn upload_tab(State(state): State<AppState>) -> Html<String> {
    Html(upload_panel(None, state.widget()))
}

/// GET /extract/results - "View Results" tab with no attempt behind it.
async fn results_tab() -> Html<String> {
    Html(empty_results_panel(None))
}

/// GET /extract/:id/upload - "Upload PDF" tab for an attempt.
///
/// A running attempt keeps showing its progress; otherwise a drop zone whose
/// results tab still leads back to the attempt.
async fn attempt_upload_tab(State(state): State<AppState>, Path(id): Path<Uuid>) -> Html<String> {
    match state.attempts.get(id) {
        Some(attempt) if attempt.is_processing() => {
            Html(render_attempt(&attempt, state.widget()))
        }
        Some(_) => Html(upload_panel_for(Some(id), None, state.widget())),
        None => Html(upload_panel(None, state.widget())),
    }
}

/// GET /extract/:id/results - "View Results" tab for an attempt.
async fn attempt_results_tab(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Html<String> {
    match state.attempts.get(id) {
        Some(attempt) if attempt.phase() == AttemptPhase::Completed => {
            Html(render_attempt(&attempt, state.widget()))
        }
        Some(_) => Html(empty_results_panel(Some(id))),
        None => Html(empty_results_panel(None)),
    }
}

/// POST /extract/:id/reset - Discard the attempt and show a fresh drop zone.
async fn reset_fragment(State(state): State<AppState>, Path(id): Path<Uuid>) -> Html<String> {
    if state.attempts.remove(id).is_some() {
        info!(name: "extraction.reset", attempt_id = %id, "Attempt reset");
    }
    Html(upload_panel(None, state.widget()))
}

/// GET /extract/:id/download - Extracted text as a plain-text attachment.
async fn download_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let attempt = state.attempts.get(id).ok_or(AppError::NotFound)?;
    let text = attempt.result().ok_or(AppError::NotReady)?.to_string();
    let file_name = attempt
        .file()
        .map_or_else(|| "extracted.txt".to_string(), |f| download_name(&f.name));

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    let mut resp = Response::new(Body::from(text));
    let h = resp.headers_mut();
    h.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    h.insert(header::CONTENT_DISPOSITION, disposition);
    Ok(resp)
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /api/extractions - Start an extraction from a multipart upload.
async fn api_create_extraction(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AttemptSnapshot>), AppError> {
    let file = read_upload(&mut multipart, &state.validator).await?;
    let (attempt, outcome) = state.start_attempt(file);
    outcome?;
    Ok((StatusCode::ACCEPTED, Json(attempt.snapshot())))
}

/// GET /api/extractions/:id - Attempt snapshot.
async fn api_get_extraction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AttemptSnapshot>, AppError> {
    state
        .attempts
        .get(id)
        .map(|attempt| Json(attempt.snapshot()))
        .ok_or(AppError::NotFound)
}

/// DELETE /api/extractions/:id - Reset and discard an attempt.
async fn api_delete_extraction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.attempts.remove(id).ok_or(AppError::NotFound)?;
    info!(name: "extraction.reset", attempt_id = %id, "Attempt reset");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/extractions/:id/events - SSE stream of progress until completion.
async fn api_extraction_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if state.attempts.get(id).is_none() {
        return Err(AppError::NotFound);
    }

    let store = state.attempts.clone();
    let poll = state.driver.tick_interval();

    let sse_stream = async_stream::stream! {
        let mut last: Option<ExtractionEvent> = None;
        let mut ticker = tokio::time::interval(poll);

        loop {
            ticker.tick().await;

            let Some(attempt) = store.get(id) else {
                let gone = ExtractionEvent::Error {
                    message: "Attempt was reset".to_string(),
                    code: Some("RESET".to_string()),
                };
                yield Ok::<String, std::convert::Infallible>(sse_event(&gone));
                break;
            };

            let event = ExtractionEvent::from_attempt(&attempt);
            if last.as_ref() != Some(&event) {
                yield Ok::<String, std::convert::Infallible>(sse_event(&event));
            }
            if event.is_terminal() {
                break;
            }
            last = Some(event);
        }

        yield Ok::<String, std::convert::Infallible>(sse_event(&ExtractionEvent::Done));
    };

    Ok(build_sse_response(Body::from_stream(sse_stream)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read the `file` field, counting its bytes without keeping them.
///
/// The whole field is drained either way; a wrong type keeps a size of 0.
async fn read_upload(
    multipart: &mut Multipart,
    validator: &UploadValidator,
) -> Result<SelectedFile, AppError> {
    let too_large = |e: &MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::Validation(ValidationError::FileTooLarge {
                size: validator.max_size().saturating_add(1),
                limit_mb: validator.limit_mb(),
            })
        } else {
            AppError::Multipart(e.body_text())
        }
    };

    while let Some(mut field) = multipart.next_field().await.map_err(|e| too_large(&e))? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let mut file = SelectedFile::new(name, content_type.as_deref(), 0);
        let counted = validator.check_type(&file.content_type).is_ok();

        // Drain rejected fields too, so the reply never lands mid-upload.
        let mut size: u64 = 0;
        loop {
            match field.chunk().await {
                Ok(Some(chunk)) => size = size.saturating_add(chunk.len() as u64),
                Ok(None) => break,
                // The type error outranks an oversized body.
                Err(e) if !counted && e.status() == StatusCode::PAYLOAD_TOO_LARGE => break,
                Err(e) => return Err(too_large(&e)),
            }
        }
        if counted {
            file.size = size;
        }
        return Ok(file);
    }

    Err(AppError::MissingFile)
}

/// `report.pdf` becomes `report.txt`; unsafe characters become `_`.
fn download_name(original: &str) -> String {
    let stem = std::path::Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("extracted");

    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{safe}.txt")
}

fn build_sse_response(body: Body) -> Response {
    let mut resp = Response::new(body);
    let h = resp.headers_mut();
    h.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/event-stream"),
    );
    h.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    h.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert("X-Accel-Buffering", HeaderValue::from_static("no"));
    resp
}
