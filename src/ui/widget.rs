//! HTMX fragments for the upload widget.
//!
//! Every fragment renders as `<div id="extractor">` and replaces the previous
//! one with an `outerHTML` swap, so the widget only ever shows one state.
//! Each fragment starts with the "Upload PDF" / "View Results" tab pair; the
//! tabs point at the attempt's own URLs when there is one.

use uuid::Uuid;

use super::components::{
    ButtonSize, ButtonVariant, alert_destructive, button, icons, link_button, progress_bar,
};
use super::escape;
use crate::extraction::{AttemptPhase, SelectedFile, UploadAttempt};

/// Values the fragments need from configuration.
#[derive(Debug, Clone, Copy)]
pub struct WidgetSettings {
    /// Upload ceiling shown in the drop zone.
    pub limit_mb: u64,
    /// How often the processing panel polls for progress.
    pub poll_interval_ms: u64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            limit_mb: 10,
            poll_interval_ms: 100,
        }
    }
}

/// The two widget tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetTab {
    Upload,
    Results,
}

impl WidgetTab {
    /// URL that renders this tab, scoped to `attempt` when given.
    #[must_use]
    pub fn url(self, attempt: Option<Uuid>) -> String {
        let tab = match self {
            Self::Upload => "upload",
            Self::Results => "results",
        };
        match attempt {
            Some(id) => format!("/extract/{id}/{tab}"),
            None => format!("/extract/{tab}"),
        }
    }
}

fn tab_trigger(tab: WidgetTab, active: WidgetTab, attempt: Option<Uuid>, label: &str) -> String {
    let selected = tab == active;
    let state = if selected { "active" } else { "inactive" };
    button(
        ButtonVariant::Ghost,
        ButtonSize::Md,
        &format!(
            r##"role="tab" aria-selected="{selected}" data-state="{state}" hx-get="{url}" hx-target="#extractor" hx-swap="outerHTML""##,
            url = tab.url(attempt),
        ),
        label,
    )
}

fn tab_list(active: WidgetTab, attempt: Option<Uuid>) -> String {
    format!(
        r#"<div class="tabs-list" role="tablist">{upload}{results}</div>"#,
        upload = tab_trigger(WidgetTab::Upload, active, attempt, "Upload PDF"),
        results = tab_trigger(WidgetTab::Results, active, attempt, "View Results"),
    )
}

/// Render whichever panel matches the attempt's phase.
#[must_use]
pub fn render_attempt(attempt: &UploadAttempt, settings: WidgetSettings) -> String {
    match attempt.phase() {
        AttemptPhase::Idle => upload_panel(None, settings),
        AttemptPhase::Rejected => {
            let message = attempt.error().map(ToString::to_string);
            upload_panel(message.as_deref(), settings)
        }
        AttemptPhase::Processing => match attempt.file() {
            Some(file) => processing_panel(attempt.id(), file, attempt.progress(), settings),
            None => upload_panel(None, settings),
        },
        AttemptPhase::Completed => {
            let name = attempt.file().map_or("", |f| f.name.as_str());
            result_panel(attempt.id(), name, attempt.result().unwrap_or_default())
        }
    }
}

/// Drop zone with an optional error alert.
#[must_use]
pub fn upload_panel(error: Option<&str>, settings: WidgetSettings) -> String {
    upload_panel_for(None, error, settings)
}

/// Drop zone whose "View Results" tab leads back to `attempt`.
#[must_use]
pub fn upload_panel_for(
    attempt: Option<Uuid>,
    error: Option<&str>,
    settings: WidgetSettings,
) -> String {
    let alert = error
        .map(|message| alert_destructive("Error", message))
        .unwrap_or_default();

    format!(
        r##"<div id="extractor" class="extractor">
    {tabs}
    <form id="upload-form" class="upload-form" hx-post="/extract" hx-encoding="multipart/form-data" hx-target="#extractor" hx-swap="outerHTML">
        <label class="dropzone" data-dropzone>
            <input type="file" name="file" accept=".pdf" class="sr-only" data-file-input>
            <div class="dropzone-icon">{upload_icon}</div>
            <h3 class="dropzone-title" data-idle-text="Drag &amp; drop your PDF here" data-drag-text="Drop your PDF here">Drag &amp; drop your PDF here</h3>
            <p class="dropzone-hint">or <span class="link">browse files</span></p>
            <p class="muted">Supports PDF files up to {limit_mb}MB</p>
        </label>
    </form>
    {alert}
</div>"##,
        tabs = tab_list(WidgetTab::Upload, attempt),
        upload_icon = icons::UPLOAD,
        limit_mb = settings.limit_mb,
    )
}

/// File summary and progress bar; polls itself until the attempt finishes.
#[must_use]
pub fn processing_panel(
    id: Uuid,
    file: &SelectedFile,
    progress: u8,
    settings: WidgetSettings,
) -> String {
    format!(
        r##"<div id="extractor" class="extractor" hx-get="/extract/{id}/progress" hx-trigger="every {poll}ms" hx-swap="outerHTML">
    {tabs}
    <div class="file-summary">
        <div class="file-icon">{pdf_icon}</div>
        <div>
            <p class="file-name">{name}</p>
            <p class="muted">{kb} KB</p>
        </div>
    </div>
    <div class="progress-header">
        <span>Processing...</span>
        <span class="progress-value">{progress}%</span>
    </div>
    {bar}
    <p class="muted">Extracting text from your PDF. This may take a moment.</p>
</div>"##,
        poll = settings.poll_interval_ms,
        tabs = tab_list(WidgetTab::Upload, Some(id)),
        pdf_icon = icons::FILE_PDF,
        name = escape(&file.name),
        kb = file.size_kb(),
        bar = progress_bar(progress),
    )
}

/// Extracted text with download and reset actions.
#[must_use]
pub fn result_panel(id: Uuid, file_name: &str, text: &str) -> String {
    let download = link_button(
        ButtonVariant::Primary,
        ButtonSize::Md,
        &format!("/extract/{id}/download"),
        &format!("{}Download Text", icons::DOWNLOAD),
    );
    let reset = button(
        ButtonVariant::Outline,
        ButtonSize::Md,
        &format!(r##"hx-post="/extract/{id}/reset" hx-target="#extractor" hx-swap="outerHTML""##),
        &format!("{}Process Another PDF", icons::REFRESH),
    );

    format!(
        r#"<div id="extractor" class="extractor">
    {tabs}
    <div class="result-header">
        <h3>Extracted Text</h3>
        <span class="muted">{name}</span>
    </div>
    <pre class="result-text">{text}</pre>
    <div class="result-actions">{download}{reset}</div>
</div>"#,
        tabs = tab_list(WidgetTab::Results, Some(id)),
        name = escape(file_name),
        text = escape(text),
    )
}

/// "View Results" before anything has been extracted.
#[must_use]
pub fn empty_results_panel(attempt: Option<Uuid>) -> String {
    let go_to_upload = button(
        ButtonVariant::Outline,
        ButtonSize::Md,
        &format!(
            r##"hx-get="{url}" hx-target="#extractor" hx-swap="outerHTML""##,
            url = WidgetTab::Upload.url(attempt),
        ),
        "Go to Upload",
    );

    format!(
        r#"<div id="extractor" class="extractor">
    {tabs}
    <div class="empty-state">
        <div class="empty-icon">{text_icon}</div>
        <h3>No Results Yet</h3>
        <p class="muted">Upload a PDF first to see extracted text here</p>
        {go_to_upload}
    </div>
</div>"#,
        tabs = tab_list(WidgetTab::Results, attempt),
        text_icon = icons::FILE_TEXT,
    )
}
