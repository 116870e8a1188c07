//! Progress bar primitive.

/// Render a track with a filled indicator proportional to `value` (0–100).
///
/// Values above 100 are drawn as full.
///
/// # Example
///
/// ```rust
/// use pdfextract::ui::components::progress_bar;
///
/// let html = progress_bar(40);
/// assert!(html.contains("width: 40%"));
/// ```
#[must_use]
pub fn progress_bar(value: u8) -> String {
    let value = value.min(100);
    format!(
        r#"<div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{value}"><div class="progress-indicator" style="width: {value}%"></div></div>"#
    )
}
