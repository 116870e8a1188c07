//! Server-rendered HTML.
//!
//! The page is plain HTML with HTMX attributes; the upload widget swaps its
//! own fragment as the attempt moves through its phases.
//!
//! # Structure
//!
//! - [`page`]: Landing page shell and marketing sections
//! - [`widget`]: Upload, processing and result fragments
//! - [`components`]: Reusable markup primitives
//! - [`content`]: Static marketing copy

use std::borrow::Cow;

pub mod components;
pub mod content;
pub mod page;
pub mod widget;

pub use page::{PageSettings, html_shell, landing_page};
pub use widget::{
    WidgetSettings, WidgetTab, empty_results_panel, processing_panel, render_attempt,
    result_panel, upload_panel, upload_panel_for,
};

/// Escape text for use inside an element.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape text for use inside a double-quoted attribute.
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}
