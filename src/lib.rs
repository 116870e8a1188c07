//! PDFExtract landing page
//!
//! A marketing page for a PDF text extraction product with a working upload
//! widget. The widget validates the selected file, animates a progress bar
//! and then shows placeholder text. No PDF is ever parsed.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server rendering HTML and HTMX fragments
//! - **Extraction**: Upload attempt state machine with a simulated progress timer
//! - **UI**: Server-rendered HTML + HTMX, with a small drag-and-drop script
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`extraction`]: Validation, attempts, store and progress driver
//! - [`events`]: SSE event model for attempt progress
//! - [`server`]: Router and request handlers
//! - [`ui`]: Page and widget rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod events;
pub mod extraction;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::extraction::{
    AttemptError, AttemptStore, ProgressDriver, SelectedFile, UploadAttempt, UploadValidator,
};
use crate::ui::{PageSettings, WidgetSettings};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live and finished upload attempts.
    pub attempts: AttemptStore,
    /// Type and size checks for uploads.
    pub validator: UploadValidator,
    /// Timer settings for simulated progress.
    pub driver: ProgressDriver,
    /// Rendering settings derived from configuration.
    pub page: Arc<PageSettings>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let validator = UploadValidator::new(config.upload.max_file_size_bytes);
        let driver = ProgressDriver::new(
            config.upload.progress_increment,
            config.upload.tick_interval(),
        );
        let page = PageSettings {
            htmx_src: config.ui.htmx_src.clone(),
            widget: WidgetSettings {
                limit_mb: validator.limit_mb(),
                poll_interval_ms: config.upload.tick_interval_ms,
            },
        };

        Self {
            attempts: AttemptStore::new(),
            validator,
            driver,
            page: Arc::new(page),
            config,
        }
    }

    #[must_use]
    pub fn widget(&self) -> WidgetSettings {
        self.page.widget
    }

    /// Run `file` through a fresh attempt.
    ///
    /// Accepted attempts are stored and their progress timer is started.
    /// Rejected attempts are returned but not stored.
    pub fn start_attempt(&self, file: SelectedFile) -> (UploadAttempt, Result<(), AttemptError>) {
        let expired = self
            .attempts
            .cleanup_expired(self.config.upload.retention());
        if expired > 0 {
            tracing::debug!(expired, "Swept expired attempts");
        }

        let mut attempt = UploadAttempt::new();
        let outcome = attempt.select(file, &self.validator);

        match &outcome {
            Ok(()) => {
                self.attempts.insert(attempt.clone());
                self.driver.spawn(self.attempts.clone(), attempt.id());
                tracing::info!(
                    name: "extraction.accepted",
                    attempt_id = %attempt.id(),
                    file_name = attempt.file().map(|f| f.name.as_str()).unwrap_or_default(),
                    size = attempt.file().map(|f| f.size).unwrap_or_default(),
                    ticks = self.driver.ticks_to_complete(),
                    "Extraction started"
                );
            }
            Err(e) => {
                tracing::info!(
                    name: "extraction.rejected",
                    attempt_id = %attempt.id(),
                    reason = %e,
                    "Upload rejected"
                );
            }
        }

        (attempt, outcome)
    }
}
