//! Server-sent events describing an attempt's progress.
//!
//! # Example
//!
//! ```rust
//! use pdfextract::events::{ExtractionEvent, sse_event};
//!
//! let event = ExtractionEvent::Progress { percent: 40 };
//! let sse = sse_event(&event);
//! assert!(sse.starts_with("event: progress\n"));
//! ```

use serde::{Deserialize, Serialize};

use crate::extraction::{AttemptPhase, UploadAttempt};

/// Events streamed to clients watching an attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum ExtractionEvent {
    /// Progress moved.
    #[serde(rename = "progress")]
    Progress {
        /// Current percentage, 0 to 100.
        percent: u8,
    },

    /// The placeholder result is ready.
    #[serde(rename = "completed")]
    Completed {
        /// Extracted text.
        text: String,
    },

    /// The attempt cannot make progress.
    #[serde(rename = "error")]
    Error {
        /// Human-readable message.
        message: String,
        /// Optional code for programmatic handling.
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// Stream has ended.
    #[serde(rename = "done")]
    Done,
}

impl ExtractionEvent {
    /// The event that describes `attempt` right now.
    #[must_use]
    pub fn from_attempt(attempt: &UploadAttempt) -> Self {
        match attempt.phase() {
            AttemptPhase::Completed => Self::Completed {
                text: attempt.result().unwrap_or_default().to_string(),
            },
            AttemptPhase::Rejected => Self::Error {
                message: attempt
                    .error()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                code: attempt.error().map(|e| e.code().to_string()),
            },
            AttemptPhase::Processing | AttemptPhase::Idle => Self::Progress {
                percent: attempt.progress(),
            },
        }
    }

    /// Whether no further events follow this one.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress { .. })
    }
}

/// Get the SSE event name for an [`ExtractionEvent`].
pub fn event_name(evt: &ExtractionEvent) -> &'static str {
    match evt {
        ExtractionEvent::Progress { .. } => "progress",
        ExtractionEvent::Completed { .. } => "completed",
        ExtractionEvent::Error { .. } => "error",
        ExtractionEvent::Done => "done",
    }
}

/// Convert an [`ExtractionEvent`] to an SSE-formatted string.
pub fn sse_event(evt: &ExtractionEvent) -> String {
    let json = serde_json::to_string(evt).unwrap_or_else(|e| {
        serde_json::json!({ "type": "error", "data": { "message": e.to_string() } }).to_string()
    });

    let event_name = event_name(evt);

    format!("event: {event_name}\ndata: {json}\n\n")
}
