//! The upload attempt state machine.
//!
//! An attempt starts idle, moves to `Processing` once a valid file is
//! selected, and lands in `Completed` when its progress reaches 100. A failed
//! validation parks it in `Rejected` until the user picks another file.
//! [`UploadAttempt::reset`] returns any state to idle.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::placeholder;
use super::validator::{SelectedFile, UploadValidator, ValidationError};

/// Progress value that completes an attempt.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Where an attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptPhase {
    Idle,
    Rejected,
    Processing,
    Completed,
}

/// Why a selection was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    #[error("A file is already being processed")]
    InFlight,
}

/// Outcome of a single timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Progress moved to the given percentage.
    Progressed(u8),
    /// Progress reached 100 and the result is set.
    Completed,
    /// Nothing is processing; the timer should stop.
    Idle,
}

/// A single, in-memory upload attempt.
#[derive(Debug, Clone)]
pub struct UploadAttempt {
    id: Uuid,
    file: Option<SelectedFile>,
    error: Option<ValidationError>,
    progress: u8,
    processing: bool,
    result: Option<String>,
    created_at: DateTime<Utc>,
}

/// Serializable view of an attempt.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptSnapshot {
    pub id: Uuid,
    pub phase: AttemptPhase,
    pub file: Option<SelectedFile>,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Default for UploadAttempt {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadAttempt {
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    #[must_use]
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            file: None,
            error: None,
            progress: 0,
            processing: false,
            result: None,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        if self.processing {
            AttemptPhase::Processing
        } else if self.result.is_some() {
            AttemptPhase::Completed
        } else if self.error.is_some() {
            AttemptPhase::Rejected
        } else {
            AttemptPhase::Idle
        }
    }

    /// Validate `file` and, if it passes, start processing.
    ///
    /// A rejected file only records the error; progress is left alone.
    pub fn select(
        &mut self,
        file: SelectedFile,
        validator: &UploadValidator,
    ) -> Result<(), AttemptError> {
        if self.processing {
            return Err(AttemptError::InFlight);
        }

        if let Err(err) = validator.validate(&file) {
            self.error = Some(err.clone());
            return Err(err.into());
        }

        self.file = Some(file);
        self.error = None;
        self.result = None;
        self.progress = 0;
        self.processing = true;
        Ok(())
    }

    /// Apply one timer tick.
    pub fn advance(&mut self, increment: u8) -> Tick {
        self.advance_at(increment, &Local::now())
    }

    /// Apply one timer tick, stamping a completed result with `now`.
    pub fn advance_at<Tz>(&mut self, increment: u8, now: &DateTime<Tz>) -> Tick
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        if !self.processing {
            return Tick::Idle;
        }

        self.progress = self
            .progress
            .saturating_add(increment)
            .min(PROGRESS_COMPLETE);

        if self.progress < PROGRESS_COMPLETE {
            return Tick::Progressed(self.progress);
        }

        self.processing = false;
        self.result = self
            .file
            .as_ref()
            .map(|file| placeholder::extracted_text(file, now));
        Tick::Completed
    }

    /// Clear everything back to the initial state. The id is kept.
    pub fn reset(&mut self) {
        self.file = None;
        self.error = None;
        self.progress = 0;
        self.processing = false;
        self.result = None;
    }

    #[must_use]
    pub fn snapshot(&self) -> AttemptSnapshot {
        AttemptSnapshot {
            id: self.id,
            phase: self.phase(),
            file: self.file.clone(),
            progress: self.progress,
            error: self.error.as_ref().map(ToString::to_string),
            result: self.result.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::validator::PDF_MIME;

    fn pdf(size: u64) -> SelectedFile {
        SelectedFile::new("doc.pdf", Some(PDF_MIME), size)
    }

    fn run_to_completion(attempt: &mut UploadAttempt, increment: u8) -> Vec<u8> {
        let mut seen = Vec::new();
        loop {
            match attempt.advance(increment) {
                Tick::Progressed(p) => seen.push(p),
                Tick::Completed => {
                    seen.push(attempt.progress());
                    return seen;
                }
                Tick::Idle => return seen,
            }
        }
    }

    #[test]
    fn test_new_attempt_is_idle() {
        let attempt = UploadAttempt::new();
        assert_eq!(attempt.phase(), AttemptPhase::Idle);
        assert_eq!(attempt.progress(), 0);
        assert!(attempt.file().is_none());
        assert!(attempt.result().is_none());
    }

    #[test]
    fn test_non_pdf_rejected_without_progress() {
        let mut attempt = UploadAttempt::new();
        let file = SelectedFile::new("photo.jpg", Some("image/jpeg"), 100);

        let err = attempt
            .select(file, &UploadValidator::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "Please upload a PDF file");
        assert_eq!(attempt.phase(), AttemptPhase::Rejected);
        assert_eq!(attempt.progress(), 0);
        assert!(!attempt.is_processing());
        assert_eq!(attempt.advance(5), Tick::Idle);
        assert_eq!(attempt.progress(), 0);
    }

    #[test]
    fn test_oversized_pdf_rejected() {
        let mut attempt = UploadAttempt::new();

        let err = attempt
            .select(pdf(11 * 1024 * 1024), &UploadValidator::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "File size exceeds 10MB limit");
        assert_eq!(attempt.phase(), AttemptPhase::Rejected);
    }

    #[test]
    fn test_valid_pdf_reaches_completion() {
        let mut attempt = UploadAttempt::new();
        attempt.select(pdf(4096), &UploadValidator::default()).unwrap();
        assert_eq!(attempt.phase(), AttemptPhase::Processing);

        let seen = run_to_completion(&mut attempt, 5);

        assert_eq!(seen.len(), 20);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(attempt.progress(), 100);
        assert_eq!(attempt.phase(), AttemptPhase::Completed);
        assert!(!attempt.result().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_progress_clamps_at_100() {
        let mut attempt = UploadAttempt::new();
        attempt.select(pdf(1), &UploadValidator::default()).unwrap();

        let seen = run_to_completion(&mut attempt, 30);

        assert_eq!(seen, vec![30, 60, 90, 100]);
        assert_eq!(attempt.advance(30), Tick::Idle);
        assert_eq!(attempt.progress(), 100);
    }

    #[test]
    fn test_select_while_processing_is_refused() {
        let validator = UploadValidator::default();
        let mut attempt = UploadAttempt::new();
        attempt.select(pdf(1), &validator).unwrap();
        attempt.advance(5);

        assert_eq!(
            attempt.select(pdf(2), &validator),
            Err(AttemptError::InFlight)
        );
        assert_eq!(attempt.progress(), 5);
        assert_eq!(attempt.file().map(|f| f.size), Some(1));
    }

    #[test]
    fn test_valid_selection_clears_previous_error() {
        let validator = UploadValidator::default();
        let mut attempt = UploadAttempt::new();
        let _ = attempt.select(SelectedFile::new("a.txt", Some("text/plain"), 1), &validator);
        assert!(attempt.error().is_some());

        attempt.select(pdf(1), &validator).unwrap();
        assert!(attempt.error().is_none());
        assert_eq!(attempt.phase(), AttemptPhase::Processing);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let validator = UploadValidator::default();

        let mut completed = UploadAttempt::new();
        completed.select(pdf(1), &validator).unwrap();
        run_to_completion(&mut completed, 50);

        let mut rejected = UploadAttempt::new();
        let _ = rejected.select(pdf(u64::MAX), &validator);

        let mut midway = UploadAttempt::new();
        midway.select(pdf(1), &validator).unwrap();
        midway.advance(40);

        for attempt in [&mut completed, &mut rejected, &mut midway] {
            let id = attempt.id();
            attempt.reset();
            assert_eq!(attempt.id(), id);
            assert_eq!(attempt.phase(), AttemptPhase::Idle);
            assert!(attempt.file().is_none());
            assert!(attempt.error().is_none());
            assert_eq!(attempt.progress(), 0);
            assert!(attempt.result().is_none());
            assert_eq!(attempt.advance(5), Tick::Idle);
        }
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut attempt = UploadAttempt::new();
        attempt.select(pdf(1), &UploadValidator::default()).unwrap();
        attempt.advance(25);

        let json = serde_json::to_value(attempt.snapshot()).unwrap();
        assert_eq!(json["phase"], "processing");
        assert_eq!(json["progress"], 25);
        assert_eq!(json["file"]["name"], "doc.pdf");
        assert!(json.get("result").is_none());
    }
}
