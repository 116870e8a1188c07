//! Upload attempts and the simulated extraction pipeline.
//!
//! Nothing here reads a PDF. A selected file is checked for type and size,
//! then a timer walks its progress to 100% and swaps in a canned result.
//!
//! # Architecture
//!
//! - [`UploadValidator`]: MIME type and size ceiling checks
//! - [`UploadAttempt`]: per-widget state machine (idle, rejected, processing, completed)
//! - [`AttemptStore`]: thread-safe map of attempts by id
//! - [`ProgressDriver`]: tokio timer that advances an attempt
//!
//! # Example
//!
//! ```rust
//! use pdfextract::extraction::{SelectedFile, UploadAttempt, UploadValidator, Tick};
//!
//! let mut attempt = UploadAttempt::new();
//! let file = SelectedFile::new("report.pdf", Some("application/pdf"), 2048);
//! attempt.select(file, &UploadValidator::default()).unwrap();
//!
//! while attempt.advance(25) != Tick::Completed {}
//! assert_eq!(attempt.progress(), 100);
//! assert!(attempt.result().is_some());
//! ```

mod attempt;
mod driver;
mod placeholder;
mod store;
mod validator;

pub use attempt::{
    AttemptError, AttemptPhase, AttemptSnapshot, PROGRESS_COMPLETE, Tick, UploadAttempt,
};
pub use driver::{DEFAULT_INCREMENT, DEFAULT_TICK_INTERVAL, DriverExit, ProgressDriver};
pub use placeholder::extracted_text;
pub use store::AttemptStore;
pub use validator::{DEFAULT_MAX_FILE_SIZE, PDF_MIME, SelectedFile, UploadValidator, ValidationError};
