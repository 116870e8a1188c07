//! Type and size checks applied to a selected file.

use serde::Serialize;
use thiserror::Error;

/// The only MIME type the widget accepts.
pub const PDF_MIME: &str = "application/pdf";

/// Default upload ceiling (10MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Metadata for the file the user picked. The bytes themselves are never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    /// Original filename as reported by the browser.
    pub name: String,
    /// MIME type, either from the upload or guessed from the name.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl SelectedFile {
    /// Build a file reference, guessing the type from the name when the
    /// browser did not send one.
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: Option<&str>, size: u64) -> Self {
        let name = name.into();
        let content_type = content_type
            .filter(|ct| !ct.trim().is_empty())
            .map_or_else(
                || {
                    mime_guess::from_path(&name)
                        .first_raw()
                        .unwrap_or("application/octet-stream")
                        .to_string()
                },
                str::to_string,
            );
        Self {
            name,
            content_type,
            size,
        }
    }

    /// Size in kilobytes, formatted with two decimals.
    #[must_use]
    pub fn size_kb(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let kb = self.size as f64 / 1024.0;
        format!("{kb:.2}")
    }
}

/// Reasons a selected file is turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a PDF file")]
    WrongFileType { content_type: String },

    #[error("File size exceeds {limit_mb}MB limit")]
    FileTooLarge { size: u64, limit_mb: u64 },
}

impl ValidationError {
    /// Machine-readable code for API clients.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongFileType { .. } => "WRONG_FILE_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
        }
    }
}

/// Accepts PDFs up to a fixed ceiling.
#[derive(Debug, Clone, Copy)]
pub struct UploadValidator {
    max_size: u64,
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE)
    }
}

impl UploadValidator {
    #[must_use]
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }

    #[must_use]
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Ceiling in megabytes as shown to users, rounded up.
    ///
    /// Configuration only allows whole megabytes, so rounding matters only
    /// for validators built by hand.
    #[must_use]
    pub fn limit_mb(&self) -> u64 {
        self.max_size.div_ceil(BYTES_PER_MB)
    }

    /// Type check alone; run before the body is read.
    pub fn check_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Ok(())
        } else {
            Err(ValidationError::WrongFileType {
                content_type: content_type.to_string(),
            })
        }
    }

    /// Size check alone; `size` may be a running count while streaming.
    pub fn check_size(&self, size: u64) -> Result<(), ValidationError> {
        if size > self.max_size {
            Err(ValidationError::FileTooLarge {
                size,
                limit_mb: self.limit_mb(),
            })
        } else {
            Ok(())
        }
    }

    /// Full check: type first, then size.
    pub fn validate(&self, file: &SelectedFile) -> Result<(), ValidationError> {
        self.check_type(&file.content_type)?;
        self.check_size(file.size)
    }
}
