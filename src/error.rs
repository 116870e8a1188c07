//! HTTP-facing error type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::extraction::{AttemptError, ValidationError};

/// Errors returned by the JSON API.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Attempt not found")]
    NotFound,

    #[error("No file was provided in the 'file' field")]
    MissingFile,

    #[error("Failed to read upload: {0}")]
    Multipart(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A file is already being processed")]
    InFlight,

    #[error("Extraction has not completed yet")]
    NotReady,
}

impl From<AttemptError> for AppError {
    fn from(err: AttemptError) -> Self {
        match err {
            AttemptError::Rejected(e) => Self::Validation(e),
            AttemptError::InFlight => Self::InFlight,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::NotReady => StatusCode::NOT_FOUND,
            Self::MissingFile | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InFlight => StatusCode::CONFLICT,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MissingFile => "MISSING_FILE",
            Self::Multipart(_) => "MULTIPART_ERROR",
            Self::Validation(e) => e.code(),
            Self::InFlight => "IN_FLIGHT",
            Self::NotReady => "NOT_READY",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
