//! Error types for specification resolution.
//!
//! Every failure the resolver can memoize maps to exactly one HTTP status
//! and one fixed client-facing message. The underlying cause is kept on the
//! variant for logging but never leaks into the response body.

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while resolving the specification document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// The handler was built without a configuration object.
    #[error("OpenAPI specification handler is not configured")]
    ConfigurationMissing,

    /// The configuration names no specification source.
    #[error("OpenAPI specification file is not set")]
    SourceUnset,

    /// The generator collaborator returned an error.
    #[error("failed to generate OpenAPI schema: {reason}")]
    GenerationFailed {
        /// Underlying cause reported by the generator.
        reason: String,
    },

    /// The selected file source could not be read.
    #[error("OpenAPI specification file is not found: {path}: {reason}")]
    SourceNotFound {
        /// Path that was requested from the source.
        path: String,
        /// Underlying I/O cause.
        reason: String,
    },
}

impl SpecError {
    /// Create a new generation failure.
    pub fn generation_failed(reason: impl Into<String>) -> Self {
        Self::GenerationFailed {
            reason: reason.into(),
        }
    }

    /// Create a new source-not-found error.
    pub fn source_not_found(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceNotFound {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// Any read failure of a file-backed source is a 404; every other
    /// failure is a 500.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::ConfigurationMissing | Self::SourceUnset | Self::GenerationFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the message sent to clients.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing => "OpenAPI specification handler is not configured",
            Self::SourceUnset => "OpenAPI specification file is not set",
            Self::GenerationFailed { .. } => "failed to generate OpenAPI schema",
            Self::SourceNotFound { .. } => "OpenAPI specification file is not found",
        }
    }

    /// Returns the structured body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status_code().as_u16(),
            message: self.message(),
        }
    }
}

/// JSON body written for a failed specification request.
///
/// Serializes as `{"status": <code>, "message": <string>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Human-readable message.
    pub message: &'static str,
}

impl ErrorBody {
    /// Encode the body as JSON bytes.
    #[must_use]
    pub fn to_json(&self) -> Vec<u8> {
        // A struct of a u16 and a str cannot fail to serialize.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// Result type for specification resolution.
pub type SpecResult<T> = Result<T, SpecError>;
