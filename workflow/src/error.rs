//! Error types for the upload workflow.
//!
//! Two families, matching the two ways a user action can fail:
//!
//! - [`SelectError`] - local validation while choosing a file
//! - [`SubmitError`] - the generation request failed in transport or on the server
//!
//! Neither is fatal. Both render to the exact text shown to the user, and
//! [`Notice`] carries that text out of a transition.

use std::fmt;

use thiserror::Error;

use crate::limits::MAX_FILE_SIZE;

// =============================================================================
// Selection Errors
// =============================================================================

/// A candidate file was refused before it reached the state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// Nothing in a drop was a PDF.
    #[error("Please upload a PDF file")]
    DroppedNotPdf,

    /// The file picker returned nothing, or something that is not a PDF.
    #[error("Please select a PDF file")]
    PickedNotPdf,

    /// The PDF exceeds the upload limit of the generation service.
    #[error("File size must be less than {}MB", MAX_FILE_SIZE / (1024 * 1024))]
    TooLarge {
        /// Size of the refused file, in bytes.
        size: u64,
    },
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Fallback text when the service gives no usable reason.
pub const GENERIC_FAILURE: &str = "Failed to upload PDF";

/// The generation request did not produce flashcards.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never got an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. `detail` is already resolved from the body.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// 2xx response whose body is not the expected JSON.
    #[error("Invalid response from server: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// Notices
// =============================================================================

/// Ephemeral user-facing message produced by a transition.
///
/// Never stored in [`crate::UploadState`]; the caller shows it and drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<SelectError> for Notice {
    fn from(err: SelectError) -> Self {
        Notice(err.to_string())
    }
}

impl From<SubmitError> for Notice {
    fn from(err: SubmitError) -> Self {
        Notice(format!("Error: {}", err))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for file selection.
pub type SelectResult<T> = Result<T, SelectError>;

/// Result type for the generation request.
pub type SubmitResult<T> = Result<T, SubmitError>;
