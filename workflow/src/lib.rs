//! # Flashcard Workflow - upload/result state machine
//!
//! Everything the flashcard page decides, with no browser in sight:
//! which file is accepted, how many cards are requested, which region is
//! visible and how a response from the generation service is read.
//!
//! ```text
//! ┌──────────────┐   begin_submit   ┌──────────────┐   POST /upload-pdf   ┌──────────┐
//! │ UploadState  │ ───────────────▶ │ UploadRequest│ ───────────────────▶ │ service  │
//! │              │ ◀─────────────── │              │ ◀─────────────────── │          │
//! └──────────────┘   finish_submit  └──────────────┘  interpret_response  └──────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - [`UploadState`] and its transitions
//! - [`models`] - Flashcards, file info, the clamped card count
//! - [`api`] - Wire types and response interpretation
//! - [`error`] - Selection and submission errors, user notices
//! - [`format`] - Display strings for the results panel
//! - [`limits`] - Card bounds, size cap, accepted MIME type

// Core
pub mod error;
pub mod limits;
pub mod models;

// Workflow
pub mod state;

// Service contract
pub mod api;

// Presentation helpers
pub mod format;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Notice, SelectError, SelectResult, SubmitError, SubmitResult};

pub use models::{FileInfo, Flashcard, GenerationResult, NumCards};

pub use state::{FileHandle, FileOrigin, UploadRequest, UploadState, View};

pub use api::{interpret_response, parse_health, ErrorBody, GenerateResponse, HealthResponse};
