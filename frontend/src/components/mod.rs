//! UI Components for the flashcard generator.
//!
//! # Layout Components
//! - [`Header`] - Logo and generation service status
//! - [`Hero`] - Main title and tagline
//! - [`Footer`] - Page footer
//!
//! # Workflow Components
//! Exactly one of these is mounted at a time, chosen from
//! [`flashcard_workflow::View`]:
//! - [`UploadSection`] - PDF drop zone, file picker and card count
//! - [`ProcessingSection`] - Spinner while the request is in flight
//! - [`FlashcardsSection`] - Generated cards and file details

mod header;
mod hero;
mod upload;
mod processing;
mod flashcards;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use processing::*;
pub use flashcards::*;
pub use footer::*;
