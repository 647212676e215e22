//! Fixed limits of the upload form.
//!
//! The card bounds and the size cap match what the generation service
//! enforces on its side.

/// MIME type a candidate must declare to be accepted.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Smallest flashcard count that can be requested.
pub const MIN_CARDS: u8 = 1;

/// Largest flashcard count that can be requested.
pub const MAX_CARDS: u8 = 20;

/// Count shown when the page loads.
pub const DEFAULT_CARDS: u8 = 5;

/// Maximum file size accepted for upload (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
