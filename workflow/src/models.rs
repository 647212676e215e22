//! Domain models held in the upload state.

use serde::{Deserialize, Serialize};

use crate::limits::{DEFAULT_CARDS, MAX_CARDS, MIN_CARDS};

// =============================================================================
// Flashcards
// =============================================================================

/// A question/answer pair produced by the generation service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Metadata the service reports about the processed document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    /// Name of the uploaded file, as seen by the service
    pub filename: String,
    /// Number of characters extracted from the PDF
    pub text_length: u64,
}

/// Everything a successful generation yields.
///
/// Held as a single value so the cards, the AI flag and the file info are
/// always set and cleared together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub flashcards: Vec<Flashcard>,
    /// `false` means the service fell back to mock cards
    pub ai_used: bool,
    pub file_info: FileInfo,
}

// =============================================================================
// Card Count
// =============================================================================

/// Requested number of flashcards, always within `MIN_CARDS..=MAX_CARDS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumCards(u8);

impl NumCards {
    /// Clamp any integer into range.
    pub fn clamped(n: i64) -> Self {
        NumCards(n.clamp(MIN_CARDS as i64, MAX_CARDS as i64) as u8)
    }

    /// Interpret raw text from the count input.
    ///
    /// Fractions are truncated toward zero. Text that is not a number
    /// (including an empty field) becomes the minimum.
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::clamped(value.trunc() as i64),
            Ok(value) if value == f64::INFINITY => NumCards(MAX_CARDS),
            _ => NumCards(MIN_CARDS),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for NumCards {
    fn default() -> Self {
        NumCards(DEFAULT_CARDS)
    }
}

impl std::fmt::Display for NumCards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
