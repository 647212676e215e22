//! Application configuration.
//!
//! Centralized configuration for the flashcard frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Generation service base URL.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Page title.
pub const APP_TITLE: &str = "AI Flashcard Generator";

/// Tagline under the title.
pub const APP_TAGLINE: &str = "Upload your PDF and get instant flashcards!";

/// DOM id of the hidden file input, targeted by the "Browse Files" label.
pub const FILE_INPUT_ID: &str = "file-input";

/// DOM id of the card count input.
pub const NUM_CARDS_INPUT_ID: &str = "num-cards-input";
