//! Wire contract of the flashcard generation service.
//!
//! # Endpoints
//!
//! | Method | Path          | Body                                   |
//! |--------|---------------|----------------------------------------|
//! | POST   | `/upload-pdf` | multipart: `file`, `num_cards`         |
//! | GET    | `/health`     | -                                      |
//!
//! The transport itself lives in the browser layer. This module only knows
//! how to turn a status code and a body into a [`SubmitResult`], so the same
//! interpretation is used in the app and in tests.

use serde::{Deserialize, Serialize};

use crate::error::{SubmitError, SubmitResult, GENERIC_FAILURE};
use crate::models::{FileInfo, Flashcard, GenerationResult};

/// Path of the generation endpoint.
pub const UPLOAD_PATH: &str = "/upload-pdf";

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Multipart field carrying the PDF bytes.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the requested card count.
pub const NUM_CARDS_FIELD: &str = "num_cards";

// =============================================================================
// Response Bodies
// =============================================================================

/// Successful body of `POST /upload-pdf`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub ai_used: bool,
    pub filename: String,
    pub text_length: u64,
    /// Free-form confirmation from the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<GenerateResponse> for GenerationResult {
    fn from(response: GenerateResponse) -> Self {
        GenerationResult {
            flashcards: response.flashcards,
            ai_used: response.ai_used,
            file_info: FileInfo {
                filename: response.filename,
                text_length: response.text_length,
            },
        }
    }
}

/// Body of a non-2xx response.
///
/// The reason is normally in `detail`, but some deployments of the service
/// report it under `error`. Both are accepted, `detail` first.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The reason to show, or the generic fallback.
    pub fn into_message(self) -> String {
        let present = |msg: &String| !msg.trim().is_empty();
        self.detail
            .filter(present)
            .or_else(|| self.error.filter(present))
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub ai_configured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_status: Option<String>,
}

// =============================================================================
// Interpretation
// =============================================================================

/// Turn an HTTP answer from `/upload-pdf` into the submission outcome.
///
/// `status` is the HTTP status code and `body` the raw response text.
pub fn interpret_response(status: u16, body: &str) -> SubmitResult<GenerateResponse> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .into_message();
        return Err(SubmitError::Server { status, detail });
    }

    serde_json::from_str::<GenerateResponse>(body)
        .map_err(|e| SubmitError::MalformedResponse(e.to_string()))
}

/// Decode a `/health` body.
pub fn parse_health(body: &str) -> Result<HealthResponse, serde_json::Error> {
    serde_json::from_str(body)
}
