//! HTTP calls to the flashcard generation service.

use flashcard_workflow::api::{FILE_FIELD, HEALTH_PATH, NUM_CARDS_FIELD, UPLOAD_PATH};
use flashcard_workflow::{
    interpret_response, parse_health, GenerateResponse, HealthResponse, SubmitError, SubmitResult,
    UploadRequest,
};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::BrowserFile;

/// Send the PDF and the card count, and read back the flashcards.
///
/// Every failure, including ones raised before the request leaves the
/// browser, comes back as a [`SubmitError`].
pub async fn generate_flashcards(
    request: UploadRequest<BrowserFile>,
    backend_url: &str,
) -> SubmitResult<GenerateResponse> {
    let form_data = FormData::new()
        .map_err(|e| SubmitError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob(FILE_FIELD, request.file.file())
        .map_err(|e| SubmitError::Transport(format!("Failed to append file: {:?}", e)))?;
    form_data
        .append_with_str(NUM_CARDS_FIELD, &request.num_cards.to_string())
        .map_err(|e| SubmitError::Transport(format!("Failed to append card count: {:?}", e)))?;

    let url = format!("{}{}", backend_url, UPLOAD_PATH);
    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| SubmitError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    interpret_response(status, &body)
}

/// The request or its body read failed before a usable answer arrived.
fn transport(err: gloo_net::Error) -> SubmitError {
    SubmitError::Transport(err.to_string())
}

/// Ask the service whether it is up and whether a model is configured.
pub async fn fetch_health(backend_url: &str) -> Result<HealthResponse, String> {
    let url = format!("{}{}", backend_url, HEALTH_PATH);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Health check returned {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_health(&body).map_err(|e| format!("Failed to parse response: {}", e))
}
