//! Upload workflow state and its transitions.
//!
//! ```text
//!            select / count                 success
//!   ┌──────────┐  submit   ┌────────────┐ ─────────▶ ┌────────────────┐
//!   │ Selecting │ ────────▶ │ Processing │            │ ShowingResults │
//!   └──────────┘ ◀──────── └────────────┘            └────────────────┘
//!        ▲          failure                                   │
//!        └───────────────────────── reset ────────────────────┘
//! ```
//!
//! Every user or network event is a method on [`UploadState`]. Methods
//! never block and never perform I/O: [`UploadState::begin_submit`] hands
//! back the request to send, and the caller feeds the outcome into
//! [`UploadState::finish_submit`].

use crate::api::GenerateResponse;
use crate::error::{Notice, SelectError, SelectResult, SubmitResult};
use crate::limits::{MAX_FILE_SIZE, PDF_MIME_TYPE};
use crate::models::{FileInfo, Flashcard, GenerationResult, NumCards};

// =============================================================================
// File Handles
// =============================================================================

/// Metadata the workflow needs from a user-chosen file.
///
/// The browser layer implements this for its blob type; tests use plain
/// structs.
pub trait FileHandle: Clone {
    fn name(&self) -> String;

    /// Declared MIME type, e.g. `application/pdf`.
    fn mime_type(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    fn is_pdf(&self) -> bool {
        self.mime_type() == PDF_MIME_TYPE
    }
}

/// Where a candidate file came from. Only changes the rejection wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOrigin {
    Drop,
    Picker,
}

// =============================================================================
// Views
// =============================================================================

/// The three mutually exclusive regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    UploadForm,
    Processing,
    Results,
}

/// What to send for one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest<F> {
    pub file: F,
    pub num_cards: NumCards,
}

// =============================================================================
// Upload State
// =============================================================================

/// All state of one page view.
#[derive(Clone, Debug)]
pub struct UploadState<F> {
    selected_file: Option<F>,
    num_cards: NumCards,
    is_drag_over: bool,
    is_processing: bool,
    result: Option<GenerationResult>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            num_cards: NumCards::default(),
            is_drag_over: false,
            is_processing: false,
            result: None,
        }
    }
}

impl<F: FileHandle> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn num_cards(&self) -> NumCards {
        self.num_cards
    }

    pub fn is_drag_over(&self) -> bool {
        self.is_drag_over
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    /// Cards of the last successful generation, empty before any.
    pub fn flashcards(&self) -> &[Flashcard] {
        self.result
            .as_ref()
            .map(|r| r.flashcards.as_slice())
            .unwrap_or(&[])
    }

    pub fn ai_used(&self) -> bool {
        self.result.as_ref().map(|r| r.ai_used).unwrap_or(false)
    }

    pub fn file_info(&self) -> Option<&FileInfo> {
        self.result.as_ref().map(|r| &r.file_info)
    }

    /// Region to render. Processing wins; results need at least one card.
    pub fn view(&self) -> View {
        if self.is_processing {
            View::Processing
        } else if !self.flashcards().is_empty() {
            View::Results
        } else {
            View::UploadForm
        }
    }

    /// Whether the generate control should be offered.
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.is_processing
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Accept `candidate` if it is a PDF within the size limit.
    ///
    /// On rejection the state is untouched.
    pub fn select_file(&mut self, candidate: Option<F>, origin: FileOrigin) -> SelectResult<()> {
        let not_pdf = match origin {
            FileOrigin::Drop => SelectError::DroppedNotPdf,
            FileOrigin::Picker => SelectError::PickedNotPdf,
        };

        let file = match candidate {
            Some(file) if file.is_pdf() => file,
            Some(file) => {
                log::warn!("Rejected '{}' ({})", file.name(), file.mime_type());
                return Err(not_pdf);
            }
            None => {
                log::warn!("No file chosen");
                return Err(not_pdf);
            }
        };

        let size = file.size();
        if size > MAX_FILE_SIZE {
            log::warn!("Rejected '{}': {} bytes", file.name(), size);
            return Err(SelectError::TooLarge { size });
        }

        log::info!("📄 Selected '{}' ({} bytes)", file.name(), size);
        self.selected_file = Some(file);
        Ok(())
    }

    /// Handle a drop: take the first PDF among the dropped files.
    ///
    /// Also clears the drag-over flag, whatever the outcome.
    pub fn drop_files<I>(&mut self, files: I) -> SelectResult<()>
    where
        I: IntoIterator<Item = F>,
    {
        self.is_drag_over = false;
        let candidate = files.into_iter().find(|file| file.is_pdf());
        self.select_file(candidate, FileOrigin::Drop)
    }

    pub fn set_drag_over(&mut self, over: bool) {
        self.is_drag_over = over;
    }

    /// Store a clamped card count.
    pub fn set_num_cards(&mut self, n: i64) {
        self.num_cards = NumCards::clamped(n);
        log::debug!("Card count set to {}", self.num_cards);
    }

    /// Store a card count typed into the form.
    pub fn set_num_cards_input(&mut self, raw: &str) {
        self.num_cards = NumCards::from_input(raw);
        log::debug!("Card count set to {} from {:?}", self.num_cards, raw);
    }

    /// Enter `Processing` and return the request to send.
    ///
    /// Returns `None`, changing nothing, when no file is selected or a
    /// request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<UploadRequest<F>> {
        if self.is_processing {
            log::warn!("Submit ignored: a request is already in flight");
            return None;
        }
        let file = self.selected_file.clone()?;

        self.is_processing = true;
        log::info!("📤 Uploading '{}' for {} cards", file.name(), self.num_cards);

        Some(UploadRequest {
            file,
            num_cards: self.num_cards,
        })
    }

    /// Leave `Processing` with the outcome of the request.
    ///
    /// On failure the previous results and the selected file are kept, and
    /// the returned notice should be shown to the user. A completion that
    /// arrives while nothing is in flight is dropped.
    pub fn finish_submit(&mut self, outcome: SubmitResult<GenerateResponse>) -> Option<Notice> {
        if !self.is_processing {
            log::warn!("Dropping completion with no request in flight");
            return None;
        }
        self.is_processing = false;

        match outcome {
            Ok(response) => {
                log::info!(
                    "✅ {} flashcards for '{}' (AI used: {})",
                    response.flashcards.len(),
                    response.filename,
                    response.ai_used
                );
                self.result = Some(response.into());
                None
            }
            Err(err) => {
                match err.status() {
                    Some(status) => log::warn!("❌ Upload failed ({}): {}", status, err),
                    None => log::warn!("❌ Upload failed: {}", err),
                }
                Some(err.into())
            }
        }
    }

    /// Back to an empty form. The card count is kept.
    pub fn reset(&mut self) {
        log::info!("🔄 Starting a new upload");
        self.result = None;
        self.selected_file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct TestFile {
        name: &'static str,
        mime: &'static str,
        size: u64,
    }

    impl FileHandle for TestFile {
        fn name(&self) -> String {
            self.name.to_string()
        }
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
        fn size(&self) -> u64 {
            self.size
        }
    }

    fn pdf(name: &'static str) -> TestFile {
        TestFile {
            name,
            mime: "application/pdf",
            size: 2048,
        }
    }

    fn text(name: &'static str) -> TestFile {
        TestFile {
            name,
            mime: "text/plain",
            size: 10,
        }
    }

    fn success() -> GenerateResponse {
        GenerateResponse {
            flashcards: vec![Flashcard {
                question: "Q1".into(),
                answer: "A1".into(),
            }],
            ai_used: true,
            filename: "notes.pdf".into(),
            text_length: 1200,
            message: None,
        }
    }

    fn with_results() -> UploadState<TestFile> {
        let mut state = UploadState::new();
        state.select_file(Some(pdf("notes.pdf")), FileOrigin::Picker).unwrap();
        state.begin_submit().unwrap();
        assert!(state.finish_submit(Ok(success())).is_none());
        state
    }

    #[test]
    fn test_initial_state() {
        let state: UploadState<TestFile> = UploadState::new();
        assert!(state.selected_file().is_none());
        assert_eq!(state.num_cards().get(), 5);
        assert!(!state.is_drag_over());
        assert!(!state.is_processing());
        assert!(state.flashcards().is_empty());
        assert!(!state.ai_used());
        assert!(state.file_info().is_none());
        assert_eq!(state.view(), View::UploadForm);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_drop_pdf() {
        let mut state = UploadState::new();
        state.set_drag_over(true);
        assert!(state.is_drag_over());

        state.drop_files(vec![pdf("notes.pdf")]).unwrap();
        assert_eq!(state.selected_file().unwrap().name, "notes.pdf");
        assert!(!state.is_drag_over());
        assert_eq!(state.num_cards().get(), 5);
        assert_eq!(state.view(), View::UploadForm);
        assert!(state.can_submit());
    }

    #[test]
    fn test_drop_picks_first_pdf() {
        let mut state = UploadState::new();
        state
            .drop_files(vec![text("a.txt"), pdf("b.pdf"), pdf("c.pdf")])
            .unwrap();
        assert_eq!(state.selected_file().unwrap().name, "b.pdf");
    }

    #[test]
    fn test_non_pdf_is_rejected() {
        let mut state = UploadState::new();
        state.set_drag_over(true);
        assert_eq!(
            state.drop_files(vec![text("a.txt")]),
            Err(SelectError::DroppedNotPdf)
        );
        assert!(state.selected_file().is_none());
        assert!(!state.is_drag_over());

        assert_eq!(
            state.select_file(Some(text("a.txt")), FileOrigin::Picker),
            Err(SelectError::PickedNotPdf)
        );
        assert_eq!(
            state.select_file(None, FileOrigin::Picker),
            Err(SelectError::PickedNotPdf)
        );
        assert_eq!(state.drop_files(Vec::new()), Err(SelectError::DroppedNotPdf));
        assert!(state.selected_file().is_none());
    }

    #[test]
    fn test_rejection_keeps_previous_file() {
        let mut state = UploadState::new();
        state.select_file(Some(pdf("keep.pdf")), FileOrigin::Picker).unwrap();

        let pdf_like = TestFile {
            name: "fake.pdf",
            mime: "application/x-pdf",
            size: 10,
        };
        assert!(state.select_file(Some(pdf_like), FileOrigin::Picker).is_err());
        assert_eq!(state.selected_file().unwrap().name, "keep.pdf");
    }

    #[test]
    fn test_oversized_pdf_is_rejected() {
        let mut state = UploadState::new();
        let big = TestFile {
            name: "big.pdf",
            mime: "application/pdf",
            size: MAX_FILE_SIZE + 1,
        };
        assert_eq!(
            state.select_file(Some(big), FileOrigin::Drop),
            Err(SelectError::TooLarge {
                size: MAX_FILE_SIZE + 1
            })
        );
        assert!(state.selected_file().is_none());

        let edge = TestFile {
            name: "edge.pdf",
            mime: "application/pdf",
            size: MAX_FILE_SIZE,
        };
        assert!(state.select_file(Some(edge), FileOrigin::Drop).is_ok());
    }

    #[test]
    fn test_num_cards_clamped() {
        let mut state: UploadState<TestFile> = UploadState::new();
        state.set_num_cards(25);
        assert_eq!(state.num_cards().get(), 20);
        state.set_num_cards(-4);
        assert_eq!(state.num_cards().get(), 1);
        state.set_num_cards(12);
        assert_eq!(state.num_cards().get(), 12);
        state.set_num_cards_input("");
        assert_eq!(state.num_cards().get(), 1);
        state.set_num_cards_input("25");
        assert_eq!(state.num_cards().get(), 20);
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut state: UploadState<TestFile> = UploadState::new();
        assert!(state.begin_submit().is_none());
        assert!(!state.is_processing());
        assert_eq!(state.view(), View::UploadForm);
    }

    #[test]
    fn test_submit_is_not_reentrant() {
        let mut state = UploadState::new();
        state.select_file(Some(pdf("notes.pdf")), FileOrigin::Drop).unwrap();
        state.set_num_cards(8);

        let request = state.begin_submit().unwrap();
        assert_eq!(request.file.name, "notes.pdf");
        assert_eq!(request.num_cards.get(), 8);
        assert!(state.is_processing());
        assert_eq!(state.view(), View::Processing);
        assert!(!state.can_submit());

        assert!(state.begin_submit().is_none());
        assert!(state.is_processing());
    }

    #[test]
    fn test_success_shows_results() {
        let state = with_results();
        assert!(!state.is_processing());
        assert_eq!(state.view(), View::Results);
        assert_eq!(state.flashcards().len(), 1);
        assert_eq!(state.flashcards()[0].answer, "A1");
        assert!(state.ai_used());

        let info = state.file_info().unwrap();
        assert_eq!(info.filename, "notes.pdf");
        assert_eq!(info.text_length, 1200);
    }

    #[test]
    fn test_success_with_no_cards_stays_on_form() {
        let mut state = UploadState::new();
        state.select_file(Some(pdf("empty.pdf")), FileOrigin::Drop).unwrap();
        state.begin_submit().unwrap();

        let mut response = success();
        response.flashcards.clear();
        assert!(state.finish_submit(Ok(response)).is_none());
        assert!(!state.is_processing());
        assert_eq!(state.view(), View::UploadForm);
    }

    #[test]
    fn test_server_error() {
        let mut state = UploadState::new();
        state.select_file(Some(pdf("notes.pdf")), FileOrigin::Drop).unwrap();
        state.begin_submit().unwrap();

        let notice = state
            .finish_submit(Err(SubmitError::Server {
                status: 500,
                detail: "PDF parse failed".into(),
            }))
            .unwrap();
        assert_eq!(notice.message(), "Error: PDF parse failed");
        assert!(!state.is_processing());
        assert_eq!(state.selected_file().unwrap().name, "notes.pdf");
        assert!(state.flashcards().is_empty());
        assert_eq!(state.view(), View::UploadForm);
        assert!(state.can_submit());
    }

    #[test]
    fn test_failure_keeps_prior_results() {
        let mut state = with_results();
        // Reachable only through a caller that bypasses the hidden control.
        state.begin_submit().unwrap();
        let notice = state
            .finish_submit(Err(SubmitError::Transport("Failed to fetch".into())))
            .unwrap();
        assert_eq!(notice.message(), "Error: Failed to fetch");
        assert_eq!(state.flashcards().len(), 1);
        assert!(state.ai_used());
        assert_eq!(state.view(), View::Results);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state: UploadState<TestFile> = UploadState::new();
        assert!(state
            .finish_submit(Err(SubmitError::Transport("late".into())))
            .is_none());
        assert!(state.finish_submit(Ok(success())).is_none());
        assert!(state.flashcards().is_empty());
        assert!(!state.is_processing());
    }

    #[test]
    fn test_reset() {
        let mut state = with_results();
        state.set_num_cards(12);
        state.reset();

        assert!(state.flashcards().is_empty());
        assert!(!state.ai_used());
        assert!(state.file_info().is_none());
        assert!(state.selected_file().is_none());
        assert_eq!(state.num_cards().get(), 12);
        assert_eq!(state.view(), View::UploadForm);
    }

    #[test]
    fn test_processing_only_between_submit_and_outcome() {
        let mut state = UploadState::new();
        assert!(!state.is_processing());
        state.select_file(Some(pdf("notes.pdf")), FileOrigin::Drop).unwrap();
        assert!(!state.is_processing());
        state.begin_submit().unwrap();
        assert!(state.is_processing());
        state.set_num_cards(3);
        state.set_drag_over(true);
        assert!(state.is_processing());
        state.finish_submit(Ok(success()));
        assert!(!state.is_processing());
        state.reset();
        assert!(!state.is_processing());
    }
}
