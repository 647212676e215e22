//! Browser-side types.
//!
//! - **Files** - adapter from `web_sys::File` to the workflow's file handle
//! - **State** - the page's single reactive store
//! - **Service status** - what the header badge shows

use flashcard_workflow::{FileHandle, HealthResponse, UploadState};
use leptos::RwSignal;
use web_sys::{File, FileList};

// =============================================================================
// Files
// =============================================================================

/// A file chosen by the user, by drop or by the picker.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(pub File);

impl BrowserFile {
    pub fn file(&self) -> &File {
        &self.0
    }

    /// All files of a `FileList`, in order.
    pub fn all(list: &FileList) -> Vec<BrowserFile> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(BrowserFile)
            .collect()
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

// =============================================================================
// State
// =============================================================================

/// The workflow state as seen by components.
pub type PageState = UploadState<BrowserFile>;

/// Shared handle on [`PageState`], created once by the top-level view.
pub type PageStore = RwSignal<PageState>;

// =============================================================================
// Service Status
// =============================================================================

/// Reachability of the generation service, for the header badge.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceStatus {
    /// Not asked yet
    Checking,
    /// Answered; `ai_configured` tells real model from mock cards
    Online { ai_configured: bool },
    /// Request failed or the body was unreadable
    Offline,
}

impl ServiceStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ServiceStatus::Checking => "status-checking",
            ServiceStatus::Online { ai_configured: true } => "status-ready",
            ServiceStatus::Online { ai_configured: false } => "status-mock",
            ServiceStatus::Offline => "status-offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Checking => "Checking service...",
            ServiceStatus::Online { ai_configured: true } => "AI ready",
            ServiceStatus::Online { ai_configured: false } => "Mock mode",
            ServiceStatus::Offline => "Service offline",
        }
    }
}

impl From<HealthResponse> for ServiceStatus {
    fn from(health: HealthResponse) -> Self {
        ServiceStatus::Online {
            ai_configured: health.ai_configured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_health() {
        let health = HealthResponse {
            status: "healthy".into(),
            ai_configured: true,
            api_key_status: Some("configured".into()),
        };
        let status = ServiceStatus::from(health);
        assert_eq!(status, ServiceStatus::Online { ai_configured: true });
        assert_eq!(status.label(), "AI ready");
        assert_eq!(status.css_class(), "status-ready");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ServiceStatus::Online { ai_configured: false }.label(), "Mock mode");
        assert_eq!(ServiceStatus::Offline.label(), "Service offline");
        assert_eq!(ServiceStatus::Checking.css_class(), "status-checking");
    }
}
