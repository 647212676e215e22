//! Flashcard Generator - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for turning a PDF into study flashcards
//! through the remote generation service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (service status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent  (owns the single PageStore)                    │
//! │  ├── Hero (title, tagline)                                   │
//! │  └── one of:                                                 │
//! │      ├── UploadSection      (View::UploadForm)               │
//! │      ├── ProcessingSection  (View::Processing)               │
//! │      └── FlashcardsSection  (View::Results)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser file adapter, page store, service status
//! - [`components`] - UI components (Header, Upload, Flashcards, etc.)
//! - [`services`] - Generation service communication

use flashcard_workflow::View as Region;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{BrowserFile, PageState, PageStore, ServiceStatus};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The whole workflow state, fresh for every page load
    let state: PageStore = create_rw_signal(PageState::new());

    // Only changes when the visible region does, so typing a count
    // does not remount the form
    let region = create_memo(move |_| state.with(|s| s.view()));

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            {move || match region.get() {
                Region::UploadForm => view! { <UploadSection state=state/> }.into_view(),
                Region::Processing => view! { <ProcessingSection/> }.into_view(),
                Region::Results => view! { <FlashcardsSection state=state/> }.into_view(),
            }}
        </div>

        <Footer/>
    }
}
