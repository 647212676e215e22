//! PDF upload form with drag & drop support.
//!
//! Handles file selection, the card count and the generation request.
//! All decisions are delegated to [`flashcard_workflow::UploadState`];
//! this component only translates DOM events into transitions.

use flashcard_workflow::limits::{MAX_CARDS, MIN_CARDS};
use flashcard_workflow::{FileHandle, FileOrigin, Notice};
use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::services::generate_flashcards;
use crate::{BrowserFile, PageStore, BACKEND_URL, FILE_INPUT_ID, NUM_CARDS_INPUT_ID};

#[component]
pub fn UploadSection(state: PageStore) -> impl IntoView {
    // Drag handlers: keep the browser from opening the file itself
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.is_drag_over()) {
            state.update(|s| s.set_drag_over(true));
        }
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.set_drag_over(false));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();

        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| BrowserFile::all(&list))
            .unwrap_or_default();

        if let Some(Err(err)) = state.try_update(|s| s.drop_files(files)) {
            show_notice(&Notice::from(err));
        }
    };

    // Handler for the file picker
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0)).map(BrowserFile);

        if let Some(Err(err)) = state.try_update(|s| s.select_file(file, FileOrigin::Picker)) {
            show_notice(&Notice::from(err));
        }
    };

    let on_count_input = move |ev: Event| {
        let raw = event_target_value(&ev);
        state.update(|s| s.set_num_cards_input(&raw));
    };

    let on_generate = move |_| {
        let Some(request) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = generate_flashcards(request, BACKEND_URL).await;
            if let Some(Some(notice)) = state.try_update(|s| s.finish_submit(outcome)) {
                show_notice(&notice);
            }
        });
    };

    let selected_name = move || {
        state.with(|s| s.selected_file().map(|file| file.name()).unwrap_or_default())
    };

    view! {
        <div class="upload-section">
            <div
                class="upload-area"
                class:drag-over=move || state.with(|s| s.is_drag_over())
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <div class="upload-content">
                    <div class="upload-icon">"📄"</div>
                    <h3>"Upload your PDF"</h3>
                    <p>"Drag and drop your PDF here, or click to browse"</p>
                    <input
                        type="file"
                        id=FILE_INPUT_ID
                        accept=".pdf"
                        style="display:none"
                        on:change=on_file_change
                    />
                    <label for=FILE_INPUT_ID class="browse-button">
                        "Browse Files"
                    </label>
                </div>
            </div>

            <Show
                when=move || state.with(|s| s.selected_file().is_some())
                fallback=|| view! { }
            >
                <div class="file-info">
                    <p>"Selected file: " {selected_name}</p>
                    <div class="num-cards-selector">
                        <label for=NUM_CARDS_INPUT_ID>"Number of Flashcards:"</label>
                        <input
                            id=NUM_CARDS_INPUT_ID
                            type="number"
                            min=MIN_CARDS.to_string()
                            max=MAX_CARDS.to_string()
                            prop:value=move || state.with(|s| s.num_cards().to_string())
                            on:input=on_count_input
                        />
                    </div>
                    <Show
                        when=move || state.with(|s| s.can_submit())
                        fallback=|| view! { }
                    >
                        <button class="generate-button" on:click=on_generate>
                            "Generate Flashcards"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Show a transient message. Nothing is kept in state.
fn show_notice(notice: &Notice) {
    log::warn!("{}", notice);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(notice.message());
    }
}
