//! Results grid for the generated flashcards.

use flashcard_workflow::format::{ai_used_label, question_heading, text_length_label};
use flashcard_workflow::Flashcard;
use leptos::*;

use crate::PageStore;

#[component]
pub fn FlashcardsSection(state: PageStore) -> impl IntoView {
    let cards = move || state.with(|s| s.flashcards().to_vec());
    let file_info = move || state.with(|s| s.file_info().cloned());
    let ai_used = move || state.with(|s| s.ai_used());

    // Clears cards, AI flag, file info and the selected file in one go
    let on_new_upload = move |_| state.update(|s| s.reset());

    view! {
        <div class="flashcards-section">
            <h2>"Generated Flashcards"</h2>

            {move || file_info().map(|info| view! {
                <div class="file-details">
                    <p><strong>"File:"</strong> " " {info.filename}</p>
                    <p><strong>"Text Length:"</strong> " " {text_length_label(info.text_length)}</p>
                    <p><strong>"AI Used:"</strong> " " {ai_used_label(ai_used())}</p>
                </div>
            })}

            <div class="flashcards-grid">
                <For
                    each=move || cards().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(idx, card)| view! { <FlashcardCard index=idx card=card/> }
                />
            </div>

            <button class="new-upload-button" on:click=on_new_upload>
                "Upload Another PDF"
            </button>
        </div>
    }
}

#[component]
fn FlashcardCard(index: usize, card: Flashcard) -> impl IntoView {
    view! {
        <div class="flashcard">
            <div class="card-front">
                <h4>{question_heading(index)}</h4>
                <p>{card.question}</p>
            </div>
            <div class="card-back">
                <h4>"Answer"</h4>
                <p>{card.answer}</p>
            </div>
        </div>
    }
}
