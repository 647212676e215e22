use leptos::*;

#[component]
pub fn ProcessingSection() -> impl IntoView {
    view! {
        <div class="processing-section">
            <div class="loading-spinner"></div>
            <h3>"Processing your PDF..."</h3>
            <p>"This may take a few moments"</p>
        </div>
    }
}
