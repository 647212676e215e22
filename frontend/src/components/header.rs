use leptos::*;

use crate::services::fetch_health;
use crate::{ServiceStatus, BACKEND_URL};

#[component]
pub fn Header() -> impl IntoView {
    let (status, set_status) = create_signal(ServiceStatus::Checking);

    // Ask the service once, when the header mounts
    spawn_local(async move {
        match fetch_health(BACKEND_URL).await {
            Ok(health) => {
                log::info!(
                    "🩺 Generation service is {} (AI configured: {})",
                    health.status,
                    health.ai_configured
                );
                set_status.set(health.into());
            }
            Err(e) => {
                log::warn!("⚠️  Generation service unreachable: {}", e);
                set_status.set(ServiceStatus::Offline);
            }
        }
    });

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"FLASHCARDS"</a>
            </div>
            <div class="header-right">
                <div class=move || format!("service-status {}", status.get().css_class())>
                    <span class="status-dot"></span>
                    <span>{move || status.get().label()}</span>
                </div>
            </div>
        </header>
    }
}
