//! Full-screen placeholder shown while the session resolves.

use leptos::prelude::*;

#[component]
pub fn WorkspaceLoader() -> impl IntoView {
    view! {
        <div class="session-screen" aria-busy="true">
            <div class="session-loader">
                <div class="session-loader__spinner"></div>
                <p class="session-loader__label">"Preparing your workspace..."</p>
            </div>
        </div>
    }
}
