//! Recoverable error screen for failed session resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown for server and network failures only. It never navigates away; the
//! user retries in place so a down backend cannot cause a redirect loop.

use leptos::prelude::*;

/// Error card with the failure message and a retry button.
#[component]
pub fn AuthErrorScreen(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="session-screen">
            <div class="session-error" role="alert">
                <div class="session-error__icon">"!"</div>
                <h1 class="session-error__title">"We cannot verify your session"</h1>
                <p class="session-error__message">{message}</p>
                <button class="session-error__retry" type="button" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        </div>
    }
}
