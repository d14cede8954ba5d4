//! Authenticated landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session_store::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || session.user().map(|user| welcome_line(&user)).unwrap_or_default();

    view! {
        <section class="page">
            <h1 class="page__title">{greeting}</h1>
            <p class="page__summary">"Pick a section from the sidebar to get started."</p>
        </section>
    }
}

pub(crate) fn welcome_line(user: &User) -> String {
    format!("Welcome back, {}", user.display_name())
}
