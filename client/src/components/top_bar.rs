//! Top bar with the signed-in account and the sign-out control.

#[cfg(test)]
#[path = "top_bar_test.rs"]
mod top_bar_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session_store::use_session;

#[component]
pub fn TopBar() -> impl IntoView {
    let session = use_session();
    let signing_out = RwSignal::new(false);

    let label_session = session.clone();
    let account = move || label_session.user().map(|user| account_label(&user)).unwrap_or_default();

    let on_logout = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move { session.logout().await });
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__brand">"Outliers"</span>
            <div class="top-bar__account">
                <span class="top-bar__user">{account}</span>
                <button
                    class="top-bar__logout"
                    type="button"
                    disabled=move || signing_out.get()
                    on:click=on_logout
                >
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

/// `"<name or email> · <role>"` for the account badge.
pub(crate) fn account_label(user: &User) -> String {
    format!("{} · {}", user.display_name(), user.role.label())
}
