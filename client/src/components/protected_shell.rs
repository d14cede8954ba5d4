//! Outer route guard around the dashboard chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place that redirects to the marketing login. It reacts to
//! session status and current path; loading and error states are left to
//! `SessionGate`.

#[cfg(test)]
#[path = "protected_shell_test.rs"]
mod protected_shell_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::api::SessionApi;
use crate::state::session::{redirect_target, shell_renders, should_navigate};
use crate::state::session_store::{SessionStore, use_session};
use crate::util::navigation::Navigator;

/// Renders children only for an authenticated session and sends confirmed
/// unauthenticated visitors to the login page with `next` set to the current path.
#[component]
pub fn ProtectedShell(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    guard_login_redirect(session.clone(), move || location.pathname.get());

    let allowed = Memo::new(move |_| shell_renders(session.status()));
    move || allowed.get().then(|| children())
}

/// Navigate to the login page whenever the redirect target for the current
/// `path` changes to a new URL.
///
/// The effect's previous value is the last target navigated to, so state
/// writes that leave the target unchanged never navigate twice.
pub(crate) fn guard_login_redirect<A, N>(session: SessionStore<A, N>, path: impl Fn() -> String + 'static)
where
    A: SessionApi + 'static,
    N: Navigator + 'static,
{
    Effect::new(move |previous: Option<Option<String>>| {
        let state = session.state();
        let target = redirect_target(&state, &path(), session.config());
        if should_navigate(target.as_deref(), previous.flatten().as_deref()) {
            if let Some(url) = target.as_deref() {
                session.navigate_external(url);
            }
        }
        target
    });
}
