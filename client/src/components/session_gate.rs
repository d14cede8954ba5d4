//! Inner render gate owned by the session store.
//!
//! Blocks everything below it with the loader while the session resolves and
//! swaps in the retry screen on server/network failure. Authenticated and
//! unauthenticated sessions pass through to the route guard.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use leptos::prelude::*;

use crate::components::auth_error_screen::AuthErrorScreen;
use crate::components::workspace_loader::WorkspaceLoader;
use crate::net::api::SessionApi;
use crate::state::session::{GateView, gate_view};
use crate::state::session_store::{SessionStore, use_session};
use crate::util::navigation::Navigator;

#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    let gate_session = session.clone();
    let gate = Memo::new(move |_| gate_view(&gate_session.state()));

    let on_retry = retry_session(session);

    move || match gate.get() {
        GateView::Loader => view! { <WorkspaceLoader/> }.into_any(),
        GateView::Recoverable(message) => view! { <AuthErrorScreen message=message on_retry=on_retry/> }.into_any(),
        GateView::Pass => children().into_any(),
    }
}

/// Retry control for the error screen: re-run resolution behind the loader.
pub(crate) fn retry_session<A, N>(session: SessionStore<A, N>) -> Callback<()>
where
    A: SessionApi + Send + Sync + 'static,
    N: Navigator + Send + Sync + 'static,
{
    Callback::new(move |()| {
        let session = session.clone();
        leptos::task::spawn_local(async move { session.refresh().await });
    })
}
