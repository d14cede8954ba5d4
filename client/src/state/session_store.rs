//! Process-wide session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once at the application root and handed to descendants through
//! Leptos context. It owns the only resolution procedure and the only writes
//! to `SessionState`; components read through it and ask for changes via
//! `refresh` and `logout`.
//!
//! CONCURRENCY
//! ===========
//! All writes happen on the UI event loop. Overlapping refreshes are allowed
//! and the later-settling one wins. Results arriving after the owning scope
//! is disposed are dropped.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use super::session::{ResolutionError, SessionState, SessionStatus};
use crate::config::DashboardConfig;
use crate::net::api::{HttpSessionApi, SessionApi};
use crate::net::types::User;
use crate::util::navigation::{BrowserNavigator, Navigator};

/// Store type provided to the running dashboard.
pub type DashboardSession = SessionStore<HttpSessionApi, BrowserNavigator>;

/// Owner of the resolved session and its resolution flow.
pub struct SessionStore<A, N> {
    state: RwSignal<SessionState>,
    api: Arc<A>,
    navigator: Arc<N>,
    config: Arc<DashboardConfig>,
    started: Arc<AtomicBool>,
}

impl<A, N> Clone for SessionStore<A, N> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            api: Arc::clone(&self.api),
            navigator: Arc::clone(&self.navigator),
            config: Arc::clone(&self.config),
            started: Arc::clone(&self.started),
        }
    }
}

impl<A, N> SessionStore<A, N>
where
    A: SessionApi,
    N: Navigator,
{
    /// New store in the boot state (`Loading`, no user).
    pub fn new(api: A, navigator: N, config: DashboardConfig) -> Self {
        Self::with_shared_api(Arc::new(api), navigator, config)
    }

    /// New store over an api client shared with other stores.
    pub fn with_shared_api(api: Arc<A>, navigator: N, config: DashboardConfig) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            api,
            navigator: Arc::new(navigator),
            config: Arc::new(config),
            started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Tracked read of the whole state.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Untracked read of the whole state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.with(SessionState::status)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|s| s.error_message().map(str::to_owned))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// First-mount resolution. Yields the future once per store; later calls
    /// return `None` so overlapping mount triggers never double-resolve.
    pub fn initial_load(&self) -> Option<impl Future<Output = ()> + 'static>
    where
        A: 'static,
        N: 'static,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }
        let store = self.clone();
        Some(async move { store.load_user().await })
    }

    /// Resolve the current user and classify the outcome.
    pub async fn load_user(&self) {
        self.write(SessionState::begin_resolution);

        let outcome = self.api.fetch_current_user().await;
        let detail = outcome.as_ref().err().map(ToString::to_string).unwrap_or_default();

        match self.write(|s| s.settle(outcome)) {
            None => log::debug!("session store disposed, discarding resolution result"),
            Some(None) => log::debug!("session resolved"),
            Some(Some(ResolutionError::CleanUnauthenticated)) => log::info!("no valid session, login required"),
            Some(Some(ResolutionError::ServerError(_))) => {
                log::error!("session resolution failed with server error: {detail}");
            }
            Some(Some(ResolutionError::NetworkError(_))) => {
                log::error!("session resolution failed due to network or unexpected error: {detail}");
            }
        }
    }

    /// Show the loader and resolve again. Bound to the retry control.
    pub async fn refresh(&self) {
        self.write(SessionState::mark_loading);
        self.load_user().await;
    }

    /// End the session and leave for the login entry point (no `next`).
    ///
    /// The local outcome does not depend on the backend call: a failed logout
    /// is logged and the session is cleared anyway.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout_current_user().await {
            log::warn!("server-side logout failed, clearing local session anyway: {err}");
        }
        self.write(SessionState::sign_out);
        self.navigate_external(&self.config.auth_url(None));
    }

    /// Top-level navigation through the store's navigator.
    pub fn navigate_external(&self, url: &str) {
        log::info!("navigating to {url}");
        self.navigator.navigate_external(url);
    }

    fn write<U>(&self, f: impl FnOnce(&mut SessionState) -> U) -> Option<U> {
        self.state.try_update(f)
    }
}

/// Session store provided at the application root.
///
/// # Panics
///
/// Panics when called outside the tree below `App`.
pub fn use_session() -> DashboardSession {
    expect_context::<DashboardSession>()
}

/// Create the dashboard's store over the process-wide api client and provide
/// it as context.
pub fn provide_session() -> DashboardSession {
    let store =
        SessionStore::with_shared_api(HttpSessionApi::global(), BrowserNavigator, DashboardConfig::global().clone());
    provide_context(store.clone());
    store
}
