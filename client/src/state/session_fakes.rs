//! Scripted session backend and recording navigator for tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use leptos::prelude::Owner;

use super::session_store::SessionStore;
use crate::config::DashboardConfig;
use crate::net::api::SessionApi;
use crate::net::http::{ApiError, Payload};
use crate::net::types::{User, UserRole};
use crate::util::navigation::Navigator;

pub(crate) type MeOutcome = Result<User, ApiError>;

enum Reply {
    Ready(MeOutcome),
    Deferred(oneshot::Receiver<MeOutcome>),
}

#[derive(Default)]
struct Script {
    me: Mutex<VecDeque<Reply>>,
    logout_error: Mutex<Option<ApiError>>,
    fetches: AtomicUsize,
    logouts: AtomicUsize,
}

/// `SessionApi` answering from a queue of scripted replies.
#[derive(Clone, Default)]
pub(crate) struct FakeApi(Arc<Script>);

impl FakeApi {
    pub(crate) fn reply(&self, outcome: MeOutcome) {
        self.0.me.lock().unwrap().push_back(Reply::Ready(outcome));
    }

    /// Queue a reply that stays pending until the sender fires.
    pub(crate) fn defer(&self) -> oneshot::Sender<MeOutcome> {
        let (tx, rx) = oneshot::channel();
        self.0.me.lock().unwrap().push_back(Reply::Deferred(rx));
        tx
    }

    pub(crate) fn fail_logout(&self, err: ApiError) {
        *self.0.logout_error.lock().unwrap() = Some(err);
    }

    pub(crate) fn fetches(&self) -> usize {
        self.0.fetches.load(Ordering::SeqCst)
    }

    pub(crate) fn logouts(&self) -> usize {
        self.0.logouts.load(Ordering::SeqCst)
    }
}

impl SessionApi for FakeApi {
    fn fetch_current_user(&self) -> impl Future<Output = MeOutcome> {
        self.0.fetches.fetch_add(1, Ordering::SeqCst);
        let reply = self.0.me.lock().unwrap().pop_front();
        async move {
            match reply {
                Some(Reply::Ready(outcome)) => outcome,
                Some(Reply::Deferred(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Transport("reply dropped".to_owned()))),
                None => Err(ApiError::Transport("no scripted reply".to_owned())),
            }
        }
    }

    fn logout_current_user(&self) -> impl Future<Output = Result<(), ApiError>> {
        self.0.logouts.fetch_add(1, Ordering::SeqCst);
        let err = self.0.logout_error.lock().unwrap().clone();
        async move { err.map_or(Ok(()), Err) }
    }
}

/// Navigator that records every URL instead of leaving the page.
#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator(Arc<Mutex<Vec<String>>>);

impl RecordingNavigator {
    pub(crate) fn visited(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_external(&self, url: &str) {
        self.0.lock().unwrap().push(url.to_owned());
    }
}

/// A store over the fakes, owned by a fresh reactive owner.
pub(crate) struct Harness {
    _owner: Owner,
    pub(crate) api: FakeApi,
    pub(crate) nav: RecordingNavigator,
    pub(crate) store: SessionStore<FakeApi, RecordingNavigator>,
}

pub(crate) fn harness() -> Harness {
    let owner = Owner::new();
    owner.set();
    let api = FakeApi::default();
    let nav = RecordingNavigator::default();
    let store = SessionStore::new(api.clone(), nav.clone(), DashboardConfig::default());
    Harness { _owner: owner, api, nav, store }
}

pub(crate) fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        org_id: "o1".to_owned(),
        email: "a@b.com".to_owned(),
        role: UserRole::Admin,
        name: None,
        created_at: None,
    }
}

pub(crate) fn http_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        message: format!("Request failed with status {status}"),
        payload: Payload::Empty,
    }
}
