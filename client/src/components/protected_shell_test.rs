use super::*;

use any_spawner::Executor;
use futures::executor::block_on;

use crate::state::session_fakes::{harness, http_error, user};

fn run_effects() {
    Executor::poll_local();
}

#[test]
fn unauthenticated_mount_navigates_to_login_once() {
    let _ = Executor::init_futures_executor();
    let h = harness();
    let path = RwSignal::new("/".to_owned());
    guard_login_redirect(h.store.clone(), move || path.get());

    run_effects();
    assert!(h.nav.visited().is_empty(), "loading must not redirect");

    h.api.reply(Err(http_error(401)));
    block_on(h.store.load_user());
    run_effects();
    assert_eq!(h.nav.visited(), vec!["http://localhost:3000/auth?next=%2F".to_owned()]);

    // Another confirmed 401 rewrites the state but keeps the same target.
    h.api.reply(Err(http_error(401)));
    block_on(h.store.load_user());
    run_effects();
    assert_eq!(h.nav.visited().len(), 1);
}

#[test]
fn path_change_while_unauthenticated_carries_new_next() {
    let _ = Executor::init_futures_executor();
    let h = harness();
    h.api.reply(Err(http_error(401)));
    block_on(h.store.load_user());

    let path = RwSignal::new("/datasets".to_owned());
    guard_login_redirect(h.store.clone(), move || path.get());
    run_effects();

    path.set("/insights".to_owned());
    run_effects();

    assert_eq!(
        h.nav.visited(),
        vec![
            "http://localhost:3000/auth?next=%2Fdatasets".to_owned(),
            "http://localhost:3000/auth?next=%2Finsights".to_owned(),
        ]
    );
}

#[test]
fn authenticated_and_error_sessions_never_redirect() {
    let _ = Executor::init_futures_executor();
    let h = harness();
    let path = RwSignal::new("/settings".to_owned());
    guard_login_redirect(h.store.clone(), move || path.get());

    h.api.reply(Ok(user("u1")));
    block_on(h.store.load_user());
    run_effects();

    h.api.reply(Err(http_error(503)));
    block_on(h.store.refresh());
    run_effects();

    assert!(h.nav.visited().is_empty());
}

#[test]
fn logout_navigates_once_without_next() {
    let _ = Executor::init_futures_executor();
    let h = harness();
    h.api.reply(Ok(user("u1")));
    block_on(h.store.load_user());

    let path = RwSignal::new("/settings".to_owned());
    guard_login_redirect(h.store.clone(), move || path.get());
    run_effects();

    block_on(h.store.logout());
    run_effects();

    assert_eq!(h.nav.visited(), vec!["http://localhost:3000/auth".to_owned()]);
}
