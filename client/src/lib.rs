//! # dashboard-client
//!
//! Leptos + WASM front-end for the Outliers dashboard.
//!
//! The crate's core is session resolution and route protection: the remote
//! session client (`net`), the session store and its pure decisions
//! (`state`), the render gate and route guard (`components`), and the login
//! redirect resolver (`util::redirect`). Pages are thin consumers.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
