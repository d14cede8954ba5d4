//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the session value and the pure decisions derived from it;
//! `session_store` owns the only mutation path and the async resolution flow.

pub mod session;
pub mod session_store;

#[cfg(test)]
pub(crate) mod session_fakes;
