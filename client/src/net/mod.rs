//! Networking modules for the session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` normalises transport outcomes into `ApiError`, `api` exposes the
//! two session operations, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
