//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session_gate` and `protected_shell` decide what may render; the rest is
//! dashboard chrome that reads the session but never changes it directly.

pub mod auth_error_screen;
pub mod protected_shell;
pub mod session_gate;
pub mod sidebar;
pub mod top_bar;
pub mod workspace_loader;
