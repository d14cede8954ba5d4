//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render inside `ProtectedShell`, so they can assume an authenticated
//! session and read the user straight from the session store.

pub mod home;
pub mod section;
