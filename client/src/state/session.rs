//! Session status model and the pure decisions derived from it.
//!
//! DESIGN
//! ======
//! `SessionState` is only mutated by the session store. Everything the UI
//! needs (which gate to show, where to redirect) is computed from a state
//! snapshot so the effectful parts stay in one place each.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::DashboardConfig;
use crate::net::http::ApiError;
use crate::net::types::User;

pub const SERVER_UNAVAILABLE_MESSAGE: &str = "The server is currently unavailable. Please try again shortly.";
pub const UNREACHABLE_MESSAGE: &str = "We could not verify your session because the server could not be reached. \
     Please check your connection and try again.";
pub const FALLBACK_ERROR_MESSAGE: &str =
    "We could not reach the authentication service. Please try again in a moment.";

/// Where session resolution currently stands. Exactly one holds at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Initial resolution or a manual refresh is in flight.
    #[default]
    Loading,
    /// The backend returned a user for the session credential.
    Authenticated,
    /// The backend confirmed there is no valid session.
    Unauthenticated,
    /// The session could not be determined (server or network failure).
    Error,
}

/// Why a resolution attempt failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    /// Backend answered 401: no session. Drives the login redirect.
    CleanUnauthenticated,
    /// Backend reachable but failed (5xx); carries its message when it sent one.
    ServerError(Option<String>),
    /// Backend unreachable, unexpected status, or unreadable response.
    NetworkError(Option<String>),
}

impl ResolutionError {
    /// Classify a transport error. This is the only place status codes are interpreted.
    pub fn classify(err: &ApiError) -> Self {
        match err {
            ApiError::Status { status: 401, .. } => Self::CleanUnauthenticated,
            ApiError::Status { status: 500..=599, message, .. } => {
                Self::ServerError(Some(message.clone()).filter(|m| !m.trim().is_empty()))
            }
            other => Self::NetworkError(Some(other.to_string())),
        }
    }

    /// Message shown on the retry screen; `None` for a clean 401.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::CleanUnauthenticated => None,
            Self::ServerError(message) => {
                Some(message.clone().unwrap_or_else(|| SERVER_UNAVAILABLE_MESSAGE.to_owned()))
            }
            Self::NetworkError(_) => Some(UNREACHABLE_MESSAGE.to_owned()),
        }
    }
}

/// Resolved session value.
///
/// `user` is present iff `status` is [`SessionStatus::Authenticated`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    status: SessionStatus,
    user: Option<User>,
    error_message: Option<String>,
    signed_out: bool,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True after an explicit logout, until the next resolution starts.
    pub fn signed_out(&self) -> bool {
        self.signed_out
    }

    /// Start of a resolution attempt: drop the previous error.
    pub(crate) fn begin_resolution(&mut self) {
        self.error_message = None;
        self.signed_out = false;
    }

    /// Manual refresh: back to the blocking loader.
    pub(crate) fn mark_loading(&mut self) {
        self.status = SessionStatus::Loading;
        self.user = None;
        self.error_message = None;
    }

    /// Apply the outcome of `fetch_current_user`, returning the failure class.
    pub(crate) fn settle(&mut self, outcome: Result<User, ApiError>) -> Option<ResolutionError> {
        match outcome {
            Ok(user) => {
                self.status = SessionStatus::Authenticated;
                self.user = Some(user);
                self.error_message = None;
                None
            }
            Err(err) => {
                let class = ResolutionError::classify(&err);
                self.user = None;
                self.error_message = class.user_message();
                self.status = match class {
                    ResolutionError::CleanUnauthenticated => SessionStatus::Unauthenticated,
                    ResolutionError::ServerError(_) | ResolutionError::NetworkError(_) => SessionStatus::Error,
                };
                Some(class)
            }
        }
    }

    /// Explicit logout: reset to an empty unauthenticated state.
    pub(crate) fn sign_out(&mut self) {
        *self = Self {
            status: SessionStatus::Unauthenticated,
            user: None,
            error_message: None,
            signed_out: true,
        };
    }
}

/// What the inner session gate shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Full-screen "preparing your workspace" placeholder.
    Loader,
    /// Retry screen with the message to display.
    Recoverable(String),
    /// Hand rendering to the children (route guard decides the rest).
    Pass,
}

/// Inner gate decision for a state snapshot.
pub fn gate_view(state: &SessionState) -> GateView {
    match state.status {
        SessionStatus::Loading => GateView::Loader,
        SessionStatus::Error => GateView::Recoverable(
            state
                .error_message
                .clone()
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned()),
        ),
        SessionStatus::Authenticated | SessionStatus::Unauthenticated => GateView::Pass,
    }
}

/// Protected content renders only for an authenticated session.
pub fn shell_renders(status: SessionStatus) -> bool {
    status == SessionStatus::Authenticated
}

/// Login URL the route guard should navigate to, if any.
///
/// Only a confirmed "no session" answer redirects, carrying `path` as the
/// return target. After an explicit logout the store has already navigated.
pub fn redirect_target(state: &SessionState, path: &str, config: &DashboardConfig) -> Option<String> {
    if state.status != SessionStatus::Unauthenticated || state.signed_out {
        return None;
    }
    let path = if path.is_empty() { "/" } else { path };
    Some(config.auth_url(Some(path)))
}

/// Skip re-issuing the navigation already sent for this target.
pub fn should_navigate(target: Option<&str>, previous: Option<&str>) -> bool {
    target.is_some() && target != previous
}
