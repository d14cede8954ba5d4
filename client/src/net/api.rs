//! Remote session client: "who am I" and "log out".
//!
//! ERROR HANDLING
//! ==============
//! Both calls surface [`ApiError`] unchanged; interpreting status codes is the
//! session store's job. Neither call retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::sync::{Arc, LazyLock};

use super::http::{ApiError, HttpClient, Method};
use super::types::{MeResponse, User};
use crate::config::DashboardConfig;

pub const CURRENT_USER_PATH: &str = "/auth/me";
pub const LOGOUT_PATH: &str = "/auth/logout";

static SHARED_API: LazyLock<Arc<HttpSessionApi>> =
    LazyLock::new(|| Arc::new(HttpSessionApi::new(&DashboardConfig::global().api_base_url)));

/// Backend operations the session store depends on.
pub trait SessionApi {
    /// Resolve the user behind the ambient session credential.
    fn fetch_current_user(&self) -> impl Future<Output = Result<User, ApiError>>;

    /// Ask the backend to invalidate the session credential.
    fn logout_current_user(&self) -> impl Future<Output = Result<(), ApiError>>;
}

/// [`SessionApi`] over the dashboard backend.
#[derive(Clone, Debug)]
pub struct HttpSessionApi {
    http: HttpClient,
}

impl HttpSessionApi {
    pub fn new(api_base_url: &str) -> Self {
        Self { http: HttpClient::new(api_base_url) }
    }

    /// Process-wide client for the configured backend.
    ///
    /// The SSR host renders `App` per request; every render shares this one
    /// connection pool and cookie store.
    pub fn global() -> Arc<Self> {
        Arc::clone(&SHARED_API)
    }
}

impl SessionApi for HttpSessionApi {
    /// `GET /auth/me`. A missing or invalid session comes back as status 401.
    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        let resp: MeResponse = self.http.request_json(Method::Get, CURRENT_USER_PATH, None).await?;
        Ok(resp.user)
    }

    /// `POST /auth/logout`.
    async fn logout_current_user(&self) -> Result<(), ApiError> {
        self.http.request_empty(Method::Post, LOGOUT_PATH, None).await
    }
}
