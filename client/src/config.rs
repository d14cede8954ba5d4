//! Dashboard configuration resolved from `OUTLIERS_*` environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are captured at build time so the WASM bundle and the SSR host see
//! the same endpoints, then cached for the life of the process.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::LazyLock;

use crate::util::redirect;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/v1";
pub const DEFAULT_MARKETING_URL: &str = "http://localhost:3000";
pub const DEFAULT_AUTH_PATH: &str = "/auth";

pub const API_BASE_URL_VAR: &str = "OUTLIERS_API_BASE_URL";
pub const MARKETING_URL_VAR: &str = "OUTLIERS_MARKETING_URL";
pub const AUTH_PATH_VAR: &str = "OUTLIERS_AUTH_PATH";

static BUILD_CONFIG: LazyLock<DashboardConfig> = LazyLock::new(DashboardConfig::from_build_env);

/// Endpoints the dashboard talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend root for session calls, without a trailing slash.
    pub api_base_url: String,
    /// Marketing site root used for unauthenticated redirects, without a trailing slash.
    pub marketing_url: String,
    /// Login screen path on the marketing site, always with one leading slash.
    pub auth_path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl DashboardConfig {
    /// Process-wide config captured from the build environment.
    pub fn global() -> &'static Self {
        &BUILD_CONFIG
    }

    /// Build config from any key lookup. Empty values count as unset.
    ///
    /// Keys:
    /// - `OUTLIERS_API_BASE_URL`: default `http://localhost:4000/v1`
    /// - `OUTLIERS_MARKETING_URL`: default `http://localhost:3000`
    /// - `OUTLIERS_AUTH_PATH`: default `/auth`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Self {
            api_base_url: strip_trailing_slashes(&read(API_BASE_URL_VAR, DEFAULT_API_BASE_URL)).to_owned(),
            marketing_url: strip_trailing_slashes(&read(MARKETING_URL_VAR, DEFAULT_MARKETING_URL)).to_owned(),
            auth_path: normalise_path(&read(AUTH_PATH_VAR, DEFAULT_AUTH_PATH)),
        }
    }

    fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                API_BASE_URL_VAR => option_env!("OUTLIERS_API_BASE_URL"),
                MARKETING_URL_VAR => option_env!("OUTLIERS_MARKETING_URL"),
                AUTH_PATH_VAR => option_env!("OUTLIERS_AUTH_PATH"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Login URL on the marketing site, optionally carrying a `next` return path.
    pub fn auth_url(&self, next: Option<&str>) -> String {
        redirect::marketing_auth_url(&self.marketing_url, &self.auth_path, next)
    }
}

pub(crate) fn strip_trailing_slashes(url: &str) -> &str {
    url.trim_end_matches('/')
}

pub(crate) fn normalise_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
